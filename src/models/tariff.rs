//! Tariff and currency offset scenario

use super::chart::BarDatum;

pub const BAR_LABELS: [&str; 3] = ["No Tariff", "Tariff, No Offset", "Tariff with Offset"];
pub const BAR_COLORS: [u32; 3] = [0x4CAF50, 0xFF5733, 0x3498DB];

/// A widget price under a tariff, with and without an offsetting currency move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffScenario {
    pub base_price: f64,
    pub tariff_rate: f64,
    pub currency_offset: f64,
}

impl Default for TariffScenario {
    fn default() -> Self {
        TariffScenario {
            base_price: 100.0,
            tariff_rate: 0.10,
            currency_offset: 0.10,
        }
    }
}

impl TariffScenario {
    /// Prices without tariff, with tariff, and with tariff after the currency offset
    pub fn prices(&self) -> [f64; 3] {
        let tariffed = 1.0 + self.tariff_rate;
        [
            self.base_price,
            self.base_price * tariffed,
            self.base_price * (1.0 - self.currency_offset) * tariffed,
        ]
    }

    pub fn bars(&self) -> Vec<BarDatum> {
        self.prices()
            .iter()
            .zip(BAR_LABELS.iter().zip(BAR_COLORS.iter()))
            .map(|(&price, (label, &color))| BarDatum::new(label, price, color))
            .collect()
    }

    /// Subtitle describing the scenario, e.g. `(10% Tariff on $100 Widget)`
    pub fn subtitle(&self) -> String {
        format!(
            "({}% Tariff on ${} Widget)",
            round_display(self.tariff_rate * 100.0),
            round_display(self.base_price)
        )
    }
}

/// Drop float noise such as 10.000000000000002 before display
fn round_display(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_prices() {
        let prices = TariffScenario::default().prices();
        assert_relative_eq!(prices[0], 100.0);
        assert_relative_eq!(prices[1], 110.0);
        assert_relative_eq!(prices[2], 99.0, epsilon = 1e-9);
    }

    #[test]
    fn test_offset_exceeding_tariff_lowers_price() {
        let scenario = TariffScenario {
            base_price: 50.0,
            tariff_rate: 0.25,
            currency_offset: 0.30,
        };
        let prices = scenario.prices();
        assert_relative_eq!(prices[1], 62.5);
        assert_relative_eq!(prices[2], 43.75, epsilon = 1e-9);
        assert!(prices[2] < prices[0]);
    }

    #[test]
    fn test_bars_carry_labels_and_colors() {
        let bars = TariffScenario::default().bars();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[1].label, "Tariff, No Offset");
        assert_eq!(bars[2].color, 0x3498DB);
    }

    #[test]
    fn test_subtitle() {
        assert_eq!(TariffScenario::default().subtitle(), "(10% Tariff on $100 Widget)");
        let scenario = TariffScenario { tariff_rate: 0.25, base_price: 80.0, ..Default::default() };
        assert_eq!(scenario.subtitle(), "(25% Tariff on $80 Widget)");
    }
}
