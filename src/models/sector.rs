//! Sector performance under the currency offset scenario

use super::chart::{BarDatum, LabelAnchor};

const SECTORS: [(&str, f64, u32); 5] = [
    ("Manufacturing", 5.0, 0x4CAF50),
    ("Retail", 8.0, 0xFF5733),
    ("Tech", -2.0, 0x3498DB),
    ("Energy", 10.0, 0xFFC107),
    ("Exporters", -5.0, 0x9C27B0),
];

/// Percentage stock price change per sector
#[derive(Debug, Clone)]
pub struct SectorPerformance {
    pub sectors: Vec<BarDatum>,
}

impl Default for SectorPerformance {
    fn default() -> Self {
        SectorPerformance {
            sectors: SECTORS
                .iter()
                .map(|&(label, pct, color)| BarDatum::new(label, pct, color))
                .collect(),
        }
    }
}

/// Gains are labeled just above the bar, losses just below it
pub fn label_anchor(value: f64) -> LabelAnchor {
    if value >= 0.0 {
        LabelAnchor::Above(value + 0.5)
    } else {
        LabelAnchor::Below(value - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_sectors() {
        let perf = SectorPerformance::default();
        let labels: Vec<&str> = perf.sectors.iter().map(|b| b.label.as_str()).collect();
        let values: Vec<f64> = perf.sectors.iter().map(|b| b.value).collect();
        assert_eq!(labels, ["Manufacturing", "Retail", "Tech", "Energy", "Exporters"]);
        assert_eq!(values, [5.0, 8.0, -2.0, 10.0, -5.0]);
    }

    #[test]
    fn test_label_anchor_by_sign() {
        assert_eq!(label_anchor(5.0), LabelAnchor::Above(5.5));
        assert_eq!(label_anchor(0.0), LabelAnchor::Above(0.5));
        assert_eq!(label_anchor(-2.0), LabelAnchor::Below(-3.0));
    }
}
