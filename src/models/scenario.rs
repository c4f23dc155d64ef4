//! S&P 500 trajectories under three tariff scenarios

use super::chart::Trajectory;
use crate::utils::series::{apply_changes, hold_last, linspace};

pub const MONTHS: usize = 12;
pub const BASELINE: f64 = 100.0;

/// Twelve monthly index values per scenario
#[derive(Debug, Clone)]
pub struct StockScenarios {
    pub offset: Vec<f64>,
    pub no_offset: Vec<f64>,
    pub retaliation: Vec<f64>,
}

impl StockScenarios {
    /// Build the three trajectories from `BASELINE`
    ///
    /// - offset: steady climb to +10% over the year
    /// - no offset: slide to -5% by month 6, then flat
    /// - retaliation: drop to -15% by month 4, then recover to -5% by month 12
    pub fn build() -> Self {
        let offset = apply_changes(BASELINE, &linspace(0.0, 0.10, MONTHS));

        let no_offset = hold_last(apply_changes(BASELINE, &linspace(0.0, -0.05, 6)), MONTHS - 6);

        let mut retaliation = apply_changes(BASELINE, &linspace(0.0, -0.15, 4));
        retaliation.extend(apply_changes(BASELINE, &linspace(-0.15, -0.05, MONTHS - 4)));

        StockScenarios {
            offset,
            no_offset,
            retaliation,
        }
    }

    pub fn trajectories(&self) -> Vec<Trajectory> {
        vec![
            Trajectory {
                label: "Scenario 1: With Currency Offset (+5-10%)".to_string(),
                color: 0x4CAF50,
                values: self.offset.clone(),
            },
            Trajectory {
                label: "Scenario 2: No Offset (Flat to -5%)".to_string(),
                color: 0xFF5733,
                values: self.no_offset.clone(),
            },
            Trajectory {
                label: "Scenario 3: Retaliation (-10-15%)".to_string(),
                color: 0x3498DB,
                values: self.retaliation.clone(),
            },
        ]
    }
}
