use std::path::PathBuf;
use tracing::info;

use crate::utils::{ChartConfig, ChartError};

pub mod chart_service;
pub mod tariff_service;
pub mod scenario_service;
pub mod sector_service;

/// One chart routine: writes its image and returns the path
type ChartJob = (&'static str, fn(&ChartConfig) -> Result<PathBuf, ChartError>);

const CHARTS: [ChartJob; 3] = [
    ("tariff offset", tariff_service::plot_tariff_offset),
    ("stock scenarios", scenario_service::plot_stock_scenarios),
    ("sector performance", sector_service::plot_sector_performance),
];

/// Render every chart in order, stopping at the first failure
/// Files written before the failure are left in place
pub fn render_all(config: &ChartConfig) -> Result<Vec<PathBuf>, ChartError> {
    let mut written = Vec::with_capacity(CHARTS.len());
    for (name, plot) in CHARTS {
        let path = plot(config)?;
        info!("✅ Saved {} chart to {}", name, path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::chart_service::{require_fonts, scratch_config};

    #[test]
    fn test_render_all_writes_three_files() {
        if !require_fonts("test_render_all_writes_three_files") {
            return;
        }
        let config = scratch_config("render_all");
        let written = render_all(&config).expect("all charts render");

        let names: Vec<_> = written
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, ["tariff_offset.png", "stock_scenarios.png", "sector_performance.png"]);

        let _ = std::fs::remove_dir_all(&config.output_dir);
    }

    #[test]
    fn test_first_failure_stops_later_charts() {
        if !require_fonts("test_first_failure_stops_later_charts") {
            return;
        }
        let config = scratch_config("render_all_fail");
        // a directory where the second chart's file should go makes saving it fail
        std::fs::create_dir_all(config.output_path(scenario_service::OUTPUT_FILE))
            .expect("block scenario output");

        let result = render_all(&config);

        assert!(matches!(result, Err(ChartError::Render(_))), "got {:?}", result);
        assert!(config.output_path(tariff_service::OUTPUT_FILE).is_file());
        assert!(!config.output_path(sector_service::OUTPUT_FILE).exists());

        let _ = std::fs::remove_dir_all(&config.output_dir);
    }
}
