use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::sector::label_anchor;
use crate::models::{ChartText, SectorPerformance};
use crate::services::chart_service;
use crate::utils::series::format_percent;
use crate::utils::{ChartConfig, ChartError, Table};

pub const OUTPUT_FILE: &str = "sector_performance.png";
const FIGURE_INCHES: (u32, u32) = (10, 6);
const Y_RANGE: (f64, f64) = (-10.0, 15.0);

pub fn chart_text() -> ChartText {
    ChartText {
        title: vec![
            "Sector Performance Under Tariff Scenario 1".to_string(),
            "(With Currency Offset)".to_string(),
        ],
        note: vec![
            "Domestic Sectors Gain, Exporters Lag".to_string(),
            "Due to Strong Dollar".to_string(),
        ],
        x_desc: None,
        y_desc: "Stock Price Change (%)".to_string(),
    }
}

pub fn summary_table(performance: &SectorPerformance) -> Table {
    let mut table = Table::new(&["Sector", "Change"]);
    for sector in &performance.sectors {
        table.add_row(&[sector.label.as_str(), format_percent(sector.value).as_str()]);
    }
    table
}

/// Render the sector performance bars into the configured output directory
pub fn plot_sector_performance(config: &ChartConfig) -> Result<PathBuf, ChartError> {
    let path = config.output_path(OUTPUT_FILE);
    render_performance(&SectorPerformance::default(), config, &path)?;
    Ok(path)
}

/// Render signed percentage bars; gains are labeled above, losses below
pub fn render_performance(
    performance: &SectorPerformance,
    config: &ChartConfig,
    path: &Path,
) -> Result<(), ChartError> {
    info!("📉 Rendering sector performance chart to {}", path.display());
    let table = summary_table(performance);
    info!("Sector changes ({} sectors):\n{}", table.len(), table.render());

    let root = chart_service::new_canvas(path, config.figure_size(FIGURE_INCHES.0, FIGURE_INCHES.1))?;
    chart_service::draw_bar_chart(
        &root,
        &performance.sectors,
        Y_RANGE.0..Y_RANGE.1,
        &chart_text(),
        config,
        |bar| (format_percent(bar.value), label_anchor(bar.value)),
    )?;
    chart_service::finish(&root, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::chart_service::{require_fonts, scratch_config};

    #[test]
    fn test_summary_table_signs() {
        let rendered = summary_table(&SectorPerformance::default()).render();
        assert!(rendered.contains("Energy        | 10%"));
        assert!(rendered.contains("Exporters     | -5%"));
    }

    #[test]
    fn test_plot_writes_png() {
        if !require_fonts("sector_service::test_plot_writes_png") {
            return;
        }
        let config = scratch_config("sectors");
        let path = plot_sector_performance(&config).expect("sector chart renders");

        let metadata = std::fs::metadata(&path).expect("chart exists");
        assert!(metadata.len() > 0);

        let _ = std::fs::remove_dir_all(&config.output_dir);
    }
}
