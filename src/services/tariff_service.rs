use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::{BarDatum, ChartText, LabelAnchor, TariffScenario};
use crate::services::chart_service;
use crate::utils::series::format_usd;
use crate::utils::{ChartConfig, ChartError, Table};

pub const OUTPUT_FILE: &str = "tariff_offset.png";
const FIGURE_INCHES: (u32, u32) = (8, 6);
const Y_MAX: f64 = 120.0;
/// Gap between a bar top and its price label, in dollars
const LABEL_OFFSET: f64 = 2.0;

/// Labels for the tariff chart
pub fn chart_text(scenario: &TariffScenario) -> ChartText {
    ChartText {
        title: vec![
            "Impact of Tariffs on Import Prices".to_string(),
            scenario.subtitle(),
        ],
        note: vec![
            "Currency Offset Reduces Price Impact".to_string(),
            "(2018-2019 Example)".to_string(),
        ],
        x_desc: None,
        y_desc: "Price in USD".to_string(),
    }
}

/// Price table logged alongside the chart
pub fn summary_table(scenario: &TariffScenario) -> Table {
    let mut table = Table::new(&["Bar", "Price"]);
    for bar in scenario.bars() {
        table.add_row(&[bar.label.as_str(), format_usd(bar.value).as_str()]);
    }
    table
}

/// Top of the price axis: fixed at 120 unless a price label would not fit under it
pub fn y_axis_max(bars: &[BarDatum]) -> f64 {
    let tallest = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    Y_MAX.max(tallest + LABEL_OFFSET * 4.0)
}

/// Render the default tariff scenario into the configured output directory
pub fn plot_tariff_offset(config: &ChartConfig) -> Result<PathBuf, ChartError> {
    let path = config.output_path(OUTPUT_FILE);
    render_scenario(&TariffScenario::default(), config, &path)?;
    Ok(path)
}

/// Render any tariff scenario as a three-bar price chart at `path`
pub fn render_scenario(
    scenario: &TariffScenario,
    config: &ChartConfig,
    path: &Path,
) -> Result<(), ChartError> {
    info!("📊 Rendering tariff offset chart to {}", path.display());
    debug!("Tariff scenario: {:?} -> prices {:?}", scenario, scenario.prices());
    info!("Tariff prices:\n{}", summary_table(scenario).render());

    let bars = scenario.bars();
    let y_max = y_axis_max(&bars);

    let root = chart_service::new_canvas(path, config.figure_size(FIGURE_INCHES.0, FIGURE_INCHES.1))?;
    chart_service::draw_bar_chart(
        &root,
        &bars,
        0.0..y_max,
        &chart_text(scenario),
        config,
        |bar| (format_usd(bar.value), LabelAnchor::Above(bar.value + LABEL_OFFSET)),
    )?;
    chart_service::finish(&root, path)
}
