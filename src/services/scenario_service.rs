use std::path::{Path, PathBuf};
use plotters::prelude::*;
use tracing::{debug, info};

use crate::models::{ChartText, StockScenarios, Trajectory};
use crate::services::chart_service::{self, font, rgb, AXIS_GREY, PANEL_GREY};
use crate::utils::series::{format_tick, value_range};
use crate::utils::{render_error, ChartConfig, ChartError, Table};

pub const OUTPUT_FILE: &str = "stock_scenarios.png";
const FIGURE_INCHES: (u32, u32) = (10, 6);
/// Every line sits high in the late months, so the legend goes bottom right
/// where it covers no data and stays clear of the note box
const LEGEND_POSITION: SeriesLabelPosition = SeriesLabelPosition::LowerRight;

pub fn chart_text() -> ChartText {
    ChartText {
        title: vec![
            "S&P 500 Performance Under Tariff Scenarios".to_string(),
            "(2025 Illustrative)".to_string(),
        ],
        note: vec![
            "Gradual Tariffs Favor Scenario 1".to_string(),
            "Retaliation Risks Scenario 3".to_string(),
        ],
        x_desc: Some("Month".to_string()),
        y_desc: "S&P 500 Index Value".to_string(),
    }
}

/// Index value per month, one column per scenario
pub fn summary_table(trajectories: &[Trajectory]) -> Table {
    let mut headers = vec!["Month"];
    let names: Vec<String> = (1..=trajectories.len()).map(|i| format!("Scenario {}", i)).collect();
    headers.extend(names.iter().map(|n| n.as_str()));

    let mut table = Table::new(&headers);
    let months = trajectories.iter().map(|t| t.values.len()).max().unwrap_or(0);
    for month in 0..months {
        let mut row = vec![(month + 1).to_string()];
        row.extend(trajectories.iter().map(|t| {
            t.values
                .get(month)
                .map(|v| format!("{:.2}", v))
                .unwrap_or_default()
        }));
        table.add_row(row.as_slice());
    }
    table
}

/// Y axis range covering every trajectory with 10% padding on both sides
pub fn y_axis_range(trajectories: &[Trajectory]) -> Result<(f64, f64), ChartError> {
    let (min_value, max_value) = value_range(trajectories.iter().map(|t| t.values.as_slice()))
        .ok_or_else(|| ChartError::Render("No scenario data to plot".to_string()))?;

    let range = (max_value - min_value).max(1e-8); // Avoid a zero-height axis
    let padding = range * 0.1;
    Ok((min_value - padding, max_value + padding))
}

/// Render the three stock market scenarios into the configured output directory
pub fn plot_stock_scenarios(config: &ChartConfig) -> Result<PathBuf, ChartError> {
    let path = config.output_path(OUTPUT_FILE);
    let trajectories = StockScenarios::build().trajectories();
    render_trajectories(&trajectories, config, &path)?;
    Ok(path)
}

/// Render monthly trajectories as a multi-series line chart with a legend
pub fn render_trajectories(
    trajectories: &[Trajectory],
    config: &ChartConfig,
    path: &Path,
) -> Result<(), ChartError> {
    info!("📈 Rendering stock scenario chart to {}", path.display());
    info!("Scenario index values:\n{}", summary_table(trajectories).render());

    let (y_min, y_max) = y_axis_range(trajectories)?;
    let months = trajectories.iter().map(|t| t.values.len()).max().unwrap_or(1) as f64;
    debug!("Line chart axes: months 1..{}, values {:.2}..{:.2}", months, y_min, y_max);

    let text = chart_text();
    let root = chart_service::new_canvas(path, config.figure_size(FIGURE_INCHES.0, FIGURE_INCHES.1))?;
    let body = chart_service::draw_title(&root, &text.title, config)?;

    let mut chart = ChartBuilder::on(&body)
        .margin(config.points(10.0) as u32)
        .x_label_area_size(config.points(32.0) as u32)
        .y_label_area_size(config.points(44.0) as u32)
        .build_cartesian_2d(0.5..months + 0.5, y_min..y_max)
        .map_err(render_error("Failed to build chart"))?;

    chart
        .plotting_area()
        .fill(&PANEL_GREY)
        .map_err(render_error("Failed to fill plot panel"))?;

    let month_formatter = |x: &f64| format!("{}", x.round() as i64);
    let y_formatter = |y: &f64| format_tick(*y);
    chart
        .configure_mesh()
        .x_labels(months as usize)
        .x_label_formatter(&month_formatter)
        .y_label_formatter(&y_formatter)
        .bold_line_style(WHITE.stroke_width(1))
        .light_line_style(WHITE.mix(0.4).stroke_width(1))
        .axis_style(AXIS_GREY.stroke_width(1))
        .label_style(font(config, 10.0).color(&AXIS_GREY))
        .axis_desc_style(font(config, 12.0))
        .x_desc(text.x_desc.as_deref().unwrap_or("Month"))
        .y_desc(text.y_desc.as_str())
        .draw()
        .map_err(render_error("Failed to draw mesh"))?;

    let line_width = config.points(1.5).round().max(1.0) as u32;
    for trajectory in trajectories {
        let color = rgb(trajectory.color);
        chart
            .draw_series(LineSeries::new(trajectory.points(), color.stroke_width(line_width)))
            .map_err(render_error("Failed to draw scenario line"))?
            .label(trajectory.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });
    }

    chart
        .configure_series_labels()
        .position(LEGEND_POSITION)
        .label_font(font(config, 10.0))
        .background_style(WHITE.mix(0.8))
        .border_style(AXIS_GREY)
        .draw()
        .map_err(render_error("Failed to draw legend"))?;

    chart_service::draw_note(&chart.plotting_area().strip_coord_spec(), &text.note, config)?;

    chart_service::finish(&root, path)
}
