//! Shared styling and drawing helpers for every chart
//!
//! The look follows a ggplot-like theme: white canvas, grey plot panel,
//! white grid lines, grey axis text.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::models::{BarDatum, ChartText, LabelAnchor};
use crate::utils::series::format_tick;
use crate::utils::{render_error, ChartConfig, ChartError};

pub const PANEL_GREY: RGBColor = RGBColor(229, 229, 229);
pub const AXIS_GREY: RGBColor = RGBColor(77, 77, 77);
pub const FONT: &str = "sans-serif";

/// Bars fill this share of their slot, as matplotlib's default width
const BAR_WIDTH: f64 = 0.8;

pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Unpack a 0xRRGGBB color
pub fn rgb(hex: u32) -> RGBColor {
    RGBColor(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Font at a size given in points
pub fn font(config: &ChartConfig, pt: f64) -> FontDesc<'static> {
    (FONT, config.points(pt)).into_font()
}

/// Open a bitmap canvas at `path` and paint it white
pub fn new_canvas(path: &Path, size: (u32, u32)) -> Result<Canvas<'_>, ChartError> {
    debug!("Opening {}x{} canvas for {}", size.0, size.1, path.display());
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(render_error("Failed to fill canvas"))?;
    Ok(root)
}

/// Draw a centered, possibly multi-line title and return the area below it
pub fn draw_title<'a>(
    root: &Canvas<'a>,
    lines: &[String],
    config: &ChartConfig,
) -> Result<Canvas<'a>, ChartError> {
    let size = config.points(14.0);
    let line_height = (size * 1.25).ceil() as u32;
    let top_pad = (size * 0.6).ceil() as u32;
    let strip = top_pad * 2 + line_height * lines.len() as u32;

    let (title_area, body) = root.split_vertically(strip);
    let style = TextStyle::from(font(config, 14.0)).pos(Pos::new(HPos::Center, VPos::Top));
    let center_x = (title_area.dim_in_pixel().0 / 2) as i32;

    for (i, line) in lines.iter().enumerate() {
        let y = (top_pad + line_height * i as u32) as i32;
        title_area
            .draw_text(line, &style, (center_x, y))
            .map_err(render_error("Failed to draw title"))?;
    }

    Ok(body)
}

/// Draw the boxed note centered near the top of a plotting area
pub fn draw_note(
    area: &Canvas<'_>,
    lines: &[String],
    config: &ChartConfig,
) -> Result<(), ChartError> {
    if lines.is_empty() {
        return Ok(());
    }

    let style = TextStyle::from(font(config, 10.0)).pos(Pos::new(HPos::Center, VPos::Top));

    let mut text_width = 0u32;
    let mut line_height = 0u32;
    for line in lines {
        let (w, h) = area
            .estimate_text_size(line, &style)
            .map_err(render_error("Failed to measure note"))?;
        text_width = text_width.max(w);
        line_height = line_height.max(h);
    }

    let pad = config.points(4.0).ceil() as i32;
    let (area_width, area_height) = area.dim_in_pixel();
    let center_x = area_width as i32 / 2;
    // box top sits 5% below the panel's top edge
    let top = (area_height as f64 * 0.05) as i32;
    let half_width = text_width as i32 / 2 + pad;
    let bottom = top + line_height as i32 * lines.len() as i32 + pad * 2;

    let corners = [(center_x - half_width, top), (center_x + half_width, bottom)];
    area.draw(&Rectangle::new(corners, WHITE.mix(0.8).filled()))
        .map_err(render_error("Failed to draw note box"))?;
    area.draw(&Rectangle::new(corners, AXIS_GREY.stroke_width(1)))
        .map_err(render_error("Failed to draw note border"))?;

    for (i, line) in lines.iter().enumerate() {
        let y = top + pad + line_height as i32 * i as i32;
        area.draw_text(line, &style, (center_x, y))
            .map_err(render_error("Failed to draw note"))?;
    }

    Ok(())
}

/// Text style for a value label anchored above or below a point
pub fn anchored_style(config: &ChartConfig, anchor: LabelAnchor) -> (TextStyle<'static>, f64) {
    let (vpos, y) = match anchor {
        LabelAnchor::Above(y) => (VPos::Bottom, y),
        LabelAnchor::Below(y) => (VPos::Top, y),
    };
    (
        TextStyle::from(font(config, 10.0)).pos(Pos::new(HPos::Center, vpos)),
        y,
    )
}

/// Category label for an x coordinate, empty between bar centers
fn category_label(bars: &[BarDatum], x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    bars.get(nearest as usize)
        .map(|b| b.label.clone())
        .unwrap_or_default()
}

/// Render a categorical bar chart with per-bar annotations
///
/// Bar `i` is centered on x = i, so the mesh's integer key points land on the
/// bar centers and carry the category labels. `annotate` returns the label
/// text and where it is anchored for each bar.
pub fn draw_bar_chart<F>(
    root: &Canvas<'_>,
    bars: &[BarDatum],
    y_range: Range<f64>,
    text: &ChartText,
    config: &ChartConfig,
    annotate: F,
) -> Result<(), ChartError>
where
    F: Fn(&BarDatum) -> (String, LabelAnchor),
{
    if bars.is_empty() {
        return Err(ChartError::Render("Bar chart needs at least one bar".to_string()));
    }

    let body = draw_title(root, &text.title, config)?;
    let x_range = -0.5..(bars.len() as f64 - 0.5);

    let mut chart = ChartBuilder::on(&body)
        .margin(config.points(10.0) as u32)
        .x_label_area_size(config.points(28.0) as u32)
        .y_label_area_size(config.points(44.0) as u32)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_error("Failed to build chart"))?;

    chart
        .plotting_area()
        .fill(&PANEL_GREY)
        .map_err(render_error("Failed to fill plot panel"))?;

    let x_formatter = |x: &f64| category_label(bars, *x);
    let y_formatter = |y: &f64| format_tick(*y);
    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .bold_line_style(WHITE.stroke_width(1))
        .light_line_style(WHITE.mix(0.4).stroke_width(1))
        .axis_style(AXIS_GREY.stroke_width(1))
        .label_style(font(config, 10.0).color(&AXIS_GREY))
        .axis_desc_style(font(config, 12.0))
        .y_desc(text.y_desc.as_str());
    if let Some(x_desc) = &text.x_desc {
        mesh.x_desc(x_desc.as_str());
    }
    mesh.draw().map_err(render_error("Failed to draw mesh"))?;

    let half = BAR_WIDTH / 2.0;
    chart
        .draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let x = i as f64;
            Rectangle::new([(x - half, 0.0), (x + half, bar.value)], rgb(bar.color).filled())
        }))
        .map_err(render_error("Failed to draw bars"))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let x = i as f64;
            Rectangle::new([(x - half, 0.0), (x + half, bar.value)], BLACK.stroke_width(1))
        }))
        .map_err(render_error("Failed to draw bar edges"))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let (label, anchor) = annotate(bar);
            let (style, y) = anchored_style(config, anchor);
            Text::new(label, (i as f64, y), style)
        }))
        .map_err(render_error("Failed to draw bar labels"))?;

    draw_note(&chart.plotting_area().strip_coord_spec(), &text.note, config)?;

    Ok(())
}

/// Flush the canvas to disk and make sure something was written
pub fn finish(root: &Canvas<'_>, path: &Path) -> Result<(), ChartError> {
    root.present()
        .map_err(render_error("Failed to render chart"))?;

    let written = std::fs::metadata(path)
        .map_err(|e| ChartError::Io(format!("Failed to stat {}: {}", path.display(), e)))?;
    if written.len() == 0 {
        return Err(ChartError::Io(format!("{} is empty after rendering", path.display())));
    }

    debug!("Wrote {} bytes to {}", written.len(), path.display());
    Ok(())
}

/// Text layout needs a system font; rendering tests skip on hosts without one
/// and say so on stderr so the skip shows up in `cargo test` output
#[cfg(test)]
pub(crate) fn require_fonts(test_name: &str) -> bool {
    let available = (FONT, 12.0).into_font().box_size("Tariff").is_ok();
    if !available {
        eprintln!("skipping {}: no usable '{}' system font for text layout", test_name, FONT);
    }
    available
}

/// Low-DPI config writing into a fresh per-test temp directory
#[cfg(test)]
pub(crate) fn scratch_config(name: &str) -> ChartConfig {
    let dir = std::env::temp_dir().join(format!("tariff_charts_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    ChartConfig { output_dir: dir, dpi: 50 }
}
