//! Chart building blocks shared by every graphic

/// One bar of a categorical bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    /// RGB packed as 0xRRGGBB
    pub color: u32,
}

impl BarDatum {
    pub fn new(label: &str, value: f64, color: u32) -> Self {
        BarDatum {
            label: label.to_string(),
            value,
            color,
        }
    }
}

/// One line of a line chart, sampled once per month starting at month 1
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub label: String,
    pub color: u32,
    pub values: Vec<f64>,
}

impl Trajectory {
    /// `(month, value)` pairs with months numbered from 1
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v))
    }
}

/// Where a value label sits relative to its bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelAnchor {
    /// Label bottom edge at the given y
    Above(f64),
    /// Label top edge at the given y
    Below(f64),
}

/// Text decorations of a chart
#[derive(Debug, Clone, Default)]
pub struct ChartText {
    pub title: Vec<String>,
    pub note: Vec<String>,
    pub x_desc: Option<String>,
    pub y_desc: String,
}
