use std::path::PathBuf;
use super::errors::ChartError;

const DEFAULT_DPI: u32 = 100;
const MIN_DPI: u32 = 50;
const MAX_DPI: u32 = 600;

/// Runtime settings shared by every chart
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub output_dir: PathBuf,
    pub dpi: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            output_dir: PathBuf::from("."),
            dpi: DEFAULT_DPI,
        }
    }
}

impl ChartConfig {
    /// Load settings from the process environment (`.env` already applied by main)
    pub fn from_env() -> Result<Self, ChartError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    /// Recognised keys: CHART_OUTPUT_DIR, CHART_DPI
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChartError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ChartConfig::default();

        if let Some(dir) = lookup("CHART_OUTPUT_DIR").filter(|d| !d.trim().is_empty()) {
            config.output_dir = PathBuf::from(dir.trim());
        }

        if let Some(dpi) = lookup("CHART_DPI") {
            config.dpi = parse_dpi(&dpi)?;
        }

        if !config.output_dir.is_dir() {
            return Err(ChartError::Config(format!(
                "CHART_OUTPUT_DIR '{}' is not an existing directory",
                config.output_dir.display()
            )));
        }

        Ok(config)
    }

    /// Pixel size of a figure given in inches
    pub fn figure_size(&self, width_in: u32, height_in: u32) -> (u32, u32) {
        (width_in * self.dpi, height_in * self.dpi)
    }

    /// Scale a point size (as used for fonts at 72 pt/inch) to pixels
    pub fn points(&self, pt: f64) -> f64 {
        pt * self.dpi as f64 / 72.0
    }

    /// Full path for an output file name
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

fn parse_dpi(raw: &str) -> Result<u32, ChartError> {
    let dpi: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ChartError::Config(format!("CHART_DPI must be a whole number, got '{}'", raw)))?;

    if !(MIN_DPI..=MAX_DPI).contains(&dpi) {
        return Err(ChartError::Config(format!(
            "CHART_DPI must be between {} and {}, got {}",
            MIN_DPI, MAX_DPI, dpi
        )));
    }

    Ok(dpi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ChartConfig::from_lookup(lookup_from(&[])).expect("defaults should load");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.dpi, 100);
        assert_eq!(config.figure_size(8, 6), (800, 600));
        assert_eq!(config.figure_size(10, 6), (1000, 600));
    }

    #[test]
    fn test_custom_dpi_and_dir() {
        let tmp = std::env::temp_dir();
        let tmp_str = tmp.to_string_lossy().to_string();
        let config = ChartConfig::from_lookup(lookup_from(&[
            ("CHART_OUTPUT_DIR", tmp_str.as_str()),
            ("CHART_DPI", " 150 "),
        ]))
        .expect("valid config");

        assert_eq!(config.output_dir, tmp);
        assert_eq!(config.figure_size(10, 6), (1500, 900));
        assert_eq!(config.output_path("a.png"), tmp.join("a.png"));
    }

    #[test]
    fn test_rejects_bad_dpi() {
        for raw in ["abc", "-5", "10", "10000"] {
            let result = ChartConfig::from_lookup(lookup_from(&[("CHART_DPI", raw)]));
            assert!(matches!(result, Err(ChartError::Config(_))), "accepted dpi {}", raw);
        }
    }

    #[test]
    fn test_rejects_missing_output_dir() {
        let result = ChartConfig::from_lookup(lookup_from(&[(
            "CHART_OUTPUT_DIR",
            "/definitely/not/a/real/chart/dir",
        )]));
        assert!(matches!(result, Err(ChartError::Config(_))));
    }

    #[test]
    fn test_points_scale_with_dpi() {
        let config = ChartConfig { dpi: 144, ..ChartConfig::default() };
        assert!((config.points(10.0) - 20.0).abs() < 1e-9);
    }
}
