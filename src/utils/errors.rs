use thiserror::Error;

/// Errors raised while configuring or rendering a chart
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Output error: {0}")]
    Io(String),
}

/// Build a `map_err` adapter that prefixes a plotters error with context
///
/// `root.fill(&WHITE).map_err(render_error("Failed to fill canvas"))?`
/// yields `Render failed: Failed to fill canvas: <plotters message>`
pub fn render_error<E: std::fmt::Display>(context: &'static str) -> impl Fn(E) -> ChartError {
    move |e| ChartError::Render(format!("{}: {}", context, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_keeps_context() {
        let err = render_error("Failed to draw mesh")("backend gone");
        assert_eq!(err.to_string(), "Render failed: Failed to draw mesh: backend gone");
    }

    #[test]
    fn test_config_error_message() {
        let err = ChartError::Config("CHART_DPI must be a number".to_string());
        assert!(err.to_string().contains("CHART_DPI"));
    }
}
