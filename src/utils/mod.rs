pub mod config;
pub mod errors;
pub mod series;
pub mod table;

pub use config::ChartConfig;
pub use errors::{render_error, ChartError};
pub use table::Table;
