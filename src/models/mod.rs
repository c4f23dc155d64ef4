//! Data models for the three charts
//!
//! Everything here is plain data; drawing lives in `services`.

pub mod chart;
pub mod tariff;
pub mod scenario;
pub mod sector;

pub use chart::{BarDatum, ChartText, LabelAnchor, Trajectory};
pub use tariff::TariffScenario;
pub use scenario::StockScenarios;
pub use sector::SectorPerformance;
