use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod models;
mod services;
mod utils;

use utils::ChartConfig;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let filter = EnvFilter::from_default_env();
    let filter = match "tariff_charts=info".parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting tariff chart generation...");

    let config = match ChartConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Writing charts to {} at {} dpi", config.output_dir.display(), config.dpi);

    match services::render_all(&config) {
        Ok(paths) => {
            info!("Done: {} charts written", paths.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Chart generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
