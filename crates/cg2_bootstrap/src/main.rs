#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use cg2_bootstrap::app;
use cg2_bootstrap::config::BootstrapConfig;
use cg2_bootstrap::log_stream::LogStream;
use cg2_bootstrap::windy_error::MyResult;
use tracing::error;
use tracing::info;

pub fn main() -> MyResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();
    info!("Ahoy, world!");

    let config = BootstrapConfig::default();
    let mut log = LogStream::open_in(&config.log_dir, &chrono::Local::now())?;

    if let Err(report) = app::run(&config, &mut log) {
        error!("Startup failed: {}", report);
        log.log(format!("Fatal: {report}"))?;
        return Err(report);
    }
    Ok(())
}
