//! # Fitlog Server
//!
//! Main entry point for the Fitlog exercise tracker.

use anyhow::Context;
use fitlog_config::ConfigLoader;
use fitlog_server::{logging, startup, Application};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {:#}", e);
        eprintln!("fitlog-server: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = ConfigLoader::from_default_location()
        .context("Failed to load configuration")?
        .into_config();

    logging::init(&config.logging).context("Failed to initialize logging")?;
    startup::print_banner();

    info!("Starting Fitlog server...");
    info!("Version: {}", config.app.version);
    info!("Environment: {}", config.app.environment);

    let app = Application::build(config)
        .await
        .context("Failed to build application")?;
    app.run().await.context("Server terminated with an error")?;

    Ok(())
}
