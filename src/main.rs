//! tnav CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tnav::cli::{commands, Cli, Commands};
use tnav::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("tnav={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli.config.as_ref().map(PathBuf::from);
    let service_url = cli.service_url.as_deref();

    // Execute command
    match &cli.command {
        Commands::Ask {
            question,
            file,
            method,
        } => {
            let settings = Settings::load_from(config_path.as_ref())?.with_service_url(service_url);
            commands::run_ask(question, file, *method, settings).await?;
        }

        Commands::Session { file, method } => {
            let settings = Settings::load_from(config_path.as_ref())?.with_service_url(service_url);
            commands::run_session(file.clone(), *method, settings).await?;
        }

        // Doctor and config load the file themselves so a broken file can be
        // reported and repaired.
        Commands::Doctor => {
            commands::run_doctor(config_path.as_deref(), service_url).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, config_path)?;
        }
    }

    Ok(())
}
