#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use anyhow::Result;
use clap::Parser;
use streamrules::app::dispatch::{dispatch, load_config};
use streamrules::cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Install default crypto provider for Rustls TLS, so reqwest does not have
    // to pick one when several are compiled in.
    if let Err(e) = rustls::crypto::ring::default_provider().install_default() {
        eprintln!("Warning: Failed to install default crypto provider: {e:?}");
    }

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        config.observability.level().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    dispatch(cli, config).await
}
