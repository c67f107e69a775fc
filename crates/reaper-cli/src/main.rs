//! Reaper CLI - removes old artifact versions from Nexus repositories.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod clean;
mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over --debug
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(cli.debug).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    clean::run(&cli).await
}

fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("reaper={level},reaper_registry={level},reaper_core={level}")
}
