//! Server entry point for the study-material catalog.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use study_catalog::{Config, MaterialRepository, MemoryStore};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let config = load_config(&args)?;

    let store = if config.catalog.seed_sample_data {
        MemoryStore::with_sample_data()
    } else {
        MemoryStore::new()
    };

    info!(
        materials = store.len().await?,
        seeded = config.catalog.seed_sample_data,
        "Catalog ready"
    );

    study_catalog::api::start_api_server(Arc::new(store), Arc::new(config)).await?;

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(bind) = args.bind {
        config.server.api.bind_address = bind;
    }
    if args.no_seed {
        config.catalog.seed_sample_data = false;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}
