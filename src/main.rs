//! Lofi Stats API Server
//!
//! Run with: cargo run --bin lofi-stats
//!
//! # Configuration
//!
//! Settings come from `--config`, else the first config file found in the
//! default locations, then `LOFI_*` environment variables, then the flags
//! below. `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::Parser;
use lofi_stats::api::{serve, AppState};
use lofi_stats::catalog::{CatalogClient, CatalogSource, CatalogStore, ClientConfig};
use lofi_stats::config::{Config, DataConfig};
use lofi_stats::telemetry::init_tracing;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lofi-stats")]
#[command(author, version, about = "Serve lofi label and artist statistics over HTTP")]
struct Args {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the catalog documents
    #[arg(long)]
    data_dir: Option<String>,

    /// Fetch catalog documents from this URL instead of a directory
    #[arg(long)]
    data_url: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
        config.data.url = None;
    }
    if let Some(url) = args.data_url {
        config.data.url = Some(url);
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Lofi Stats API server v{}", env!("CARGO_PKG_VERSION"));

    let catalog = open_catalog(&config.data)?;
    tracing::info!("Catalog documents: {}", catalog.describe());

    let state = AppState::new(catalog, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Lofi Stats API server stopped");
    Ok(())
}

/// Remote documents when a URL is configured, the data directory otherwise
fn open_catalog(data: &DataConfig) -> anyhow::Result<Arc<dyn CatalogSource>> {
    match &data.url {
        Some(url) => {
            let client = CatalogClient::new(ClientConfig {
                base_url: url.clone(),
                request_timeout_ms: data.request_timeout_ms,
            })
            .context("building catalog HTTP client")?;
            Ok(Arc::new(client))
        }
        None => {
            let store = CatalogStore::new(&data.dir);
            if !store.root().is_dir() {
                tracing::warn!(
                    "Data directory {} does not exist yet; readiness will fail until it does",
                    store.root().display()
                );
            }
            Ok(Arc::new(store))
        }
    }
}
