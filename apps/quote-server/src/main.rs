//! REST API server for the in-memory quote store.
//!
//! Parses command-line configuration, seeds the store, and serves
//! requests until Ctrl+C.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use quote_api::{config::ApiConfig, router::Router, server::Server};
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the quote server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Start with an empty store instead of the seed quotes
    #[arg(long)]
    no_seed: bool,
}

impl From<Args> for ApiConfig {
    fn from(args: Args) -> Self {
        ApiConfig {
            host: args.host,
            port: args.port,
            seed: !args.no_seed,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from(Args::parse());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = config
        .socket_addr()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    let store = Arc::new(config.build_store());
    tracing::info!(quotes = store.len(), "Quote store initialised");

    let router = Router::new(store);
    let server = Server::new(addr, router);

    tracing::info!("Starting quote server on {}", addr);
    server
        .serve_with_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl_c: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
