use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod config;
mod dataset;
mod picker;
mod web;

use config::Config;
use dataset::{DatasetClient, GameSource};
use web::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let client = DatasetClient::new(
        &config.dataset_url,
        Duration::from_secs(config.fetch_delay_secs),
        Duration::from_secs(config.http_timeout_secs),
    )?;
    info!(
        "Tip source {}: {} (population delay {}s)",
        client.name(),
        config.dataset_url,
        config.fetch_delay_secs
    );

    let state = AppState {
        source: Arc::new(client),
    };
    let app = web::router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("Serving picks on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
