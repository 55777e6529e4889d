mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod provision;
mod routes;
mod service;
mod spanner;
mod state;
mod store;

use anyhow::Context;
use config::{Config, StoreBackend};
use service::CustomerService;
use spanner::SpannerCustomerStore;
use state::AppState;
use std::sync::Arc;
use store::{CustomerStore, InMemoryCustomerStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("customer-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store: Arc<dyn CustomerStore> = match config.store_backend {
        StoreBackend::Spanner => {
            provision::provision(&config).await?;
            Arc::new(SpannerCustomerStore::from_config(&config).await?)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on exit");
            Arc::new(InMemoryCustomerStore::new())
        }
    };

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        service: CustomerService::new(store),
        config: Arc::new(config),
    };
    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}
