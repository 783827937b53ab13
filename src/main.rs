mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod phone;
mod routes;
mod service;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use service::RecordService;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("phone-address-lookup starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = store::from_config(&config)?;

    let state = AppState {
        records: RecordService::new(store),
        config: Arc::new(config.clone()),
    };
    let app = routes::router(state);

    let addr = (config.service_host.as_str(), config.service_port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| {
            format!("Failed to bind {}:{}", config.service_host, config.service_port)
        })?;

    tracing::info!("Listening on {}", listener.local_addr()?);
    tracing::info!("API docs available at {}", routes::DOCS);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("phone-address-lookup stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
