//! VentureHub Dashboard Server
//!
//! Main entry point for the founder and investor dashboard service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use venturehub_api::{AppState, create_router};
use venturehub_core::dashboard::{DemoProvider, JsonFileProvider, MetricsProvider};
use venturehub_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "venturehub=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Pick the metrics source
    let provider: Arc<dyn MetricsProvider> = match &config.dashboard.snapshot_path {
        Some(path) => {
            info!(path = %path, "Serving metrics from snapshot file");
            Arc::new(JsonFileProvider::new(path))
        }
        None => {
            info!("Serving built-in demo metrics");
            Arc::new(DemoProvider::new())
        }
    };
    info!(
        founder_rotation_ms = config.dashboard.founder_rotation_ms,
        investor_rotation_ms = config.dashboard.investor_rotation_ms,
        default_theme = %config.dashboard.default_theme,
        "Dashboard configured"
    );

    // Create application state and router
    let state = AppState::new(provider, config.dashboard.clone());
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
