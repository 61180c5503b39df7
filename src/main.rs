// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use grafana_snapshot::application::snapshot_service::SnapshotService;
use grafana_snapshot::infrastructure::config::{load_app_config, ConfigIntegrationSource};
use grafana_snapshot::infrastructure::grafana_client::GrafanaClient;
use grafana_snapshot::presentation::app_state::AppState;
use grafana_snapshot::presentation::router::build_router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grafana_snapshot=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    if app_config.integrations.znk_grafana.is_empty() {
        tracing::warn!("No Grafana integrations configured; /snap will fail until some are added");
    }
    if app_config.grafana.timeout().is_none() {
        tracing::warn!("No Grafana timeout configured; an unresponsive host stalls its requests");
    }

    // Create Grafana client (infrastructure layer)
    let grafana = Arc::new(
        GrafanaClient::new(app_config.grafana.timeout()).context("Failed to build HTTP client")?,
    );
    let integrations = Arc::new(ConfigIntegrationSource::new(&app_config.integrations));

    // Create services (application layer)
    let snapshot_service = SnapshotService::new(grafana, integrations);

    // Create application state
    let state = Arc::new(AppState { snapshot_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = app_config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", app_config.server.bind))?;
    tracing::info!("Starting grafana-snapshot service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
