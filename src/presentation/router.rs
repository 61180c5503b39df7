// Router construction shared by the binary and the integration tests
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, snap};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/snap", get(snap))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
