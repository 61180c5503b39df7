// HTTP request handlers
use crate::domain::snapshot::SnapshotResult;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SnapQuery {
    pub conf: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render every panel of the dashboard named by `conf=<host>@<dashboardUID>`
pub async fn snap(
    query: Result<Query<SnapQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SnapshotResult>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadQuery(rejection.body_text()))?;
    let conf = query
        .conf
        .filter(|c| !c.is_empty())
        .ok_or(ApiError::MissingConf)?;

    let result = state.snapshot_service.snapshot(&conf).await?;
    tracing::info!("Rendered {} snapshots for {}", result.snapshots.len(), conf);

    Ok(Json(result))
}
