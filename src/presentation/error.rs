// HTTP error responses
use crate::application::snapshot_service::SnapshotError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No Conf provided")]
    MissingConf,

    #[error("{0}")]
    BadQuery(String),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingConf | ApiError::BadQuery(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Snapshot(SnapshotError::HostNotFound)
            | ApiError::Snapshot(SnapshotError::DashboardNotFound) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiError::Snapshot(SnapshotError::NoIntegrations) => {
                tracing::error!("Snapshot request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            ApiError::Snapshot(SnapshotError::Upstream(e)) => {
                tracing::error!("Snapshot request failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
