//! Shared helpers for the HTTP integration tests.

pub mod mock_grafana;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use grafana_snapshot::application::snapshot_service::SnapshotService;
use grafana_snapshot::domain::integration::Integration;
use grafana_snapshot::infrastructure::grafana_client::GrafanaClient;
use grafana_snapshot::presentation::app_state::AppState;
use grafana_snapshot::presentation::router::build_router;

/// Router wired exactly as in production, against the given integrations
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    pub fn new(integrations: Vec<Integration>) -> Self {
        let grafana = Arc::new(GrafanaClient::with_client(reqwest::Client::new()));
        let snapshot_service = SnapshotService::new(grafana, Arc::new(integrations));
        let router = build_router(Arc::new(AppState { snapshot_service }));
        Self { router }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::get(path).body(Body::empty()).unwrap();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse { status, body }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

/// `/snap?conf=<host>@<uid>` with the host percent-encoded
pub fn snap_path(host: &str, uid: &str) -> String {
    format!("/snap?conf={}", urlencoding::encode(&format!("{}@{}", host, uid)))
}
