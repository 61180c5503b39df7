// Repository trait for Grafana API access
use crate::domain::dashboard::DashboardModel;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Faults talking to an upstream Grafana instance
#[derive(Debug, Error)]
pub enum GrafanaError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} returned a body that is not JSON: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed dashboard in response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}

#[async_trait]
pub trait GrafanaRepository: Send + Sync {
    /// Fetch dashboard metadata. `Ok(None)` when the response carries no dashboard.
    async fn fetch_dashboard(
        &self,
        host: &str,
        dashboard_uid: &str,
        token: &str,
    ) -> Result<Option<DashboardModel>, GrafanaError>;

    /// Fetch the rendered image of a single panel as raw bytes
    async fn render_panel(
        &self,
        host: &str,
        dashboard_uid: &str,
        panel_id: i64,
        token: &str,
    ) -> Result<Bytes, GrafanaError>;
}
