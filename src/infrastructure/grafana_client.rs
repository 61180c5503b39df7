// Grafana HTTP API implementation
use crate::application::grafana_repository::{GrafanaError, GrafanaRepository};
use crate::domain::dashboard::DashboardModel;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// Pull `dashboard` out of a `/api/dashboards/uid/{uid}` body. Absent, null, false,
/// zero and empty-string values all mean there is no dashboard.
fn dashboard_field(body: Value) -> Option<Value> {
    let Value::Object(mut map) = body else {
        return None;
    };
    map.remove("dashboard").filter(|dashboard| match dashboard {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[derive(Debug, Clone)]
pub struct GrafanaClient {
    client: reqwest::Client,
}

impl GrafanaClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn dashboard_url(host: &str, dashboard_uid: &str) -> String {
        format!(
            "{}/api/dashboards/uid/{}",
            host,
            urlencoding::encode(dashboard_uid)
        )
    }

    fn render_url(host: &str, dashboard_uid: &str, panel_id: i64) -> String {
        format!(
            "{}/render/d-solo/{}/new-dashboard?orgId=1&panelId={}",
            host,
            urlencoding::encode(dashboard_uid),
            panel_id
        )
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }
}

#[async_trait]
impl GrafanaRepository for GrafanaClient {
    async fn fetch_dashboard(
        &self,
        host: &str,
        dashboard_uid: &str,
        token: &str,
    ) -> Result<Option<DashboardModel>, GrafanaError> {
        let url = Self::dashboard_url(host, dashboard_uid);
        tracing::debug!("Fetching dashboard model from {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, Self::bearer(token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| GrafanaError::Request {
                url: url.clone(),
                source,
            })?;

        // Grafana answers an unknown UID with a JSON error body and no `dashboard`
        // field, so the status is not inspected here.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| GrafanaError::Request {
                url: url.clone(),
                source,
            })?;

        let json: Value =
            serde_json::from_slice(&body).map_err(|source| GrafanaError::InvalidJson {
                url: url.clone(),
                source,
            })?;

        let Some(dashboard) = dashboard_field(json) else {
            tracing::debug!("No dashboard in response from {} (status {})", url, status);
            return Ok(None);
        };

        serde_json::from_value(dashboard)
            .map(Some)
            .map_err(|e| GrafanaError::MalformedResponse {
                url,
                reason: e.to_string(),
            })
    }

    async fn render_panel(
        &self,
        host: &str,
        dashboard_uid: &str,
        panel_id: i64,
        token: &str,
    ) -> Result<Bytes, GrafanaError> {
        let url = Self::render_url(host, dashboard_uid, panel_id);
        tracing::debug!("Rendering panel {} via {}", panel_id, url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, Self::bearer(token))
            .send()
            .await
            .map_err(|source| GrafanaError::Request {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(GrafanaError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|source| GrafanaError::Request { url, source })
    }
}
