//! Mock Grafana instance built on wiremock.

use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub struct MockGrafana {
    pub server: MockServer,
}

impl MockGrafana {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn host(&self) -> String {
        self.server.uri()
    }

    /// Serve a dashboard whose model carries `uid` and the given panel ids
    pub async fn mock_dashboard(&self, requested_uid: &str, uid: &str, panel_ids: &[i64], token: &str) {
        let panels: Vec<_> = panel_ids.iter().map(|id| json!({ "id": id, "type": "timeseries" })).collect();
        Mock::given(method("GET"))
            .and(path(format!("/api/dashboards/uid/{}", requested_uid)))
            .and(header("authorization", format!("Bearer {}", token)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meta": { "type": "db" },
                "dashboard": { "uid": uid, "title": "Test", "panels": panels }
            })))
            .mount(&self.server)
            .await;
    }

    /// Grafana's answer for an unknown UID
    pub async fn mock_dashboard_missing(&self, uid: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/api/dashboards/uid/{}", uid)))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Dashboard not found" })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_render(&self, uid: &str, panel_id: i64, token: &str, image: Vec<u8>) {
        Mock::given(method("GET"))
            .and(path(format!("/render/d-solo/{}/new-dashboard", uid)))
            .and(query_param("orgId", "1"))
            .and(query_param("panelId", panel_id.to_string()))
            .and(header("authorization", format!("Bearer {}", token)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(image)
                    .insert_header("content-type", "image/png"),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn mock_render_failure(&self, uid: &str, panel_id: i64, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/render/d-solo/{}/new-dashboard", uid)))
            .and(query_param("panelId", panel_id.to_string()))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}
