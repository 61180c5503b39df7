// Snapshot service - Use case for rendering every panel of a dashboard
use crate::application::credential_resolver::CredentialResolver;
use crate::application::grafana_repository::{GrafanaError, GrafanaRepository};
use crate::application::integration_source::IntegrationSource;
use crate::domain::integration::CompositeIdentifier;
use crate::domain::snapshot::SnapshotResult;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures::future::try_join_all;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("No Grafana integrations configured")]
    NoIntegrations,

    #[error("Host not found")]
    HostNotFound,

    #[error("Dashboard not found")]
    DashboardNotFound,

    #[error("upstream Grafana error: {0}")]
    Upstream(#[from] GrafanaError),
}

#[derive(Clone)]
pub struct SnapshotService {
    repository: Arc<dyn GrafanaRepository>,
    integrations: Arc<dyn IntegrationSource>,
}

impl SnapshotService {
    pub fn new(
        repository: Arc<dyn GrafanaRepository>,
        integrations: Arc<dyn IntegrationSource>,
    ) -> Self {
        Self {
            repository,
            integrations,
        }
    }

    /// Resolve the host's token, fetch the dashboard and render all of its panels.
    ///
    /// Panels are rendered concurrently. The first failing render fails the whole
    /// batch and the renders still in flight are dropped.
    pub async fn snapshot(&self, conf: &str) -> Result<SnapshotResult, SnapshotError> {
        let integrations = self.integrations.integrations();
        if integrations.is_empty() {
            tracing::warn!("Snapshot requested but no Grafana integrations are configured");
            return Err(SnapshotError::NoIntegrations);
        }
        let resolver = CredentialResolver::new(&integrations);

        let CompositeIdentifier {
            host,
            dashboard_uid,
        } = CompositeIdentifier::parse(conf);
        let token = resolver
            .token_for(&host)
            .ok_or(SnapshotError::HostNotFound)?;

        let dashboard = self
            .repository
            .fetch_dashboard(&host, &dashboard_uid, token)
            .await?
            .ok_or(SnapshotError::DashboardNotFound)?;

        tracing::debug!(
            "Rendering {} panels of dashboard {} on {}",
            dashboard.panels.len(),
            dashboard.uid,
            host
        );

        // Renders address the UID Grafana reported, not the one requested
        let renders = dashboard.panels.iter().map(|panel| {
            let repository = &self.repository;
            let host = host.as_str();
            let uid = dashboard.uid.as_str();
            async move {
                let image = repository.render_panel(host, uid, panel.id, token).await?;
                Ok::<_, GrafanaError>(encode_snapshot(&image))
            }
        });

        let snapshots = try_join_all(renders).await?;
        Ok(SnapshotResult::new(snapshots))
    }
}

/// Base64 over the exact image bytes
pub fn encode_snapshot(image: &[u8]) -> String {
    STANDARD.encode(image)
}
