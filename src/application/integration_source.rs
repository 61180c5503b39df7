// Source of configured Grafana integrations
use crate::domain::integration::Integration;

/// Supplies the integrations list. Called once per request.
pub trait IntegrationSource: Send + Sync {
    fn integrations(&self) -> Vec<Integration>;
}

impl IntegrationSource for Vec<Integration> {
    fn integrations(&self) -> Vec<Integration> {
        self.clone()
    }
}
