use crate::application::integration_source::IntegrationSource;
use crate::domain::integration::Integration;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub grafana: GrafanaSettings,
    #[serde(default)]
    pub integrations: IntegrationsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GrafanaSettings {
    /// Upper bound on each outbound call. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl GrafanaSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct IntegrationsConfig {
    #[serde(default)]
    pub znk_grafana: Vec<GrafanaIntegrationConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GrafanaIntegrationConfig {
    pub host: Option<String>,
    pub token: Option<String>,
}

impl GrafanaIntegrationConfig {
    pub fn to_integration(&self) -> Integration {
        Integration::new(
            self.host.clone().unwrap_or_default(),
            self.token.clone().unwrap_or_default(),
        )
    }
}

/// Integrations as loaded at startup, handed out fresh on every request
#[derive(Debug, Clone)]
pub struct ConfigIntegrationSource {
    entries: Vec<GrafanaIntegrationConfig>,
}

impl ConfigIntegrationSource {
    pub fn new(config: &IntegrationsConfig) -> Self {
        Self {
            entries: config.znk_grafana.clone(),
        }
    }
}

impl IntegrationSource for ConfigIntegrationSource {
    fn integrations(&self) -> Vec<Integration> {
        self.entries
            .iter()
            .map(GrafanaIntegrationConfig::to_integration)
            .collect()
    }
}

/// Load `config/app.*` (optional) overlaid with `SNAPSHOT__*` environment variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(
            config::Environment::with_prefix("SNAPSHOT")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
