// Integration domain model

/// A configured Grafana instance this service may query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    pub host: String,
    pub token: String,
}

impl Integration {
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
        }
    }
}

/// The `host@dashboardUID` value carried by the `conf` query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeIdentifier {
    pub host: String,
    pub dashboard_uid: String,
}

impl CompositeIdentifier {
    /// Split on the first `@`. Anything after it, further `@`s included, is the UID.
    pub fn parse(conf: &str) -> Self {
        let (host, dashboard_uid) = conf.split_once('@').unwrap_or((conf, ""));
        Self {
            host: host.to_string(),
            dashboard_uid: dashboard_uid.to_string(),
        }
    }
}
