// Credential resolver - Maps a Grafana host to its bearer token
use crate::domain::integration::Integration;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CredentialResolver {
    tokens: HashMap<String, String>,
}

impl CredentialResolver {
    /// Build the host -> token table. Empty hosts are skipped; the last duplicate wins.
    pub fn new(integrations: &[Integration]) -> Self {
        let mut tokens = HashMap::with_capacity(integrations.len());
        for integration in integrations {
            if integration.host.is_empty() {
                continue;
            }
            tokens.insert(integration.host.clone(), integration.token.clone());
        }
        Self { tokens }
    }

    /// Exact-match lookup, no normalization of the host. A blank token counts as unknown.
    pub fn token_for(&self, host: &str) -> Option<&str> {
        self.tokens
            .get(host)
            .map(String::as_str)
            .filter(|token| !token.is_empty())
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
