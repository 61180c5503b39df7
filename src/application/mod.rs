// Application layer - Use cases and the seams they depend on
pub mod credential_resolver;
pub mod grafana_repository;
pub mod integration_source;
pub mod snapshot_service;
