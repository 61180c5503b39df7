// Domain layer - Request-scoped models
pub mod dashboard;
pub mod integration;
pub mod snapshot;
