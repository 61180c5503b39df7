//! Grafana panel snapshots
//!
//! Resolves a Grafana host's credentials from configuration, fetches a
//! dashboard and returns every panel rendered as a base64 image.
//! This library exposes the layers for the binary and for integration tests.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
