// Snapshot domain model
use serde::Serialize;

/// Base64-encoded panel images, one per dashboard panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotResult {
    pub snapshots: Vec<String>,
}

impl SnapshotResult {
    pub fn new(snapshots: Vec<String>) -> Self {
        Self { snapshots }
    }
}
