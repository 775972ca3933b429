//! Storage configuration.

use serde::{Deserialize, Serialize};

/// Tunables for [`NodeDataStorage`](super::NodeDataStorage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageOptions {
    /// Reset the data of nodes that resolve as unreachable (superseded or
    /// detached) during a recomputation pass.
    pub discard_unreachable_data: bool,

    /// Number of nodes both internal maps are pre-sized for.
    pub initial_capacity: usize,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            discard_unreachable_data: true,
            initial_capacity: 0,
        }
    }
}

impl StorageOptions {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
