//! Registry and contract behaviour.

use serde::{Deserialize, Serialize};

/// Configuration for the sequential registries and their contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// When true, a lookup of an unassigned id is reported as a failed
    /// response instead of a successful response carrying `null`.
    pub strict_lookup: bool,
    /// Pre-allocated slots per registry.
    pub initial_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_lookup: false,
            initial_capacity: 0,
        }
    }
}
