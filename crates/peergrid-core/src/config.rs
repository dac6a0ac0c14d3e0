//! Configuration types for Peergrid

use serde::{Deserialize, Serialize};

/// Discovery configuration for one cluster member
///
/// Supplied by the host's wiring layer; this crate does not load or
/// parse configuration files itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Group this member joins and discovers peers in
    pub group_name: String,

    /// Whether this member pushes its own registration status into the
    /// registry, versus leaving status management to an operator
    pub self_registration: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            group_name: "default".to_string(),
            self_registration: true,
        }
    }
}
