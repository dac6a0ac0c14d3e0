//! Registration status as the registry reports it

use serde::{Deserialize, Serialize};
use std::fmt;

/// Liveness state of a registered instance
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum InstanceStatus {
    /// Instance is serving traffic
    Up,
    /// Instance is shut down or unreachable
    Down,
    /// Instance is starting and not yet eligible for traffic
    Starting,
    /// Instance was taken out of rotation by an operator
    OutOfService,
    /// Registry has no liveness information for the instance
    Unknown,
}

impl Default for InstanceStatus {
    /// A fresh registration starts out as `Starting`.
    fn default() -> Self {
        Self::Starting
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Starting => "STARTING",
            Self::OutOfService => "OUT_OF_SERVICE",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}
