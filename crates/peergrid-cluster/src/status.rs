//! Status update strategies
//!
//! What a member publishes into the registry at lifecycle transitions.

use std::sync::Arc;

use peergrid_core::{GroupName, Result};
use peergrid_registry::{InstanceStatus, LocalNode, RegistrationHandle};

use crate::metadata::{PEER_GROUP, PEER_HOST, PEER_PORT};

/// Decides what a lifecycle transition publishes into the registry
pub trait StatusUpdateStrategy: Send + Sync {
    /// Publish through `handle` for a transition to `status`.
    fn update(&self, handle: &dyn RegistrationHandle, status: InstanceStatus) -> Result<()>;

    /// Whether this strategy pushes status changes into the registry
    fn should_register(&self) -> bool;
}

/// Records the local coordinates in registration metadata and, when
/// self-registration is on, pushes the status change as well
///
/// The metadata write is unconditional: a member advertises where it
/// listens even when an operator controls its visibility by hand, so
/// its coordinates stay available for diagnostics or later activation.
pub struct MetadataUpdater {
    node: Arc<dyn LocalNode>,
    self_registration: bool,
    group_name: GroupName,
}

impl MetadataUpdater {
    pub fn new(node: Arc<dyn LocalNode>, self_registration: bool, group_name: GroupName) -> Self {
        Self {
            node,
            self_registration,
            group_name,
        }
    }
}

impl StatusUpdateStrategy for MetadataUpdater {
    fn update(&self, handle: &dyn RegistrationHandle, status: InstanceStatus) -> Result<()> {
        let address = self.node.listen_address();

        // cluster coordinates go into the shared registration metadata
        let metadata = handle.metadata();
        metadata.insert(PEER_PORT, address.port().to_string());
        metadata.insert(PEER_HOST, address.host());
        metadata.insert(PEER_GROUP, self.group_name.as_str());
        tracing::debug!(
            address = %address,
            group = %self.group_name,
            "published cluster coordinates"
        );

        if self.should_register() {
            handle.set_status(status)?;
        }
        Ok(())
    }

    fn should_register(&self) -> bool {
        self.self_registration
    }
}

/// Pushes status changes only
///
/// For deployments that locate peers through registry-assigned
/// addresses, so no coordinate metadata is written.
pub struct StatusOnlyUpdater {
    self_registration: bool,
}

impl StatusOnlyUpdater {
    pub fn new(self_registration: bool) -> Self {
        Self { self_registration }
    }
}

impl StatusUpdateStrategy for StatusOnlyUpdater {
    fn update(&self, handle: &dyn RegistrationHandle, status: InstanceStatus) -> Result<()> {
        if self.should_register() {
            handle.set_status(status)?;
        }
        Ok(())
    }

    fn should_register(&self) -> bool {
        self.self_registration
    }
}
