//! Discovery service lifecycle

use std::sync::Arc;

use peergrid_core::{DiscoveryConfig, GroupName, PeerAddress, Result};
use peergrid_registry::{InstanceStatus, LocalNode, RegistrationHandle, RegistryClient};

use crate::discovery::PeerDiscovery;
use crate::status::{MetadataUpdater, StatusUpdateStrategy};

/// Ties one registry connection's registration and discovery together
///
/// `start` and `shutdown` publish the local registration through the
/// configured strategy; `discover_peers` reads the current peer set.
/// The service holds no state of its own beyond its wiring.
pub struct DiscoveryService {
    discovery: PeerDiscovery,
    handle: Arc<dyn RegistrationHandle>,
    strategy: Box<dyn StatusUpdateStrategy>,
}

impl std::fmt::Debug for DiscoveryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryService").finish_non_exhaustive()
    }
}

impl DiscoveryService {
    pub fn new(
        client: Arc<dyn RegistryClient>,
        handle: Arc<dyn RegistrationHandle>,
        strategy: Box<dyn StatusUpdateStrategy>,
        group_name: GroupName,
    ) -> Self {
        Self {
            discovery: PeerDiscovery::new(client, group_name),
            handle,
            strategy,
        }
    }

    /// Wire up the metadata-publishing strategy from configuration.
    pub fn from_config(
        config: &DiscoveryConfig,
        client: Arc<dyn RegistryClient>,
        handle: Arc<dyn RegistrationHandle>,
        node: Arc<dyn LocalNode>,
    ) -> Result<Self> {
        let group_name = GroupName::new(config.group_name.clone())?;
        let strategy = Box::new(MetadataUpdater::new(
            node,
            config.self_registration,
            group_name.clone(),
        ));
        Ok(Self::new(client, handle, strategy, group_name))
    }

    /// Publish the local coordinates and mark the registration up.
    pub fn start(&self) -> Result<()> {
        tracing::info!(group = %self.discovery.group_name(), "starting registry-backed discovery");
        self.strategy.update(self.handle.as_ref(), InstanceStatus::Up)
    }

    /// Current peer set for `application`.
    pub fn discover_peers(&self, application: &str) -> Result<Vec<PeerAddress>> {
        self.discovery.discover_peers(application)
    }

    /// Mark the registration down. Coordinate metadata stays in place
    /// for diagnostics.
    pub fn shutdown(&self) -> Result<()> {
        self.strategy
            .update(self.handle.as_ref(), InstanceStatus::Down)
    }
}
