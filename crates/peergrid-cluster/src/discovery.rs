//! Peer discovery over registry metadata

use std::sync::Arc;

use peergrid_core::{GroupName, PeerAddress, Result};
use peergrid_registry::RegistryClient;

use crate::metadata::peer_address_in_group;

/// Filters registry instances down to the cluster peers of one group
///
/// Stateless beyond its wiring: every call reads the registry afresh,
/// nothing is cached.
pub struct PeerDiscovery {
    client: Arc<dyn RegistryClient>,
    group_name: GroupName,
}

impl PeerDiscovery {
    pub fn new(client: Arc<dyn RegistryClient>, group_name: GroupName) -> Self {
        Self { client, group_name }
    }

    pub fn group_name(&self) -> &GroupName {
        &self.group_name
    }

    /// Addresses of every instance registered under `application` whose
    /// recorded group label equals this member's group.
    ///
    /// Output preserves the registry's return order. Instances without
    /// the coordinate metadata are skipped; an unknown application
    /// yields an empty list.
    pub fn discover_peers(&self, application: &str) -> Result<Vec<PeerAddress>> {
        let instances = self.client.application_instances(application)?;

        let mut peers = Vec::new();
        for instance in &instances {
            // one metadata access per instance; a real client may go remote here
            match peer_address_in_group(instance.metadata(), &self.group_name)? {
                Some(address) => peers.push(address),
                None => {
                    tracing::trace!(instance = instance.id(), "instance outside group, skipped")
                }
            }
        }

        tracing::debug!(application, count = peers.len(), "discovered peers");
        Ok(peers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{PEER_GROUP, PEER_HOST, PEER_PORT};
    use peergrid_core::PeergridError;
    use peergrid_registry::{InMemoryRegistry, InstanceMetadata, InstanceRecord, InstanceStatus};

    const APPLICATION: &str = "hz-cluster";

    fn instance(id: &str, host: &str, port: &str, group: &str) -> InstanceRecord {
        let metadata: InstanceMetadata =
            [(PEER_HOST, host), (PEER_PORT, port), (PEER_GROUP, group)]
                .into_iter()
                .collect();
        InstanceRecord::new(id, metadata).with_status(InstanceStatus::Up)
    }

    fn discovery(registry: Arc<InMemoryRegistry>) -> PeerDiscovery {
        PeerDiscovery::new(registry, GroupName::new("my-custom-group").unwrap())
    }

    #[test]
    fn test_discovers_instance_via_metadata() {
        let registry = Arc::new(InMemoryRegistry::new());
        registry.register(
            APPLICATION,
            instance("i-1", "127.0.0.1", "5777", "my-custom-group"),
        );

        let peers = discovery(registry).discover_peers(APPLICATION).unwrap();
        assert_eq!(peers, vec![PeerAddress::new("127.0.0.1", 5777)]);
    }

    #[test]
    fn test_skips_different_group() {
        let registry = Arc::new(InMemoryRegistry::new());
        registry.register(
            APPLICATION,
            instance("i-1", "127.0.0.1", "5777", "my-different-group"),
        );

        let peers = discovery(registry).discover_peers(APPLICATION).unwrap();
        assert!(peers.is_empty());
    }

    #[test]
    fn test_empty_application_yields_empty_list() {
        let registry = Arc::new(InMemoryRegistry::new());
        let peers = discovery(registry).discover_peers(APPLICATION).unwrap();
        assert!(peers.is_empty());
    }

    #[test]
    fn test_preserves_registry_order() {
        let registry = Arc::new(InMemoryRegistry::new());
        registry.register(
            APPLICATION,
            instance("i-1", "10.0.0.1", "5701", "my-custom-group"),
        );
        registry.register(
            APPLICATION,
            instance("i-2", "10.0.0.2", "5701", "other-group"),
        );
        registry.register(
            APPLICATION,
            instance("i-3", "10.0.0.3", "5701", "my-custom-group"),
        );

        let peers = discovery(registry).discover_peers(APPLICATION).unwrap();
        assert_eq!(
            peers,
            vec![
                PeerAddress::new("10.0.0.1", 5701),
                PeerAddress::new("10.0.0.3", 5701),
            ]
        );
    }

    #[test]
    fn test_instance_without_metadata_is_skipped() {
        let registry = Arc::new(InMemoryRegistry::new());
        registry.register(
            APPLICATION,
            InstanceRecord::new("i-bare", InstanceMetadata::new()).with_status(InstanceStatus::Up),
        );
        registry.register(
            APPLICATION,
            instance("i-1", "127.0.0.1", "5777", "my-custom-group"),
        );

        let peers = discovery(registry).discover_peers(APPLICATION).unwrap();
        assert_eq!(peers, vec![PeerAddress::new("127.0.0.1", 5777)]);
    }

    #[test]
    fn test_malformed_port_fails_discovery() {
        let registry = Arc::new(InMemoryRegistry::new());
        registry.register(
            APPLICATION,
            instance("i-1", "127.0.0.1", "not-a-port", "my-custom-group"),
        );

        let err = discovery(registry).discover_peers(APPLICATION).unwrap_err();
        assert!(matches!(err, PeergridError::MalformedPort { value } if value == "not-a-port"));
    }
}
