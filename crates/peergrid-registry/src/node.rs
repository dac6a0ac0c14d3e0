//! Local cluster member descriptor

use peergrid_core::PeerAddress;

/// The host process's view of the local cluster member
///
/// Supplies the address the member actually listens on; registration
/// metadata is derived from this, never from the registry's own record.
pub trait LocalNode: Send + Sync {
    /// Address the local member accepts cluster connections on
    fn listen_address(&self) -> PeerAddress;
}

/// Fixed-address local node (for development/testing)
pub struct StaticLocalNode {
    address: PeerAddress,
}

impl StaticLocalNode {
    pub fn new(address: PeerAddress) -> Self {
        Self { address }
    }
}

impl LocalNode for StaticLocalNode {
    fn listen_address(&self) -> PeerAddress {
        self.address.clone()
    }
}
