//! Reserved metadata keys carrying cluster-joining coordinates
//!
//! The three keys form the wire contract between members sharing a
//! registry: each member writes them at startup and reads them from
//! every other instance at discovery time. No other component may claim
//! these keys.

use peergrid_core::{GroupName, PeerAddress, PeergridError, Result};
use peergrid_registry::InstanceMetadata;

/// Key under which a member records its cluster listen host
pub const PEER_HOST: &str = "peergrid.host";

/// Key under which a member records its cluster listen port, as a
/// decimal string in range 1-65535
pub const PEER_PORT: &str = "peergrid.port";

/// Key under which a member records its group label
pub const PEER_GROUP: &str = "peergrid.group";

/// Read the peer coordinates recorded in `metadata`, provided its group
/// label equals `group`.
///
/// An instance missing any of the reserved keys is indistinguishable
/// from a non-member and yields `None`. A present but unparsable port
/// is an error.
pub fn peer_address_in_group(
    metadata: &InstanceMetadata,
    group: &GroupName,
) -> Result<Option<PeerAddress>> {
    match metadata.get(PEER_GROUP) {
        Some(label) if label == group.as_str() => {}
        _ => return Ok(None),
    }

    let (Some(host), Some(port)) = (metadata.get(PEER_HOST), metadata.get(PEER_PORT)) else {
        return Ok(None);
    };

    Ok(Some(PeerAddress::new(host, parse_port(&port)?)))
}

/// Parse the decimal port encoding. Zero is not a listenable port.
fn parse_port(raw: &str) -> Result<u16> {
    match raw.parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(PeergridError::MalformedPort {
            value: raw.to_string(),
        }),
    }
}
