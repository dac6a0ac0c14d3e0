//! Core types for Peergrid

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PeergridError, Result};

/// Network coordinates a cluster member accepts peer connections on
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct PeerAddress {
    host: String,
    port: u16,
}

impl PeerAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Literal host name or IP address
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Logical partition label separating unrelated clusters that share one
/// registry namespace
///
/// Matching is exact: case-sensitive, no trimming, no normalization.
/// Changing that would silently alter peer membership in deployed
/// clusters.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupName(String);

impl GroupName {
    /// Create a group name, rejecting the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(PeergridError::EmptyGroupName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupName {
    type Err = PeergridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_address_display() {
        let address = PeerAddress::new("127.0.0.1", 5777);
        assert_eq!(address.to_string(), "127.0.0.1:5777");
        assert_eq!(address.host(), "127.0.0.1");
        assert_eq!(address.port(), 5777);
    }

    #[test]
    fn test_group_name_rejects_empty() {
        assert!(matches!(
            GroupName::new(""),
            Err(PeergridError::EmptyGroupName)
        ));
    }

    #[test]
    fn test_group_name_is_exact() {
        let group = GroupName::new("my-custom-group").unwrap();
        assert_eq!(group.as_str(), "my-custom-group");
        assert_ne!(group, GroupName::new("My-Custom-Group").unwrap());
        assert_ne!(group, GroupName::new(" my-custom-group").unwrap());
    }

    #[test]
    fn test_group_name_from_str() {
        let group: GroupName = "dev".parse().unwrap();
        assert_eq!(group.as_str(), "dev");
        assert!("".parse::<GroupName>().is_err());
    }
}
