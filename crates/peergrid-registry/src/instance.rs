//! Registered instances and their shared metadata

use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;

use crate::status::InstanceStatus;

/// String key/value metadata attached to a registered instance
///
/// Clones are handles onto the same underlying map: a write through one
/// clone is immediately visible through every other holder. The map
/// belongs to the registry-side record and is never deep-copied here.
#[derive(Clone, Default)]
pub struct InstanceMetadata {
    entries: Arc<DashMap<String, String>>,
}

impl InstanceMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the previous value for the key.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Value for `key`, cloned out so no map guard is held.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for InstanceMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for entry in self.entries.iter() {
            map.entry(entry.key(), entry.value());
        }
        map.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for InstanceMetadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let metadata = Self::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

/// One registered instance as returned by a registry lookup
#[derive(Clone, Debug)]
pub struct InstanceRecord {
    id: String,
    status: InstanceStatus,
    metadata: InstanceMetadata,
}

impl InstanceRecord {
    pub fn new(id: impl Into<String>, metadata: InstanceMetadata) -> Self {
        Self {
            id: id.into(),
            status: InstanceStatus::default(),
            metadata,
        }
    }

    pub fn with_status(mut self, status: InstanceStatus) -> Self {
        self.status = status;
        self
    }

    /// Registry-assigned instance identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> InstanceStatus {
        self.status
    }

    /// Handle onto the instance's metadata map
    pub fn metadata(&self) -> &InstanceMetadata {
        &self.metadata
    }
}
