//! Registry client seam
//!
//! The real client (and its transport, retries, and caching) is an
//! external dependency; these traits are the surface Peergrid consumes.

use dashmap::DashMap;
use std::sync::RwLock;

use peergrid_core::Result;

use crate::instance::{InstanceMetadata, InstanceRecord};
use crate::status::InstanceStatus;

/// Lookup side of the external service registry
pub trait RegistryClient: Send + Sync {
    /// Every instance currently registered under `application`.
    ///
    /// An unknown application yields an empty list, not an error.
    fn application_instances(&self, application: &str) -> Result<Vec<InstanceRecord>>;
}

/// This node's own entry in the registry
///
/// The entry is created and owned by the external client; the handle
/// exposes its live metadata map and accepts status changes.
pub trait RegistrationHandle: Send + Sync {
    /// Handle onto the registration's metadata map. Shared, not a copy.
    fn metadata(&self) -> InstanceMetadata;

    /// Push a status change into the registry.
    fn set_status(&self, status: InstanceStatus) -> Result<()>;
}

/// In-memory registry (for development/testing)
#[derive(Default)]
pub struct InMemoryRegistry {
    applications: DashMap<String, Vec<InstanceRecord>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance under an application name.
    pub fn register(&self, application: impl Into<String>, instance: InstanceRecord) {
        self.applications
            .entry(application.into())
            .or_default()
            .push(instance);
    }
}

impl RegistryClient for InMemoryRegistry {
    fn application_instances(&self, application: &str) -> Result<Vec<InstanceRecord>> {
        Ok(self
            .applications
            .get(application)
            .map(|instances| instances.clone())
            .unwrap_or_default())
    }
}

/// In-memory registration handle (for development/testing)
pub struct InMemoryRegistration {
    metadata: InstanceMetadata,
    status: RwLock<InstanceStatus>,
}

impl InMemoryRegistration {
    pub fn new() -> Self {
        Self {
            metadata: InstanceMetadata::new(),
            status: RwLock::new(InstanceStatus::default()),
        }
    }

    /// Last status pushed through the handle.
    pub fn status(&self) -> InstanceStatus {
        *self.status.read().expect("status lock poisoned")
    }
}

impl Default for InMemoryRegistration {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationHandle for InMemoryRegistration {
    fn metadata(&self) -> InstanceMetadata {
        self.metadata.clone()
    }

    fn set_status(&self, status: InstanceStatus) -> Result<()> {
        *self.status.write().expect("status lock poisoned") = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_application_is_empty() {
        let registry = InMemoryRegistry::new();
        let instances = registry.application_instances("nothing-here").unwrap();
        assert!(instances.is_empty());
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = InMemoryRegistry::new();
        registry.register(
            "hz-cluster",
            InstanceRecord::new("i-1", InstanceMetadata::new()),
        );
        registry.register(
            "hz-cluster",
            InstanceRecord::new("i-2", InstanceMetadata::new()),
        );

        let instances = registry.application_instances("hz-cluster").unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].id(), "i-1");
        assert_eq!(instances[1].id(), "i-2");
    }

    #[test]
    fn test_registration_status_changes() {
        let registration = InMemoryRegistration::new();
        assert_eq!(registration.status(), InstanceStatus::Starting);

        registration.set_status(InstanceStatus::Up).unwrap();
        assert_eq!(registration.status(), InstanceStatus::Up);
    }

    #[test]
    fn test_registration_metadata_is_shared() {
        let registration = InMemoryRegistration::new();
        registration.metadata().insert("peergrid.group", "dev");
        assert_eq!(
            registration.metadata().get("peergrid.group").as_deref(),
            Some("dev")
        );
    }
}
