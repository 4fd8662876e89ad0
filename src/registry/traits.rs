//! Trait abstraction for the registry client to enable mocking in tests

use async_trait::async_trait;

use super::client::{RegistrationRequest, RegistryError};

/// Trait for registration operations, enabling mocking in tests
///
/// The real management API contract is not defined yet; until it is, the
/// only implementation is [`super::SimulatedRegistry`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Register a client by full name and access code
    async fn register(&self, request: &RegistrationRequest) -> Result<(), RegistryError>;
}
