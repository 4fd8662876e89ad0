//! Registry client module for client registration

mod client;
mod traits;

pub use client::{RegistrationRequest, RegistryError, SimulatedRegistry, DEFAULT_DELAY_MS};
pub use traits::RegistryClient;

#[cfg(test)]
pub use traits::MockRegistryClient;
