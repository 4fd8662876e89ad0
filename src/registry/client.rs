//! Simulated registry client
//!
//! Stands in for the management API call
//! (`POST /api/management/register-client`) until its contract is defined.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::traits::RegistryClient;
use async_trait::async_trait;

/// Default simulated registration latency in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 700;

/// JSON body of the intended registration call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub access_code: String,
}

/// Errors from a registration attempt
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry endpoint could not be reached or answered with an error
    #[error("registry request failed: {0}")]
    Request(String),
}

/// Registry client that simulates the registration call with a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedRegistry {
    delay: Duration,
}

impl SimulatedRegistry {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEFAULT_DELAY_MS))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryClient for SimulatedRegistry {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), RegistryError> {
        tracing::debug!(full_name = %request.full_name, "simulating registration call");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_camel_case() {
        let request = RegistrationRequest {
            full_name: "Jane Doe".to_string(),
            access_code: "ABC123".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "Jane Doe",
                "accessCode": "ABC123",
            })
        );
    }

    #[test]
    fn test_request_round_trips() {
        let json = r#"{"fullName": "Jane Doe", "accessCode": "ABC123"}"#;
        let parsed: RegistrationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.full_name, "Jane Doe");
        assert_eq!(parsed.access_code, "ABC123");
    }

    #[tokio::test]
    async fn test_simulated_registry_resolves_ok() {
        let registry = SimulatedRegistry::with_delay(Duration::ZERO);
        let request = RegistrationRequest {
            full_name: "Jane Doe".to_string(),
            access_code: "ABC123".to_string(),
        };
        assert!(registry.register(&request).await.is_ok());
    }

    #[test]
    fn test_default_delay() {
        let registry = SimulatedRegistry::new();
        assert_eq!(registry.delay, Duration::from_millis(700));
    }

    #[test]
    fn test_error_display() {
        let err = RegistryError::Request("timeout".to_string());
        assert_eq!(err.to_string(), "registry request failed: timeout");
    }
}
