//! Error types for the session layer.

use eventregistry_api::ContractViolation;
use thiserror::Error;

/// Errors produced by the session layer, wrapping upstream API errors and
/// adding settings, IO, and cancellation failures.
#[derive(Error, Debug)]
pub enum EventRegistryError {
    /// An error from the underlying API crate: transport, HTTP status,
    /// parse, authentication, or contract violation.
    #[error("API error: {0}")]
    Api(#[from] eventregistry_api::Error),
    /// The settings file or an override could not be used.
    #[error("Settings error: {0}")]
    Settings(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The session's cancellation token fired while a retry was pending.
    #[error("Request cancelled")]
    Cancelled,
}

impl From<ContractViolation> for EventRegistryError {
    fn from(e: ContractViolation) -> Self {
        Self::Api(e.into())
    }
}

impl EventRegistryError {
    /// The contract violation behind this error, if that is what it is.
    pub fn as_contract_violation(&self) -> Option<&ContractViolation> {
        match self {
            Self::Api(eventregistry_api::Error::Contract(v)) => Some(v),
            _ => None,
        }
    }
}
