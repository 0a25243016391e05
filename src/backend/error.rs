//! Backend error types

use thiserror::Error;

/// Errors surfaced by the hosted backend collaborators
#[derive(Debug, Error)]
pub enum BackendError {
    /// A remote procedure call failed
    #[error("RPC '{name}' failed: {message}")]
    Rpc {
        /// Name of the invoked procedure
        name: String,
        /// Error message returned by the backend
        message: String,
    },

    /// The backend was unreachable
    #[error("Network error: {0}")]
    Network(String),

    /// The current session is not authorized for the operation
    #[error("Authorization error: {0}")]
    Auth(String),

    /// A backend payload failed to (de)serialize
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BackendError {
    /// Create an RPC failure error
    pub fn rpc(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rpc { name: name.into(), message: message.into() }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create an authorization error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }
}
