//! Error types and handling
//!
//! This module contains the top-level error type used by the CLI and batch
//! entry points. The resolver is total and the listener/session paths log
//! and swallow their collaborator failures, so `CoreError` mostly covers
//! configuration and I/O around the batch scan.

use crate::backend::BackendError;
use thiserror::Error;

/// Errors that can occur in the fleet operations core
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Loading document records failed
    #[error("Document load failed: {0}")]
    DocumentLoadError(String),

    /// Fixture generation failed
    #[error("Fixture generation failed: {0}")]
    FixtureError(String),

    /// A backend collaborator failed
    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<String> for CoreError {
    fn from(s: String) -> Self {
        CoreError::ConfigurationError(s)
    }
}

impl From<&str> for CoreError {
    fn from(s: &str) -> Self {
        CoreError::ConfigurationError(s.to_string())
    }
}

impl From<anyhow::Error> for CoreError {
    fn from(error: anyhow::Error) -> Self {
        CoreError::ConfigurationError(error.to_string())
    }
}

impl CoreError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a document load error
    pub fn document_load_error(msg: impl Into<String>) -> Self {
        Self::DocumentLoadError(msg.into())
    }

    /// Create a fixture generation error
    pub fn fixture_error(msg: impl Into<String>) -> Self {
        Self::FixtureError(msg.into())
    }
}
