//! Index initialization error types.
//!
//! Raised by a single index's `initialize` call. The agent catches these at the
//! per-index boundary, so none of them is ever fatal to a run.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while (re-)initializing a search index.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IndexInitializationError {
    /// The search backend rejected or failed the request.
    #[error("Backend error: {0}")]
    Backend(String),

    /// The index configuration is invalid or incomplete.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Initialization did not complete within the allotted time.
    #[error("Initialization of index '{index}' timed out after {after:?}")]
    Timeout { index: String, after: Duration },

    /// Unknown error.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl IndexInitializationError {
    /// Create a backend error.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a timeout error for the named index.
    pub fn timeout(index: impl Into<String>, after: Duration) -> Self {
        Self::Timeout {
            index: index.into(),
            after,
        }
    }

    /// Create an unknown error.
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    /// Whether the error was produced by an elapsed timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
