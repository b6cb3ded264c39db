//! Error types for the re-initialization agent.
//!
//! A reconciliation run itself never fails; these cover the host-facing setup
//! around it.

use thiserror::Error;

/// Errors that can occur while setting up the agent.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Tracing subscriber could not be installed.
    #[error("Tracing error: {0}")]
    TracingError(String),
}

impl AgentError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a tracing error.
    pub fn tracing(msg: impl Into<String>) -> Self {
        Self::TracingError(msg.into())
    }
}
