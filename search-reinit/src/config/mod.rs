//! Configuration for the re-initialization agent.

use std::env;
use std::time::Duration;
use tracing::{info, warn};

use crate::errors::AgentError;

/// Environment variable holding the per-index initialize timeout, in seconds.
pub const INIT_TIMEOUT_ENV: &str = "SEARCH_REINIT_INIT_TIMEOUT_SECS";

/// Environment variable toggling the backend-check override.
pub const OVERRIDE_BACKEND_CHECK_ENV: &str = "SEARCH_REINIT_OVERRIDE_BACKEND_CHECK";

/// Configuration for the reconciliation agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Upper bound for a single index's `initialize` call.
    ///
    /// `None` waits indefinitely, so one hanging index blocks the whole run.
    pub initialize_timeout: Option<Duration>,

    /// Clear the platform's start-up backend failure flag once the backend is
    /// confirmed alive.
    pub override_backend_check: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            initialize_timeout: None,
            override_backend_check: true,
        }
    }
}

impl AgentConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SEARCH_REINIT_INIT_TIMEOUT_SECS`: Per-index initialize timeout in seconds
    ///   (default: unset, no timeout; `0` also disables it)
    /// - `SEARCH_REINIT_OVERRIDE_BACKEND_CHECK`: `true`/`false` (default: true)
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let initialize_timeout = match lookup(INIT_TIMEOUT_ENV) {
            Some(raw) => parse_timeout_secs(&raw).unwrap_or_else(|e| {
                warn!(variable = INIT_TIMEOUT_ENV, error = %e, "Invalid value, initialize timeout disabled");
                defaults.initialize_timeout
            }),
            None => defaults.initialize_timeout,
        };

        let override_backend_check = match lookup(OVERRIDE_BACKEND_CHECK_ENV) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|e| {
                warn!(
                    variable = OVERRIDE_BACKEND_CHECK_ENV,
                    error = %e,
                    default = defaults.override_backend_check,
                    "Invalid value, using default"
                );
                defaults.override_backend_check
            }),
            None => defaults.override_backend_check,
        };

        let config = Self {
            initialize_timeout,
            override_backend_check,
        };

        info!(
            initialize_timeout_secs = config.initialize_timeout.map(|d| d.as_secs()),
            override_backend_check = config.override_backend_check,
            "Loaded agent configuration"
        );

        config
    }

    /// Bound each `initialize` call by the given timeout.
    pub fn with_initialize_timeout(mut self, timeout: Duration) -> Self {
        self.initialize_timeout = Some(timeout);
        self
    }

    /// Enable or disable the backend-check override.
    pub fn with_backend_check_override(mut self, enabled: bool) -> Self {
        self.override_backend_check = enabled;
        self
    }
}

/// Parse a timeout in whole seconds. Empty and `0` disable the timeout.
fn parse_timeout_secs(raw: &str) -> Result<Option<Duration>, AgentError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let secs = raw
        .parse::<u64>()
        .map_err(|e| AgentError::config(format!("'{}' is not a number of seconds: {}", raw, e)))?;

    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

fn parse_flag(raw: &str) -> Result<bool, AgentError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(AgentError::config(format!("'{}' is not a boolean", other))),
    }
}
