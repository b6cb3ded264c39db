//! Tracing initialization for binaries hosting the agent.

use std::env;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::AgentError;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "search_reinit=info,search_reinit_repository=info";

/// Environment variable selecting the log output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "SEARCH_REINIT_LOG_FORMAT";

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON lines, for log shippers.
    Json,
    /// Human-readable console output.
    Pretty,
}

impl LogFormat {
    /// Parse the log format from its environment value. Anything other than
    /// `json` (case-insensitive) selects pretty output.
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()) {
            Some(s) if s == "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` (default: `search_reinit=info`). The
/// output format is chosen by `SEARCH_REINIT_LOG_FORMAT`.
///
/// # Returns
///
/// * `Ok(())` - If the subscriber was installed
/// * `Err(AgentError)` - If a global subscriber is already set
pub fn init_tracing() -> Result<(), AgentError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let format = LogFormat::parse(env::var(LOG_FORMAT_ENV).ok().as_deref());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .try_init(),
    }
    .map_err(|e| AgentError::tracing(e.to_string()))?;

    info!(
        service_name = "search-reinit",
        service_version = env!("CARGO_PKG_VERSION"),
        log_format = ?format,
        "Tracing initialized"
    );

    Ok(())
}
