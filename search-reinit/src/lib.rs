//! # Search Re-initialization Agent
//!
//! Maintenance agent for search platforms backed by Solr. When the backend is
//! unreachable at start-up, the platform marks the affected indexes as pending
//! initialization. A scheduler invokes this agent periodically; each run checks
//! whether the backend is back and, if so, re-initializes the pending indexes
//! and deregisters those that confirm success.
//!
//! ## Modules
//!
//! - [`agent`]: The reconciliation agent and its run outcome
//! - [`config`]: Agent configuration from environment variables
//! - [`telemetry`]: Tracing subscriber initialization for host binaries
//! - [`errors`]: Error types for the agent

pub mod agent;
pub mod config;
pub mod errors;
pub mod telemetry;

pub use agent::{IndexFailure, ReconciliationAgent, ReconciliationOutcome, ReconciliationSummary};
pub use config::AgentConfig;
pub use errors::AgentError;
