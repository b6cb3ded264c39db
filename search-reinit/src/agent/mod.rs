//! Reconciliation agent.
//!
//! Re-initializes indexes that were left pending (usually because the search
//! backend was down at start-up) once the backend is reachable again.

mod outcome;

pub use outcome::{IndexFailure, ReconciliationOutcome, ReconciliationSummary};

use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn, Level};

use crate::config::AgentConfig;
use search_reinit_repository::{IndexInitializationError, SearchBackendStatus, SearchIndex};

/// Agent invoked periodically by an external scheduler.
///
/// Each run:
/// - Exits immediately when no index is pending
/// - Exits without touching any index while the backend is unavailable
/// - Initializes every pending index, isolating failures per index
/// - Deregisters only indexes that confirm they are initialized
///
/// The agent keeps no state between runs; everything lives in the
/// [`SearchBackendStatus`] implementation. Retrying failed indexes is left to
/// the next scheduled run.
pub struct ReconciliationAgent {
    status: Arc<dyn SearchBackendStatus>,
    config: AgentConfig,
}

impl ReconciliationAgent {
    /// Create a new agent with default configuration.
    pub fn new(status: Arc<dyn SearchBackendStatus>) -> Self {
        Self {
            status,
            config: AgentConfig::default(),
        }
    }

    /// Create a new agent with custom configuration.
    pub fn with_config(status: Arc<dyn SearchBackendStatus>, config: AgentConfig) -> Self {
        Self { status, config }
    }

    /// The agent's configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Scheduler entry point. Never fails; see [`ReconciliationAgent::reconcile`].
    pub async fn run(&self) {
        let _ = self.reconcile().await;
    }

    /// Run one reconciliation pass and report what it did.
    #[instrument(skip(self))]
    pub async fn reconcile(&self) -> ReconciliationOutcome {
        let pending_count = self.status.indexes_pending_init().len();

        if pending_count == 0 {
            debug!("No indexes are pending for re-initialization. Terminating execution");
            return ReconciliationOutcome::NothingPending;
        }

        info!(
            pending_count = pending_count,
            "{} indexes are pending for re-initialization. Checking search backend status",
            pending_count
        );

        if !self.status.is_alive().await {
            info!("Search backend is unavailable. Terminating execution");
            return ReconciliationOutcome::BackendUnavailable {
                pending: pending_count,
            };
        }

        if self.config.override_backend_check {
            self.status.set_backend_check_override(true);
            debug!("Cleared start-up backend check failure");
        }

        debug!("Start indexes re-initialization");

        let mut reinitialized: Vec<Arc<dyn SearchIndex>> = Vec::new();
        let mut failed = Vec::new();
        let mut unconfirmed = Vec::new();

        for index in self.status.indexes_pending_init() {
            debug!(index = %index.name(), "Re-initializing index");

            if let Err(e) = self.initialize(index.as_ref()).await {
                warn!(index = %index.name(), error = %e, "Index initialization failed");
                failed.push(IndexFailure {
                    index: index.name().to_string(),
                    error: e,
                });
                continue;
            }

            let confirmed = index.as_confirmable().map(|c| c.is_initialized());
            match confirmed {
                Some(true) => {
                    debug!(index = %index.name(), "Re-initializing index - DONE");
                    reinitialized.push(index);
                }
                Some(false) => {
                    debug!(
                        index = %index.name(),
                        "Index did not report itself initialized, leaving it pending"
                    );
                    unconfirmed.push(index.name().to_string());
                }
                None => {
                    debug!(
                        index = %index.name(),
                        "Index cannot confirm initialization, leaving it pending"
                    );
                    unconfirmed.push(index.name().to_string());
                }
            }
        }

        // Deregister only after every initialize attempt has finished.
        for index in &reinitialized {
            debug!(
                index = %index.name(),
                "Un-registering index after successful re-initialization"
            );
            self.status.unset_pending(index.as_ref());
            debug!(index = %index.name(), "Un-registered index");
        }

        let still_pending = self.status.indexes_pending_init();
        info!(
            reinitialized = reinitialized.len(),
            still_pending = still_pending.len(),
            "{} indexes have been re-initialized, {} still need to be initialized",
            reinitialized.len(),
            still_pending.len()
        );

        log_still_pending(&still_pending);

        ReconciliationOutcome::Reconciled(ReconciliationSummary {
            reinitialized: reinitialized
                .iter()
                .map(|i| i.name().to_string())
                .collect(),
            failed,
            unconfirmed,
            still_pending: still_pending.iter().map(|i| i.name().to_string()).collect(),
        })
    }

    /// Initialize a single index, bounded by the configured timeout if any.
    async fn initialize(&self, index: &dyn SearchIndex) -> Result<(), IndexInitializationError> {
        match self.config.initialize_timeout {
            Some(limit) => match timeout(limit, index.initialize()).await {
                Ok(result) => result,
                Err(_) => Err(IndexInitializationError::timeout(index.name(), limit)),
            },
            None => index.initialize().await,
        }
    }
}

/// Log which indexes are still pending. The name list is only built when
/// debug output is enabled.
fn log_still_pending(still_pending: &[Arc<dyn SearchIndex>]) {
    if still_pending.is_empty() {
        debug!("All indexes have been initialized");
        return;
    }

    if tracing::enabled!(Level::DEBUG) {
        let index_list = join_index_names(still_pending);
        debug!(
            indexes = %index_list,
            "Indexes which require initialization: {}",
            index_list
        );
    }
}

/// Comma-joined index names, in the given order.
fn join_index_names(indexes: &[Arc<dyn SearchIndex>]) -> String {
    indexes
        .iter()
        .map(|i| i.name())
        .collect::<Vec<_>>()
        .join(", ")
}
