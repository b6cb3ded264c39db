//! Outcome of a single reconciliation run.

use search_reinit_repository::IndexInitializationError;

/// What a reconciliation run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    /// No index was pending; the backend was not checked.
    NothingPending,

    /// The backend was unreachable; no index was touched.
    BackendUnavailable {
        /// Number of indexes pending when the run started.
        pending: usize,
    },

    /// Pending indexes were processed.
    Reconciled(ReconciliationSummary),
}

impl ReconciliationOutcome {
    /// The per-index summary, if the run got as far as initializing indexes.
    pub fn summary(&self) -> Option<&ReconciliationSummary> {
        match self {
            Self::Reconciled(summary) => Some(summary),
            _ => None,
        }
    }
}

/// Per-index results of a run that reached the initialize loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationSummary {
    /// Indexes confirmed initialized and removed from the pending set.
    pub reinitialized: Vec<String>,
    /// Indexes whose `initialize` call failed.
    pub failed: Vec<IndexFailure>,
    /// Indexes that initialized without error but could not confirm it.
    pub unconfirmed: Vec<String>,
    /// Indexes still pending after the run, in registry order.
    pub still_pending: Vec<String>,
}

impl ReconciliationSummary {
    /// Whether the pending set was empty at the end of the run.
    pub fn is_complete(&self) -> bool {
        self.still_pending.is_empty()
    }
}

/// A failed `initialize` call for a single index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFailure {
    /// The index name.
    pub index: String,
    /// The error raised by the index.
    pub error: IndexInitializationError,
}
