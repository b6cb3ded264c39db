//! Search backend status trait definition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::interfaces::SearchIndex;

/// Abstracts the platform's view of the search backend (Solr) and the set of
/// indexes waiting to be initialized against it.
///
/// Implementations own all state; the agent keeps none between runs. Any
/// synchronization needed for concurrent access is the implementation's
/// responsibility.
#[async_trait]
pub trait SearchBackendStatus: Send + Sync {
    /// Check whether the search backend is currently reachable and responsive.
    async fn is_alive(&self) -> bool;

    /// Indexes currently pending (re-)initialization, in registry order.
    fn indexes_pending_init(&self) -> Vec<Arc<dyn SearchIndex>>;

    /// Remove an index from the pending set.
    ///
    /// Removal is keyed by [`SearchIndex::name`]. Removing an index that is not
    /// pending must be a no-op.
    fn unset_pending(&self, index: &dyn SearchIndex);

    /// Tell the platform that the backend check has been satisfied.
    ///
    /// Platforms remember a failed backend check from start-up and may refuse
    /// to initialize indexes while that flag is set. This is the integration
    /// point for clearing it. The default does nothing.
    fn set_backend_check_override(&self, _ok: bool) {}
}
