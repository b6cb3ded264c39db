//! Search index handle trait definitions.

use async_trait::async_trait;

use crate::errors::IndexInitializationError;

/// A handle to a named search index owned by the platform.
///
/// The agent never constructs or destroys indexes; it only reads their name,
/// asks them to initialize, and queries whether they can confirm the result.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// The index name, unique within the platform.
    fn name(&self) -> &str;

    /// (Re-)initialize the index against the search backend.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the call completed without raising an error. This alone
    ///   does not mean the index is usable; see [`SearchIndex::as_confirmable`].
    /// * `Err(IndexInitializationError)` - If initialization failed
    async fn initialize(&self) -> Result<(), IndexInitializationError>;

    /// Expose the confirmation capability, if this index variant has one.
    ///
    /// Index variants that cannot report their post-initialization state keep
    /// the default `None`, and are therefore never treated as confirmed.
    fn as_confirmable(&self) -> Option<&dyn ConfirmableIndex> {
        None
    }
}

/// Capability of index variants that can report whether they are initialized.
pub trait ConfirmableIndex: Send + Sync {
    /// Whether the index reports itself as initialized.
    fn is_initialized(&self) -> bool;
}
