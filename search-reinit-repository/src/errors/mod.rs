//! Error types for the search re-initialization repository.

mod index_initialization_error;

pub use index_initialization_error::IndexInitializationError;
