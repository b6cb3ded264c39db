//! # Search Re-initialization Repository
//!
//! This crate provides the traits the re-initialization agent consumes to talk
//! to the search platform: the backend status registry, the index handles it
//! hands out, and the optional confirmation capability some index variants
//! expose. It also ships an in-memory pending-index registry that hosts can
//! compose into their own `SearchBackendStatus` implementation.

pub mod errors;
pub mod interfaces;
pub mod registry;

pub use errors::IndexInitializationError;
pub use interfaces::{ConfirmableIndex, SearchBackendStatus, SearchIndex};
pub use registry::PendingIndexRegistry;
