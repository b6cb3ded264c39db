//! Interface definitions for the search platform collaborators.
//!
//! The agent only ever talks to the platform through these traits, which keeps
//! the backend client, the index engine and the status registry swappable and
//! lets tests substitute mock implementations.

mod search_backend_status;
mod search_index;

pub use search_backend_status::SearchBackendStatus;
pub use search_index::{ConfirmableIndex, SearchIndex};
