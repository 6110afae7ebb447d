//! # verstrack-storage
//!
//! SQLite implementation of the [`RowSource`](verstrack_core::RowSource)
//! fetch collaborator. Read-only: a pool of `query_only` connections that
//! decode every row into a [`Record`](verstrack_core::Record).

pub mod engine;
pub mod pool;
pub mod queries;
pub mod rows;

pub use engine::SqliteRowSource;
pub use pool::ReadPool;

use verstrack_core::errors::{StorageError, VerstrackError};

/// Map any storage-level failure message into the workspace error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> VerstrackError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
