//! Error types. One enum per subsystem, aggregated by [`VerstrackError`].

mod aggregate_error;
mod config_error;
mod query_error;
mod record_error;
mod storage_error;

pub use aggregate_error::AggregateError;
pub use config_error::ConfigError;
pub use query_error::QueryError;
pub use record_error::RecordError;
pub use storage_error::StorageError;

/// Top-level error for every verstrack operation.
#[derive(Debug, thiserror::Error)]
pub enum VerstrackError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("query error: {0}")]
    QueryError(#[from] QueryError),

    #[error("record error: {0}")]
    RecordError(#[from] RecordError),

    #[error("aggregate error: {0}")]
    AggregateError(#[from] AggregateError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

pub type VerstrackResult<T> = Result<T, VerstrackError>;
