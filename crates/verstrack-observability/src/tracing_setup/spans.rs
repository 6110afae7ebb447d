//! Span definitions for the read operations.

/// Span around one read-layer fetch.
#[macro_export]
macro_rules! fetch_span {
    ($operation:expr) => {
        tracing::info_span!("verstrack.fetch", operation = %$operation)
    };
    ($operation:expr, $identifier:expr) => {
        tracing::info_span!(
            "verstrack.fetch",
            operation = %$operation,
            identifier = %$identifier
        )
    };
}

/// Span around folding view rows into version aggregates.
#[macro_export]
macro_rules! aggregate_span {
    ($row_count:expr, $mode:expr) => {
        tracing::debug_span!("verstrack.aggregate", rows = $row_count, mode = ?$mode)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const FETCH: &str = "verstrack.fetch";
    pub const AGGREGATE: &str = "verstrack.aggregate";
}

/// Operation names carried on fetch spans.
pub mod operations {
    pub const VERSION_CHANGES_PER_PROJECT: &str = "fetch_version_changes_per_project";
    pub const PROJECT_SPLITS: &str = "fetch_project_splits";
    pub const VERSION_CHANGES: &str = "fetch_version_changes";
    pub const FILES: &str = "fetch_files";
    pub const PROJECTS: &str = "fetch_projects";
}
