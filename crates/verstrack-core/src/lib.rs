//! # verstrack-core
//!
//! Foundation crate for the verstrack read layer.
//! Defines the scalar/record data model, the record transforms used to build
//! version aggregates, errors, config, and the fetch collaborator trait.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VerstrackConfig;
pub use errors::{VerstrackError, VerstrackResult};
pub use models::{SortOrder, VersionAggregate, VersionChangeQuery, ViewSchema};
pub use record::{Record, Scalar, ScalarKey};
pub use traits::RowSource;
