//! # verstrack-query
//!
//! The read layer proper: builds parameterized queries over the client
//! version/file view, dispatches them to a [`RowSource`], and folds the flat
//! joined rows into nested [`VersionAggregate`]s.
//!
//! [`RowSource`]: verstrack_core::RowSource
//! [`VersionAggregate`]: verstrack_core::VersionAggregate

pub mod aggregate;
pub mod repository;
pub mod sql;

pub use aggregate::GroupAggregator;
pub use repository::ClientRepository;
pub use sql::{ColumnAllowList, PreparedQuery};
