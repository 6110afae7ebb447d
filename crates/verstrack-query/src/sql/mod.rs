//! SQL construction: allow-listed identifiers, statement text, and the
//! positional parameters bound to it.

pub mod allow_list;
pub mod binder;
pub mod builder;
pub mod prepared;

pub use allow_list::ColumnAllowList;
pub use binder::bind_version_change_params;
pub use builder::{build_version_change_sql, select_all};
pub use prepared::PreparedQuery;
