//! Statement text for the version-change view and the raw tables.
//!
//! Only allow-listed identifiers reach these functions; values are never
//! interpolated, every datum is a numbered placeholder.

use verstrack_core::constants::{IDENTIFIER_COLUMN, VERSION_FILE_VIEW};
use verstrack_core::models::SortOrder;

/// Rendered statement text and the number of placeholders it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSql {
    pub sql: String,
    pub placeholders: usize,
}

/// Render the paginated view query for one project.
///
/// With `filter_field` the statement carries four placeholders
/// (identifier, value, limit, skip); without it, three.
pub fn build_version_change_sql(
    filter_field: Option<&str>,
    sort_field: &str,
    sort_order: SortOrder,
) -> RenderedSql {
    let mut sql = format!("SELECT * FROM {VERSION_FILE_VIEW} WHERE {IDENTIFIER_COLUMN} = ?1");
    let mut next = 2;
    if let Some(field) = filter_field {
        sql.push_str(&format!(" AND {field} = ?{next}"));
        next += 1;
    }
    let order = sort_order.as_sql();
    let skip = next + 1;
    sql.push_str(&format!(" ORDER BY {sort_field} {order} LIMIT ?{next} OFFSET ?{skip}"));
    RenderedSql {
        sql,
        placeholders: skip,
    }
}

/// `SELECT * FROM {table}`, for the pass-through fetchers.
pub fn select_all(table: &str) -> String {
    format!("SELECT * FROM {table}")
}
