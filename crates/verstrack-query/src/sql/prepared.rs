//! A validated statement ready for dispatch.

use verstrack_core::errors::QueryError;
use verstrack_core::models::VersionChangeQuery;
use verstrack_core::record::Scalar;

use super::allow_list::ColumnAllowList;
use super::binder::bind_version_change_params;
use super::builder::{build_version_change_sql, select_all};

/// Statement text plus exactly as many parameters as it has placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    sql: String,
    params: Vec<Scalar>,
}

impl PreparedQuery {
    /// Validate `query` and render the paginated view statement.
    ///
    /// Structural fields are checked against `allow_list` before any text is
    /// rendered. A filter whose value binds to nothing (a `Null` value) leaves
    /// the statement one parameter short and is rejected here.
    pub fn version_changes(
        query: &VersionChangeQuery,
        allow_list: &ColumnAllowList,
        max_limit: u32,
    ) -> Result<Self, QueryError> {
        let filter = query.filter()?;
        allow_list.check_sort(&query.sort_field)?;
        if let Some((field, _)) = filter {
            allow_list.check_filter(field)?;
        }
        if query.limit > max_limit {
            return Err(QueryError::LimitExceeded {
                limit: query.limit,
                max: max_limit,
            });
        }

        let rendered =
            build_version_change_sql(filter.map(|(field, _)| field), &query.sort_field, query.sort_order);
        let params = bind_version_change_params(query);
        if params.len() != rendered.placeholders {
            return Err(QueryError::PlaceholderMismatch {
                placeholders: rendered.placeholders,
                params: params.len(),
            });
        }
        Ok(Self {
            sql: rendered.sql,
            params,
        })
    }

    /// Unparameterized full-table read.
    pub fn table(table: &str) -> Self {
        Self {
            sql: select_all(table),
            params: Vec::new(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Scalar] {
        &self.params
    }
}
