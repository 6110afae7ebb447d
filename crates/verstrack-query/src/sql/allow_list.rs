//! Column allow-list for caller-supplied identifiers.
//!
//! `sort_field` and the filter `field` are spliced into SQL text, so they are
//! checked against a fixed set of view columns before any statement is built.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use verstrack_core::config::QueryConfig;
use verstrack_core::errors::QueryError;

/// A bare SQL identifier: no quoting, whitespace, or punctuation.
static IDENTIFIER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").ok());

fn is_identifier(column: &str) -> bool {
    IDENTIFIER
        .as_ref()
        .is_some_and(|re| re.is_match(column))
}

#[derive(Debug, Clone)]
pub struct ColumnAllowList {
    sortable: HashSet<String>,
    filterable: HashSet<String>,
}

impl ColumnAllowList {
    /// Build from column names. Entries that are not bare identifiers are dropped.
    pub fn new<S, F>(sortable: S, filterable: F) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let keep = |c: String| is_identifier(&c).then_some(c);
        Self {
            sortable: sortable.into_iter().map(Into::into).filter_map(keep).collect(),
            filterable: filterable.into_iter().map(Into::into).filter_map(keep).collect(),
        }
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(
            config.sortable_columns.iter().cloned(),
            config.filterable_columns.iter().cloned(),
        )
    }

    pub fn check_sort(&self, column: &str) -> Result<(), QueryError> {
        check(&self.sortable, column, "sort field")
    }

    pub fn check_filter(&self, column: &str) -> Result<(), QueryError> {
        check(&self.filterable, column, "filter field")
    }
}

impl Default for ColumnAllowList {
    fn default() -> Self {
        Self::from_config(&QueryConfig::default())
    }
}

fn check(allowed: &HashSet<String>, column: &str, role: &'static str) -> Result<(), QueryError> {
    if is_identifier(column) && allowed.contains(column) {
        Ok(())
    } else {
        Err(QueryError::DisallowedColumn {
            column: column.to_string(),
            role,
        })
    }
}
