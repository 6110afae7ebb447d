use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;
use crate::models::ViewSchema;

/// How view rows are partitioned into versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// Explicit group-by on the key, first-seen order. Correct for any row order.
    #[default]
    Stable,
    /// Maximal runs of equal keys. Requires rows ordered by the key.
    Contiguous,
}

/// Query construction and aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Columns accepted as `sort_field`.
    pub sortable_columns: Vec<String>,
    /// Columns accepted as the filter `field`.
    pub filterable_columns: Vec<String>,
    /// Upper bound on a query's `limit`.
    pub max_limit: u32,
    pub grouping: GroupingMode,
    /// Check that every row of a group repeats the same version and project fields.
    pub verify_fanout: bool,
    /// Epoch field converted to a date-time on every fetched record.
    pub datetime_field: String,
}

impl QueryConfig {
    /// View schema with this config's datetime field.
    pub fn view_schema(&self) -> ViewSchema {
        ViewSchema {
            datetime_field: self.datetime_field.clone(),
            ..ViewSchema::default()
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            sortable_columns: defaults::DEFAULT_SORTABLE_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            filterable_columns: defaults::DEFAULT_FILTERABLE_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            max_limit: defaults::DEFAULT_MAX_LIMIT,
            grouping: GroupingMode::default(),
            verify_fanout: defaults::DEFAULT_VERIFY_FANOUT,
            datetime_field: constants::DEFAULT_DATETIME_FIELD.to_string(),
        }
    }
}
