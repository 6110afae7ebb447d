use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::QueryError;
use crate::record::Scalar;

/// Sort direction of a version-change query. Serializes as `ASC`/`DESC`;
/// deserializes through [`FromStr`], so any letter case is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(QueryError::InvalidSortOrder {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<String> for SortOrder {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Page of version changes for one project, optionally filtered on a single
/// column. `field` and `value` are either both set or both unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionChangeQuery {
    /// Project the versions belong to.
    pub identifier: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub value: Option<Scalar>,
    pub sort_field: String,
    #[serde(default)]
    pub sort_order: SortOrder,
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

impl VersionChangeQuery {
    pub fn new(
        identifier: impl Into<String>,
        sort_field: impl Into<String>,
        sort_order: SortOrder,
        limit: u32,
        skip: u32,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            field: None,
            value: None,
            sort_field: sort_field.into(),
            sort_order,
            limit,
            skip,
        }
    }

    /// Restrict results to rows where `field = value`.
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.field = Some(field.into());
        self.value = Some(value.into());
        self
    }

    /// The extra predicate, if any. Errors when only one half is set.
    pub fn filter(&self) -> Result<Option<(&str, &Scalar)>, QueryError> {
        match (&self.field, &self.value) {
            (Some(field), Some(value)) => Ok(Some((field.as_str(), value))),
            (None, None) => Ok(None),
            (field, _) => Err(QueryError::IncompleteFilter {
                field: field.clone(),
            }),
        }
    }
}
