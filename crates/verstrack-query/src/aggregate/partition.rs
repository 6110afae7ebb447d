//! Partitioning view rows by grouping key.

use std::collections::HashSet;

use indexmap::IndexMap;
use verstrack_core::errors::RecordError;
use verstrack_core::record::{Record, ScalarKey};

/// Rows sharing one grouping-key value, in input order. Never empty.
#[derive(Debug)]
pub struct Group<'a> {
    pub key: ScalarKey,
    rows: Vec<&'a Record>,
}

impl<'a> Group<'a> {
    fn new(key: ScalarKey, first: &'a Record) -> Self {
        Self {
            key,
            rows: vec![first],
        }
    }

    /// The group's first row; version and project fields are read from it.
    pub fn head(&self) -> &'a Record {
        self.rows[0]
    }

    pub fn rows(&self) -> &[&'a Record] {
        &self.rows
    }
}

fn group_key(row: &Record, column: &str) -> Result<ScalarKey, RecordError> {
    row.get(column)
        .map(|value| value.key())
        .ok_or_else(|| RecordError::MissingColumn {
            column: column.to_string(),
        })
}

/// Maximal runs of equal keys, in run order.
///
/// A key that shows up again after its run closed starts a new run, so the
/// same version yields two groups. That is logged, not corrected.
pub fn contiguous_runs<'a>(rows: &'a [Record], column: &str) -> Result<Vec<Group<'a>>, RecordError> {
    let mut runs: Vec<Group<'a>> = Vec::new();
    let mut closed: HashSet<ScalarKey> = HashSet::new();

    for row in rows {
        let key = group_key(row, column)?;
        if let Some(current) = runs.last_mut() {
            if current.key == key {
                current.rows.push(row);
                continue;
            }
            closed.insert(current.key.clone());
        }
        if closed.contains(&key) {
            tracing::warn!(
                column,
                key = %key,
                "grouping key reappears after its run closed; rows are not ordered by it"
            );
        }
        runs.push(Group::new(key, row));
    }
    Ok(runs)
}

/// One group per distinct key, in first-seen order, regardless of row order.
pub fn stable_groups<'a>(rows: &'a [Record], column: &str) -> Result<Vec<Group<'a>>, RecordError> {
    let mut groups: IndexMap<ScalarKey, Group<'a>> = IndexMap::new();
    for row in rows {
        let key = group_key(row, column)?;
        match groups.get_mut(&key) {
            Some(group) => group.rows.push(row),
            None => {
                groups.insert(key.clone(), Group::new(key, row));
            }
        }
    }
    Ok(groups.into_values().collect())
}
