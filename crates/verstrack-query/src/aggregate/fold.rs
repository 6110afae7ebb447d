//! Folding one group of view rows into a `VersionAggregate`.

use verstrack_core::errors::{AggregateError, VerstrackResult};
use verstrack_core::models::{VersionAggregate, ViewSchema};
use verstrack_core::record::{extract_prefixed, normalize_datetime, Record};

use super::partition::Group;

/// Whether a view row carries a linked file. A missing key column counts as null.
fn has_file(row: &Record, file_key: &str) -> bool {
    row.get(file_key).is_some_and(|value| !value.is_null())
}

/// Version and project from the head row, one file per row with a non-null file key.
pub fn fold_group(group: &Group<'_>, schema: &ViewSchema) -> VerstrackResult<VersionAggregate> {
    let head = group.head();
    let version = normalize_datetime(
        extract_prefixed(head, &schema.version_prefix),
        &schema.datetime_field,
    )?;
    let project = extract_prefixed(head, &schema.project_prefix);

    let linked_files = group
        .rows()
        .iter()
        .filter(|row| has_file(row, &schema.file_key))
        .map(|row| {
            normalize_datetime(
                extract_prefixed(row, &schema.file_prefix),
                &schema.datetime_field,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(VersionAggregate {
        version,
        project,
        linked_files,
    })
}

/// Column-wise equality by grouping key, so float columns compare by bit
/// pattern (a `NaN` equals itself).
fn same_values(left: &Record, right: &Record) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter())
            .all(|((lk, lv), (rk, rv))| lk == rk && lv.key() == rv.key())
}

/// Every row of the group must repeat the head row's version and project fields.
pub fn verify_fanout(group: &Group<'_>, schema: &ViewSchema) -> Result<(), AggregateError> {
    let head = group.head();
    for prefix in [&schema.version_prefix, &schema.project_prefix] {
        let expected = extract_prefixed(head, prefix);
        let consistent = group.rows()[1..]
            .iter()
            .all(|row| same_values(&extract_prefixed(row, prefix), &expected));
        if !consistent {
            return Err(AggregateError::InconsistentGroup {
                key: group.key.to_string(),
                namespace: prefix.trim_end_matches('_').to_string(),
            });
        }
    }
    Ok(())
}
