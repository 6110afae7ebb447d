use super::Record;

/// Project `record` onto the columns starting with `prefix`, stripping the
/// prefix from each key. Column order is preserved; other columns are dropped.
pub fn extract_prefixed(record: &Record, prefix: &str) -> Record {
    record
        .iter()
        .filter_map(|(column, value)| {
            column
                .strip_prefix(prefix)
                .map(|stripped| (stripped.to_string(), value.clone()))
        })
        .collect()
}
