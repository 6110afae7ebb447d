//! Conversion between SQLite values and [`Scalar`]s.

use rusqlite::types::{Value, ValueRef};
use rusqlite::Row;

use verstrack_core::errors::{StorageError, VerstrackResult};
use verstrack_core::record::{Record, Scalar};

use crate::to_storage_err;

/// Decode one result row into a record, keyed by `columns` in order.
pub fn decode_row(row: &Row<'_>, columns: &[String]) -> VerstrackResult<Record> {
    let mut record = Record::with_capacity(columns.len());
    for (idx, column) in columns.iter().enumerate() {
        let value = row
            .get_ref(idx)
            .map_err(|e| to_storage_err(format!("read column {column}: {e}")))?;
        record.insert(column.as_str(), decode_value(column, value)?);
    }
    Ok(record)
}

/// Decode a single column value. BLOBs have no scalar counterpart.
pub fn decode_value(column: &str, value: ValueRef<'_>) -> VerstrackResult<Scalar> {
    match value {
        ValueRef::Null => Ok(Scalar::Null),
        ValueRef::Integer(v) => Ok(Scalar::Int(v)),
        ValueRef::Real(v) => Ok(Scalar::Float(v)),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(|s| Scalar::Text(s.to_string()))
            .map_err(|e| to_storage_err(format!("column {column} is not valid UTF-8: {e}"))),
        ValueRef::Blob(_) => Err(StorageError::UnsupportedColumnType {
            column: column.to_string(),
            type_name: "blob".to_string(),
        }
        .into()),
    }
}

/// Encode a bound parameter. Date-times bind as epoch seconds, matching how
/// the view stores them.
pub fn to_sql_value(value: &Scalar) -> Value {
    match value {
        Scalar::Int(v) => Value::Integer(*v),
        Scalar::Float(v) => Value::Real(*v),
        Scalar::Text(v) => Value::Text(v.clone()),
        Scalar::DateTime(dt) if dt.timestamp_subsec_nanos() == 0 => Value::Integer(dt.timestamp()),
        Scalar::DateTime(dt) => {
            Value::Real(dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9)
        }
        Scalar::Null => Value::Null,
    }
}
