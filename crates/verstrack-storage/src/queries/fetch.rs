//! Run a parameterized statement and collect every row as a record.

use rusqlite::{params_from_iter, Connection};

use verstrack_core::errors::VerstrackResult;
use verstrack_core::record::{Record, Scalar};

use crate::rows::{decode_row, to_sql_value};
use crate::to_storage_err;

/// Execute `sql` with positional `params` and decode all rows in order.
pub fn query_records(conn: &Connection, sql: &str, params: &[Scalar]) -> VerstrackResult<Vec<Record>> {
    let mut stmt = conn
        .prepare_cached(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let mut rows = stmt
        .query(params_from_iter(params.iter().map(to_sql_value)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_storage_err(e.to_string()))? {
        records.push(decode_row(row, &columns)?);
    }
    Ok(records)
}
