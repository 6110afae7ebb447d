//! PRAGMA configuration applied to every read connection.

use rusqlite::Connection;

use verstrack_core::config::StorageConfig;
use verstrack_core::errors::VerstrackResult;

use crate::to_storage_err;

/// Apply read-side pragmas: query_only, mmap, cache, busy timeout.
pub fn apply_read_pragmas(conn: &Connection, config: &StorageConfig) -> VerstrackResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA query_only = ON;
        PRAGMA mmap_size = {};
        PRAGMA cache_size = {};
        PRAGMA busy_timeout = {};
        PRAGMA temp_store = MEMORY;
        ",
        config.mmap_size, config.cache_size, config.busy_timeout_ms
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Whether `query_only` is active on a connection.
pub fn is_query_only(conn: &Connection) -> VerstrackResult<bool> {
    let value: i64 = conn
        .pragma_query_value(None, "query_only", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(value == 1)
}
