//! SqliteRowSource: the SQLite-backed fetch collaborator.

use std::path::Path;
use std::sync::Arc;

use tokio::task::spawn_blocking;

use verstrack_core::config::StorageConfig;
use verstrack_core::errors::VerstrackResult;
use verstrack_core::record::{Record, Scalar};
use verstrack_core::traits::RowSource;

use crate::pool::ReadPool;
use crate::queries::fetch::query_records;
use crate::to_storage_err;

/// Runs read-only statements against a pooled SQLite database.
#[derive(Clone)]
pub struct SqliteRowSource {
    readers: Arc<ReadPool>,
}

impl SqliteRowSource {
    /// Open the database named by `config.db_path`.
    pub fn open(config: &StorageConfig) -> VerstrackResult<Self> {
        Self::open_path(Path::new(&config.db_path), config)
    }

    /// Open a database file, using `config` for pool size and pragmas.
    pub fn open_path(path: &Path, config: &StorageConfig) -> VerstrackResult<Self> {
        Ok(Self::from_pool(Arc::new(ReadPool::open(path, config)?)))
    }

    /// Share an existing pool.
    pub fn from_pool(readers: Arc<ReadPool>) -> Self {
        Self { readers }
    }

    pub fn pool(&self) -> &Arc<ReadPool> {
        &self.readers
    }
}

impl RowSource for SqliteRowSource {
    /// Runs the statement on the blocking pool; the calling task is
    /// suspended until the rows are decoded.
    async fn fetch_all(&self, sql: &str, params: &[Scalar]) -> VerstrackResult<Vec<Record>> {
        let readers = Arc::clone(&self.readers);
        let sql = sql.to_owned();
        let params = params.to_vec();
        let param_count = params.len();
        let rows = spawn_blocking(move || readers.with_conn(|conn| query_records(conn, &sql, &params)))
            .await
            .map_err(|e| to_storage_err(format!("sqlite join error: {e}")))??;
        tracing::debug!(params = param_count, rows = rows.len(), "fetched rows");
        Ok(rows)
    }
}
