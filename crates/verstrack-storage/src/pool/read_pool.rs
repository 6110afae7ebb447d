//! Pool of read-only connections, round-robin selection.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use verstrack_core::config::StorageConfig;
use verstrack_core::errors::VerstrackResult;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// A pool of read-only SQLite connections.
pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    /// Open `config.read_pool_size` (clamped) read-only connections to `path`.
    pub fn open(path: &Path, config: &StorageConfig) -> VerstrackResult<Self> {
        let size = config.effective_pool_size();
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX
                    | OpenFlags::SQLITE_OPEN_URI,
            )
            .map_err(|e| to_storage_err(format!("open {}: {e}", path.display())))?;
            apply_read_pragmas(&conn, config)?;
            connections.push(Mutex::new(conn));
        }
        tracing::debug!(path = %path.display(), size, "read pool opened");
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// Wrap already-open connections (e.g. a seeded in-memory database).
    /// Read pragmas are applied to each.
    pub fn from_connections(
        connections: Vec<Connection>,
        config: &StorageConfig,
    ) -> VerstrackResult<Self> {
        if connections.is_empty() {
            return Err(to_storage_err("read pool needs at least one connection"));
        }
        for conn in &connections {
            apply_read_pragmas(conn, config)?;
        }
        Ok(Self {
            connections: connections.into_iter().map(Mutex::new).collect(),
            next: AtomicUsize::new(0),
        })
    }

    /// Execute a closure with a read connection from the pool (round-robin).
    pub fn with_conn<F, T>(&self, f: F) -> VerstrackResult<T>
    where
        F: FnOnce(&Connection) -> VerstrackResult<T>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|e| to_storage_err(format!("read pool lock poisoned: {e}")))?;
        f(&guard)
    }

    /// Number of connections in the pool.
    pub fn size(&self) -> usize {
        self.connections.len()
    }
}
