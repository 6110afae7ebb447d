// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "verstrack.db";
pub const DEFAULT_MMAP_SIZE: u64 = 268_435_456; // 256 MB
pub const DEFAULT_CACHE_SIZE: i64 = -64_000; // 64 MB (negative = KB)
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const MAX_READ_POOL_SIZE: usize = 8;

// --- Query ---
pub const DEFAULT_MAX_LIMIT: u32 = 1_000;
pub const DEFAULT_VERIFY_FANOUT: bool = false;
pub const DEFAULT_SORTABLE_COLUMNS: &[&str] = &[
    "version_id",
    "version_datetime",
    "version_name",
    "version_number",
    "project_id",
    "project_name",
];
pub const DEFAULT_FILTERABLE_COLUMNS: &[&str] = &[
    "version_id",
    "version_name",
    "version_number",
    "version_datetime",
    "file_id",
    "file_name",
    "file_path",
    "file_datetime",
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
