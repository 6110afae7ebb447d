//! Test fixtures: the sample client database and golden aggregation datasets.
//!
//! SQL and JSON live in the workspace's `test-fixtures/` directory so every
//! crate's tests load the same data.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use verstrack_core::record::Record;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

fn read_fixture(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = read_fixture(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load the `rows` array of a golden aggregation dataset as records.
/// Parsed straight from the file text so column order survives.
pub fn load_view_rows(relative_path: &str) -> Vec<Record> {
    #[derive(Deserialize)]
    struct Dataset {
        rows: Vec<Record>,
    }
    load_fixture::<Dataset>(relative_path).rows
}

/// Create the client schema (tables + joined view) on `conn`.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(&read_fixture("sql/client_schema.sql"))
}

/// Insert the sample projects, splits, versions, and files.
pub fn seed_sample(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(&read_fixture("sql/client_seed.sql"))
}

/// Write a seeded sample database to `dir` and return its path.
///
/// # Panics
/// Panics if the database can't be created.
pub fn create_sample_db(dir: &Path) -> PathBuf {
    let path = dir.join("client.db");
    let conn = Connection::open(&path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {}", path.display(), e));
    create_schema(&conn).expect("create client schema");
    seed_sample(&conn).expect("seed client sample");
    path
}
