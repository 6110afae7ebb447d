/// Storage-layer errors raised by the SQLite fetch collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("unsupported column type for {column}: {type_name}")]
    UnsupportedColumnType { column: String, type_name: String },
}
