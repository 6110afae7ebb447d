/// Errors raised while transforming view rows into records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("missing column: {column}")]
    MissingColumn { column: String },

    #[error("field {field} is not an epoch timestamp: {found}")]
    InvalidTimestamp { field: String, found: String },

    #[error("timestamp out of range for field {field}: {value}")]
    TimestampOutOfRange { field: String, value: String },
}
