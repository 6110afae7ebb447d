/// Errors raised while constructing a parameterized query, before dispatch.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("column {column} is not allowed as a {role}")]
    DisallowedColumn { column: String, role: &'static str },

    #[error("filter field and value must be given together (field: {field:?})")]
    IncompleteFilter { field: Option<String> },

    #[error("invalid sort order: {value}")]
    InvalidSortOrder { value: String },

    #[error("placeholder mismatch: query has {placeholders} placeholders, {params} parameters bound")]
    PlaceholderMismatch { placeholders: usize, params: usize },

    #[error("limit {limit} exceeds maximum {max}")]
    LimitExceeded { limit: u32, max: u32 },
}
