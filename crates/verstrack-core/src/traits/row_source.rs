use crate::errors::VerstrackResult;
use crate::record::{Record, Scalar};

/// The data-fetch collaborator: runs parameterized SQL and returns rows in
/// the order the statement produces them.
///
/// Implementations own connection management. Errors are returned as-is to
/// callers of the read layer; no retry happens above this trait.
#[allow(async_fn_in_trait)]
pub trait RowSource: Send + Sync {
    async fn fetch_all(&self, sql: &str, params: &[Scalar]) -> VerstrackResult<Vec<Record>>;
}
