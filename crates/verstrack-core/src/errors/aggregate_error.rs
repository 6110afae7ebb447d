/// Errors raised while folding grouped rows into aggregates.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("rows of group {key} disagree on {namespace} fields")]
    InconsistentGroup { key: String, namespace: String },
}
