use verstrack_core::models::VersionChangeQuery;
use verstrack_core::record::Scalar;

/// Positional parameters `[identifier, value, limit, skip]`, nulls omitted,
/// relative order kept.
pub fn bind_version_change_params(query: &VersionChangeQuery) -> Vec<Scalar> {
    [
        Some(Scalar::Text(query.identifier.clone())),
        query.value.clone(),
        Some(Scalar::from(query.limit)),
        Some(Scalar::from(query.skip)),
    ]
    .into_iter()
    .flatten()
    .filter(|param| !param.is_null())
    .collect()
}
