use serde::Serialize;

use crate::record::{Record, Scalar};

/// One version with its project and the files linked to it.
///
/// Serializes as the version's own fields followed by `project` and
/// `linked_files`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionAggregate {
    #[serde(flatten)]
    pub version: Record,
    pub project: Record,
    pub linked_files: Vec<Record>,
}

impl VersionAggregate {
    /// The version's `id` field, if the view exposes one.
    pub fn id(&self) -> Option<&Scalar> {
        self.version.get("id")
    }
}
