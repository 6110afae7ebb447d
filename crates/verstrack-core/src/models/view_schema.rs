use serde::{Deserialize, Serialize};

use crate::constants;

/// Structural columns of the denormalized version/project/file view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSchema {
    /// Column rows are grouped on.
    pub group_key: String,
    /// Nullable column; null means the row carries no linked file.
    pub file_key: String,
    pub version_prefix: String,
    pub project_prefix: String,
    pub file_prefix: String,
    /// Epoch field normalized on versions and files.
    pub datetime_field: String,
}

impl Default for ViewSchema {
    fn default() -> Self {
        Self {
            group_key: constants::GROUP_KEY_COLUMN.to_string(),
            file_key: constants::FILE_KEY_COLUMN.to_string(),
            version_prefix: constants::VERSION_PREFIX.to_string(),
            project_prefix: constants::PROJECT_PREFIX.to_string(),
            file_prefix: constants::FILE_PREFIX.to_string(),
            datetime_field: constants::DEFAULT_DATETIME_FIELD.to_string(),
        }
    }
}
