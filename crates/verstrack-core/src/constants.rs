/// Denormalized view joining versions, their project, and linked files.
pub const VERSION_FILE_VIEW: &str = "client_version_file_view";

/// Raw tables served by the pass-through fetchers.
pub const PROJECT_TABLE: &str = "client_project";
pub const PROJECT_SPLIT_TABLE: &str = "client_project_split";
pub const VERSION_CHANGE_TABLE: &str = "client_version_change";
pub const FILE_TABLE: &str = "client_file";

/// View column matched against `VersionChangeQuery::identifier`.
pub const IDENTIFIER_COLUMN: &str = "project_name";

/// Grouping key of the view (the version identifier).
pub const GROUP_KEY_COLUMN: &str = "version_id";

/// Nullable column marking whether a view row carries a linked file.
pub const FILE_KEY_COLUMN: &str = "file_id";

/// Namespace prefixes of the view's columns.
pub const VERSION_PREFIX: &str = "version_";
pub const PROJECT_PREFIX: &str = "project_";
pub const FILE_PREFIX: &str = "file_";

/// Epoch timestamp field converted by the record normalizer.
pub const DEFAULT_DATETIME_FIELD: &str = "datetime";
