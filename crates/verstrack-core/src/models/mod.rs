mod aggregate;
mod version_query;
mod view_schema;

pub use aggregate::VersionAggregate;
pub use version_query::{SortOrder, VersionChangeQuery};
pub use view_schema::ViewSchema;
