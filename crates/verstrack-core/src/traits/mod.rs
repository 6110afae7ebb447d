mod row_source;

pub use row_source::RowSource;
