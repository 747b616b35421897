pub mod report;
pub mod summary;

pub use report::ColumnReport;
pub use summary::{summarize, EmptyDataError, StatisticsReport};
