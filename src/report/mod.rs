//! Report module - summarizing and exporting cleaning results

pub mod column_report;
pub mod summary;

pub use column_report::*;
pub use summary::*;
