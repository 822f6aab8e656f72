//! Pipeline module - the cleaning stages and the dataset abstraction they run on
//!
//! Stages run in order: missing values, numerical variance, entropy. Each
//! takes a dataset by reference and returns a reduced dataset together with
//! its own summary table.

pub mod categorical;
pub mod config;
pub mod dataset;
pub mod describe;
pub mod entropy;
pub mod error;
pub mod loader;
pub mod missing;
pub mod stage;
pub mod threshold;
pub mod variance;

pub use categorical::*;
pub use config::*;
pub use dataset::*;
pub use describe::*;
pub use entropy::*;
pub use error::*;
pub use loader::*;
pub use missing::*;
pub use stage::{StageSummary, SummaryRow};
pub use threshold::*;
pub use variance::*;
