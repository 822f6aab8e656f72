//! colsieve: Dataset Cleaning Library
//!
//! A library for dropping columns from tabular datasets using
//! missing value analysis, numerical variance and categorical entropy.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
