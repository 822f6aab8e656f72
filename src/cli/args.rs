//! Command-line argument definitions using clap

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::pipeline::{FilterConfig, ThresholdBand, DEFAULT_NULLS_THRESHOLD};

/// colsieve - Drop columns that are mostly missing, (near-)constant or uninformative
#[derive(Parser, Debug)]
#[command(name = "colsieve")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path (CSV or Parquet, determined by extension).
    /// Defaults to input directory with '_cleaned' suffix (e.g., data.csv -> data_cleaned.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path of the JSON column report.
    /// Defaults to input directory with '_cleaning_report.json' suffix.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Drop columns whose proportion of missing values is above this value
    #[arg(long, default_value_t = DEFAULT_NULLS_THRESHOLD, value_parser = parse_nulls_threshold)]
    pub nulls_threshold: f64,

    /// Standard deviation band (two comma-separated values, any order) for numeric columns.
    /// Columns whose std falls outside the band are dropped. Use 'inf' for no upper bound.
    #[arg(long, value_delimiter = ',', num_args = 1.., default_values_t = [0.0, f64::INFINITY], allow_negative_numbers = true)]
    pub std_thresholds: Vec<f64>,

    /// Treat the std band endpoints as acceptable values
    #[arg(long, default_value = "false")]
    pub variance_inclusive: bool,

    /// Entropy band (two comma-separated values, any order) for categorical and text columns
    #[arg(long, value_delimiter = ',', num_args = 1.., default_values_t = [0.0, f64::INFINITY], allow_negative_numbers = true)]
    pub entropy_thresholds: Vec<f64>,

    /// Treat the entropy band endpoints as acceptable values
    #[arg(long, default_value = "false")]
    pub entropy_inclusive: bool,

    /// Logarithm base for entropy (defaults to natural log)
    #[arg(long)]
    pub entropy_base: Option<f64>,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Get the output path, deriving from input if not explicitly provided.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let extension = self
                .input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("parquet");
            sibling_path(&self.input, &format!("_cleaned.{}", extension))
        })
    }

    /// Get the JSON report path, deriving from input if not explicitly provided.
    pub fn report_path(&self) -> PathBuf {
        self.report
            .clone()
            .unwrap_or_else(|| sibling_path(&self.input, "_cleaning_report.json"))
    }

    /// Build and validate the filter configuration from the parsed flags.
    pub fn filter_config(&self) -> anyhow::Result<FilterConfig> {
        let config = FilterConfig {
            nulls_threshold: self.nulls_threshold,
            std_thresholds: ThresholdBand::from_slice("std", &self.std_thresholds)?,
            variance_inclusive: self.variance_inclusive,
            entropy_thresholds: ThresholdBand::from_slice("entropy", &self.entropy_thresholds)?,
            entropy_inclusive: self.entropy_inclusive,
            entropy_base: self.entropy_base,
        };
        config.validate()?;
        Ok(config)
    }
}

/// `<dir>/<stem><suffix>` next to `input`
fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    parent.join(format!("{}{}", stem, suffix))
}

/// Validator for nulls_threshold parameter
fn parse_nulls_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    crate::pipeline::validate_nulls_threshold(value).map_err(|e| e.to_string())?;
    Ok(value)
}
