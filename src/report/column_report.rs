//! Combined per-column cleaning report
//!
//! Merges the three stage summaries into one record per column, keyed by
//! column name and ordered like the null-filter summary, and exports it as
//! JSON alongside the thresholds that produced it.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use serde::Serialize;

use crate::pipeline::{
    CategoricalDescription, EntropySummary, FilterConfig, NullsSummary, NumericDescription,
    VarianceSummary,
};

/// Stage that removed a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DropStage {
    Nulls,
    Variance,
    Entropy,
}

impl std::fmt::Display for DropStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropStage::Nulls => write!(f, "nulls"),
            DropStage::Variance => write!(f, "variance"),
            DropStage::Entropy => write!(f, "entropy"),
        }
    }
}

/// Every statistic and decision known for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnRecord {
    pub column: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropped_at_stage: Option<DropStage>,
    /// Observed (non-missing) values, from whichever stage described the column
    pub count: usize,
    pub nulls_count: usize,
    pub nulls_proportion: f64,
    pub filtered_nulls: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_variance: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorical: Option<CategoricalDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_entropy: Option<u8>,
}

impl ColumnRecord {
    pub fn is_dropped(&self) -> bool {
        self.dropped_at_stage.is_some()
    }

    pub fn entropy(&self) -> Option<f64> {
        self.categorical.as_ref().map(|c| c.entropy)
    }

    pub fn std(&self) -> Option<f64> {
        self.numeric.as_ref().map(|n| n.std)
    }
}

/// Per-column report built from the three stage summaries
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ColumnReport {
    records: Vec<ColumnRecord>,
}

impl ColumnReport {
    /// Left-join the variance and entropy summaries onto the null summary.
    ///
    /// Columns dropped by the null filter never reach the later stages, so
    /// their numeric/categorical sections stay empty.
    pub fn merge(
        nulls: &NullsSummary,
        variance: &VarianceSummary,
        entropy: &EntropySummary,
    ) -> Self {
        let records = nulls
            .iter()
            .map(|nulls_row| {
                let variance_row = variance.get(&nulls_row.column);
                let entropy_row = entropy.get(&nulls_row.column);

                let count = variance_row.map(|r| r.stats.count).unwrap_or(0)
                    + entropy_row.map(|r| r.stats.count).unwrap_or(0);

                let dropped_at_stage = if nulls_row.filtered_nulls {
                    Some(DropStage::Nulls)
                } else if variance_row.is_some_and(|r| r.filtered_variance) {
                    Some(DropStage::Variance)
                } else if entropy_row.is_some_and(|r| r.filtered_entropy) {
                    Some(DropStage::Entropy)
                } else {
                    None
                };

                ColumnRecord {
                    column: nulls_row.column.clone(),
                    status: if dropped_at_stage.is_some() {
                        "dropped".to_string()
                    } else {
                        "kept".to_string()
                    },
                    dropped_at_stage,
                    count,
                    nulls_count: nulls_row.nulls_count,
                    nulls_proportion: nulls_row.nulls_proportion,
                    filtered_nulls: u8::from(nulls_row.filtered_nulls),
                    numeric: variance_row.map(|r| r.stats.clone()),
                    filtered_variance: variance_row.map(|r| u8::from(r.filtered_variance)),
                    categorical: entropy_row.map(|r| r.stats.clone()),
                    filtered_entropy: entropy_row.map(|r| u8::from(r.filtered_entropy)),
                }
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[ColumnRecord] {
        &self.records
    }

    pub fn get(&self, column: &str) -> Option<&ColumnRecord> {
        self.records.iter().find(|r| r.column == column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Columns that survived all stages, in report order.
    pub fn kept_columns(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| !r.is_dropped())
            .map(|r| r.column.clone())
            .collect()
    }

    /// Per-column table with the key statistic of each stage.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Column").add_attribute(Attribute::Bold),
            Cell::new("Nulls %").add_attribute(Attribute::Bold),
            Cell::new("Std").add_attribute(Attribute::Bold),
            Cell::new("Entropy").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

        for record in &self.records {
            let status = match record.dropped_at_stage {
                Some(stage) => Cell::new(format!("dropped ({})", stage)).fg(Color::Red),
                None => Cell::new("kept").fg(Color::Green),
            };
            table.add_row(vec![
                Cell::new(&record.column),
                Cell::new(format!("{:.1}%", record.nulls_proportion * 100.0)),
                Cell::new(format_optional(record.std())),
                Cell::new(format_optional(record.entropy())),
                status,
            ]);
        }

        table
    }

    /// Write the report as pretty JSON with its metadata.
    pub fn export_json(&self, path: &Path, metadata: ReportMetadata) -> Result<()> {
        let document = ReportDocument {
            metadata,
            columns: self,
        };
        let json = serde_json::to_string_pretty(&document)
            .context("Failed to serialize column report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        log::info!("column report written to {}", path.display());
        Ok(())
    }
}

/// Provenance of a report
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub timestamp: String,
    pub colsieve_version: String,
    pub input_file: String,
    pub output_file: String,
    pub thresholds: FilterConfig,
}

impl ReportMetadata {
    pub fn new(input: &Path, output: &Path, thresholds: FilterConfig) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            colsieve_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input.display().to_string(),
            output_file: output.display().to_string(),
            thresholds,
        }
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    metadata: ReportMetadata,
    columns: &'a ColumnReport,
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}
