//! Numerical variance filter
//!
//! Scores numeric columns by their sample standard deviation and drops the
//! ones falling outside a threshold band. Constant columns (std 0) fall out
//! of the default exclusive `[0, +inf]` band.

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use super::dataset::TabularData;
use super::describe::NumericDescription;
use super::stage::{flag_as_int, StageSummary, SummaryRow};
use super::threshold::ThresholdBand;

/// Descriptive statistics and filter decision for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarianceRow {
    pub column: String,
    #[serde(flatten)]
    pub stats: NumericDescription,
    #[serde(serialize_with = "flag_as_int")]
    pub filtered_variance: bool,
}

impl SummaryRow for VarianceRow {
    fn column(&self) -> &str {
        &self.column
    }

    fn filtered(&self) -> bool {
        self.filtered_variance
    }
}

/// Variance-filter summary, sorted by column name
pub type VarianceSummary = StageSummary<VarianceRow>;

/// Describe every numeric column, sorted by column name.
///
/// All statistics come out of one aggregation pass; only a single row of
/// results is ever collected.
pub fn describe_numeric_columns<D: TabularData>(
    data: &D,
) -> Result<Vec<(String, NumericDescription)>> {
    let numeric_cols = data.columns_where(|kind| kind.is_numeric())?;
    if numeric_cols.is_empty() {
        return Ok(Vec::new());
    }

    let exprs: Vec<Expr> = numeric_cols
        .iter()
        .enumerate()
        .flat_map(|(slot, name)| NumericDescription::exprs(name, slot))
        .collect();
    let stats = data.aggregate(exprs)?;

    let mut described = numeric_cols
        .into_iter()
        .enumerate()
        .map(|(slot, name)| Ok((name, NumericDescription::from_aggregates(&stats, slot)?)))
        .collect::<Result<Vec<_>>>()?;

    described.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(described)
}

/// Drop numeric columns whose standard deviation lies outside `std_thresholds`.
///
/// Non-numeric columns are neither scored nor dropped.
///
/// # Arguments
/// * `data` - Dataset to filter
/// * `std_thresholds` - Band of acceptable standard deviations
/// * `inclusive` - Whether the band endpoints count as acceptable
pub fn filter_numerical_variance<D: TabularData>(
    data: &D,
    std_thresholds: ThresholdBand,
    inclusive: bool,
) -> Result<(D, VarianceSummary)> {
    let rows: Vec<VarianceRow> = describe_numeric_columns(data)?
        .into_iter()
        .map(|(column, stats)| {
            if stats.std.is_nan() {
                log::warn!(
                    "column '{}' has {} observed value(s); std is undefined and the column is dropped",
                    column,
                    stats.count
                );
            } else {
                log::debug!("column '{}': std {:.6}", column, stats.std);
            }
            VarianceRow {
                filtered_variance: !std_thresholds.contains(stats.std, inclusive),
                column,
                stats,
            }
        })
        .collect();

    let summary = StageSummary::new(rows);
    let to_drop = summary.dropped_columns();

    log::info!(
        "variance filter: dropping {} of {} numeric column(s) outside {}",
        to_drop.len(),
        summary.len(),
        std_thresholds
    );

    let filtered = data.drop_columns(&to_drop)?;
    Ok((filtered, summary))
}
