//! Entropy filter for categorical and text columns

use anyhow::Result;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use super::dataset::TabularData;
use super::describe::{describe_categorical, CategoricalDescription};
use super::stage::{flag_as_int, StageSummary, SummaryRow};
use super::threshold::ThresholdBand;

/// Descriptive statistics, entropy and filter decision for one categorical column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntropyRow {
    pub column: String,
    #[serde(flatten)]
    pub stats: CategoricalDescription,
    #[serde(serialize_with = "flag_as_int")]
    pub filtered_entropy: bool,
}

impl EntropyRow {
    pub fn entropy(&self) -> f64 {
        self.stats.entropy
    }
}

impl SummaryRow for EntropyRow {
    fn column(&self) -> &str {
        &self.column
    }

    fn filtered(&self) -> bool {
        self.filtered_entropy
    }
}

/// Entropy-filter summary, sorted by column name
pub type EntropySummary = StageSummary<EntropyRow>;

/// Describe every categorical or text column, sorted by column name.
pub fn describe_categorical_columns<D: TabularData>(
    data: &D,
    base: Option<f64>,
) -> Result<Vec<(String, CategoricalDescription)>> {
    let categorical_cols = data.columns_where(|kind| kind.is_categorical_like())?;
    if categorical_cols.is_empty() {
        return Ok(Vec::new());
    }

    let df = data.materialize(&categorical_cols)?;

    let mut described: Vec<(String, CategoricalDescription)> = df
        .get_columns()
        .par_iter()
        .map(|column: &Column| -> Result<(String, CategoricalDescription)> {
            let stats = describe_categorical(column, base)?;
            Ok((column.name().to_string(), stats))
        })
        .collect::<Result<Vec<_>>>()?;

    described.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(described)
}

/// Drop categorical/text columns whose entropy lies outside `entropy_thresholds`.
///
/// Uses the natural logarithm; see [`filter_entropy_with_base`] for other units.
pub fn filter_entropy<D: TabularData>(
    data: &D,
    entropy_thresholds: ThresholdBand,
    inclusive: bool,
) -> Result<(D, EntropySummary)> {
    filter_entropy_with_base(data, entropy_thresholds, inclusive, None)
}

/// [`filter_entropy`] with an explicit logarithm base (`None` = natural log).
pub fn filter_entropy_with_base<D: TabularData>(
    data: &D,
    entropy_thresholds: ThresholdBand,
    inclusive: bool,
    base: Option<f64>,
) -> Result<(D, EntropySummary)> {
    if let Some(base) = base {
        super::config::validate_log_base(base)?;
    }

    let rows: Vec<EntropyRow> = describe_categorical_columns(data, base)?
        .into_iter()
        .map(|(column, stats)| {
            log::debug!(
                "column '{}': {} distinct value(s), entropy {:.6}",
                column,
                stats.unique,
                stats.entropy
            );
            EntropyRow {
                filtered_entropy: !entropy_thresholds.contains(stats.entropy, inclusive),
                column,
                stats,
            }
        })
        .collect();

    let summary = StageSummary::new(rows);
    let to_drop = summary.dropped_columns();

    log::info!(
        "entropy filter: dropping {} of {} categorical column(s) outside {}",
        to_drop.len(),
        summary.len(),
        entropy_thresholds
    );

    let filtered = data.drop_columns(&to_drop)?;
    Ok((filtered, summary))
}
