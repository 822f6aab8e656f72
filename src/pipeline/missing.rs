//! Missing value analysis and reduction

use anyhow::Result;
use serde::Serialize;

use super::config::validate_nulls_threshold;
use super::dataset::TabularData;
use super::error::FilterError;
use super::stage::{flag_as_int, StageSummary, SummaryRow};

/// Missing-value statistics for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NullsRow {
    pub column: String,
    pub nulls_count: usize,
    pub nulls_proportion: f64,
    #[serde(serialize_with = "flag_as_int")]
    pub filtered_nulls: bool,
}

impl SummaryRow for NullsRow {
    fn column(&self) -> &str {
        &self.column
    }

    fn filtered(&self) -> bool {
        self.filtered_nulls
    }
}

/// Null-filter summary, sorted by `nulls_count` descending
pub type NullsSummary = StageSummary<NullsRow>;

/// Analyze missing values for every column.
///
/// Returns `(column, nulls_count, nulls_proportion)` sorted by null count
/// descending, ties keeping dataset order. The row count is computed once.
pub fn analyze_missing_values<D: TabularData>(data: &D) -> Result<Vec<(String, usize, f64)>> {
    let total_rows = data.row_count()?;
    if total_rows == 0 {
        return Err(FilterError::EmptyDataset.into());
    }

    let mut missing: Vec<(String, usize, f64)> = data
        .null_counts()?
        .into_iter()
        .map(|(name, nulls)| {
            let proportion = nulls as f64 / total_rows as f64;
            (name, nulls, proportion)
        })
        .collect();

    // Stable sort keeps dataset order among equal counts
    missing.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(missing)
}

/// Get features to drop based on missing value threshold (strictly above).
pub fn get_features_above_threshold(
    missing: &[(String, usize, f64)],
    threshold: f64,
) -> Vec<String> {
    missing
        .iter()
        .filter(|(_, _, proportion)| *proportion > threshold)
        .map(|(name, _, _)| name.clone())
        .collect()
}

/// Drop columns whose proportion of missing values exceeds `nulls_threshold`.
///
/// Every column appears in the returned summary. The input is left untouched.
///
/// # Arguments
/// * `data` - Dataset to filter
/// * `nulls_threshold` - Maximum tolerated missing proportion; 1 or more disables the stage
pub fn filter_nulls<D: TabularData>(data: &D, nulls_threshold: f64) -> Result<(D, NullsSummary)> {
    validate_nulls_threshold(nulls_threshold)?;

    let missing = analyze_missing_values(data)?;
    let to_drop = get_features_above_threshold(&missing, nulls_threshold);

    let rows: Vec<NullsRow> = missing
        .into_iter()
        .map(|(column, nulls_count, nulls_proportion)| {
            log::debug!(
                "column '{}': {} null(s), proportion {:.4}",
                column,
                nulls_count,
                nulls_proportion
            );
            NullsRow {
                filtered_nulls: nulls_proportion > nulls_threshold,
                column,
                nulls_count,
                nulls_proportion,
            }
        })
        .collect();

    log::info!(
        "null filter: dropping {} of {} column(s) above {}",
        to_drop.len(),
        rows.len(),
        nulls_threshold
    );

    let filtered = data.drop_columns(&to_drop)?;
    Ok((filtered, StageSummary::new(rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_threshold_is_strict() {
        let missing = vec![
            ("exactly_at".to_string(), 3, 0.3),
            ("just_above".to_string(), 4, 0.301),
        ];
        let to_drop = get_features_above_threshold(&missing, 0.3);
        assert_eq!(to_drop, vec!["just_above".to_string()]);
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let df = df! {
            "b" => [Some(1i32), None],
            "a" => [Some(1i32), None],
            "c" => [1i32, 2],
        }
        .unwrap();

        let missing = analyze_missing_values(&df).unwrap();
        let names: Vec<&str> = missing.iter().map(|(n, _, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_zero_rows_is_rejected() {
        let df = df! { "a" => Vec::<f64>::new() }.unwrap();
        let err = filter_nulls(&df, 0.5).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FilterError>(),
            Some(&FilterError::EmptyDataset)
        );
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let df = df! { "a" => [1i32] }.unwrap();
        assert!(filter_nulls(&df, -0.5).is_err());
    }
}
