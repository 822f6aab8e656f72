//! Descriptive statistics for numeric and categorical columns
//!
//! Mirrors the usual `describe` output: numeric columns get count, mean,
//! sample standard deviation, min, quartiles and max; categorical columns get
//! count, number of distinct values, most frequent value and its frequency.
//! Missing values (nulls, and NaN for floats) are skipped.

use std::collections::HashMap;

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use super::entropy::entropy_from_counts;

/// Numeric column statistics. Undefined statistics are NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericDescription {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    pub q50: f64,
    #[serde(rename = "75%")]
    pub q75: f64,
    pub max: f64,
}

impl NumericDescription {
    /// Aggregations describing numeric column `name`, one output per statistic.
    ///
    /// Values are cast to `Float64` and NaN is treated as missing. Outputs are
    /// aliased `<slot>:<stat>` so many columns can share one `select`.
    pub fn exprs(name: &str, slot: usize) -> Vec<Expr> {
        let values = col(name)
            .cast(DataType::Float64)
            .fill_nan(lit(NULL).cast(DataType::Float64));
        let quantile = |q: f64| values.clone().quantile(lit(q), QuantileMethod::Linear);

        vec![
            values.clone().count().alias(stat_alias(slot, "count")),
            values.clone().mean().alias(stat_alias(slot, "mean")),
            values.clone().std(1).alias(stat_alias(slot, "std")),
            values.clone().min().alias(stat_alias(slot, "min")),
            quantile(0.25).alias(stat_alias(slot, "25%")),
            quantile(0.50).alias(stat_alias(slot, "50%")),
            quantile(0.75).alias(stat_alias(slot, "75%")),
            values.clone().max().alias(stat_alias(slot, "max")),
        ]
    }

    /// Read back the statistics [`NumericDescription::exprs`] produced for `slot`.
    pub fn from_aggregates(df: &DataFrame, slot: usize) -> Result<Self> {
        let stat = |name: &str| read_f64(df, &stat_alias(slot, name));
        let count = stat("count")?;

        Ok(Self {
            count: if count.is_nan() { 0 } else { count as usize },
            mean: stat("mean")?,
            std: stat("std")?,
            min: stat("min")?,
            q25: stat("25%")?,
            q50: stat("50%")?,
            q75: stat("75%")?,
            max: stat("max")?,
        })
    }
}

fn stat_alias(slot: usize, stat: &str) -> String {
    format!("{}:{}", slot, stat)
}

/// First value of a single-row aggregate as `f64`; null reads as NaN.
fn read_f64(df: &DataFrame, name: &str) -> Result<f64> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column
        .as_materialized_series()
        .f64()?
        .get(0)
        .unwrap_or(f64::NAN))
}

/// Categorical column statistics plus entropy of the observed values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalDescription {
    pub count: usize,
    pub unique: usize,
    /// Most frequent value; `None` when the column has no observed values
    pub top: Option<String>,
    pub freq: usize,
    pub entropy: f64,
}

/// Describe a numeric column of any integer or float type.
pub fn describe_numeric(column: &Column) -> Result<NumericDescription> {
    let stats = DataFrame::new(vec![column.clone()])?
        .lazy()
        .select(NumericDescription::exprs(column.name().as_str(), 0))
        .collect()?;
    NumericDescription::from_aggregates(&stats, 0)
}

/// Describe a string or categorical column, computing entropy with `base`.
pub fn describe_categorical(column: &Column, base: Option<f64>) -> Result<CategoricalDescription> {
    let strings = column.cast(&DataType::String)?;
    let ca = strings.as_materialized_series().str()?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in ca.into_iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }

    let count: usize = counts.values().sum();

    // Highest frequency wins; ties go to the smallest value so output is stable
    let top = counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(value, freq)| (value.to_string(), *freq));

    Ok(CategoricalDescription {
        count,
        unique: counts.len(),
        freq: top.as_ref().map(|(_, freq)| *freq).unwrap_or(0),
        top: top.map(|(value, _)| value),
        entropy: entropy_from_counts(counts.values().copied(), base),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_describe_matches_known_values() {
        let column = Column::new("x".into(), [1.0f64, 2.0, 3.0, 4.0]);
        let d = describe_numeric(&column).unwrap();

        assert_eq!(d.count, 4);
        assert!((d.mean - 2.5).abs() < 1e-12);
        // sample std of 1..4
        assert!((d.std - 1.290_994_448_735_805_6).abs() < 1e-12);
        assert_eq!(d.min, 1.0);
        assert!((d.q25 - 1.75).abs() < 1e-12);
        assert!((d.q50 - 2.5).abs() < 1e-12);
        assert!((d.q75 - 3.25).abs() < 1e-12);
        assert_eq!(d.max, 4.0);
    }

    #[test]
    fn test_numeric_describe_skips_nulls_and_nan() {
        let column = Column::new("x".into(), [Some(2.0f64), None, Some(f64::NAN), Some(4.0)]);
        let d = describe_numeric(&column).unwrap();
        assert_eq!(d.count, 2);
        assert!((d.mean - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_numeric_describe_integers() {
        let column = Column::new("i".into(), [5i32, 5, 5]);
        let d = describe_numeric(&column).unwrap();
        assert_eq!(d.std, 0.0);
        assert_eq!(d.q50, 5.0);
    }

    #[test]
    fn test_single_value_has_undefined_std() {
        let column = Column::new("x".into(), [3.0f64]);
        let d = describe_numeric(&column).unwrap();
        assert_eq!(d.count, 1);
        assert!(d.std.is_nan());
        assert_eq!(d.q75, 3.0);
    }

    #[test]
    fn test_all_missing_column_is_all_nan() {
        let column = Column::new("x".into(), [None::<f64>, Some(f64::NAN)]);
        let d = describe_numeric(&column).unwrap();
        assert_eq!(d.count, 0);
        assert!(d.mean.is_nan());
        assert!(d.min.is_nan());
        assert!(d.max.is_nan());
    }

    #[test]
    fn test_categorical_describe() {
        let column = Column::new("c".into(), [Some("b"), Some("a"), None, Some("b"), Some("c")]);
        let d = describe_categorical(&column, None).unwrap();

        assert_eq!(d.count, 4);
        assert_eq!(d.unique, 3);
        assert_eq!(d.top.as_deref(), Some("b"));
        assert_eq!(d.freq, 2);
        let expected = -(0.5f64 * 0.5f64.ln() + 2.0 * 0.25 * 0.25f64.ln());
        assert!((d.entropy - expected).abs() < 1e-12);
    }

    #[test]
    fn test_categorical_top_tie_breaks_on_value() {
        let column = Column::new("c".into(), ["z", "y", "y", "z"]);
        let d = describe_categorical(&column, None).unwrap();
        assert_eq!(d.top.as_deref(), Some("y"));
    }

    #[test]
    fn test_categorical_all_missing() {
        let column = Column::new("c".into(), [None::<&str>, None]);
        let d = describe_categorical(&column, None).unwrap();
        assert_eq!(d.count, 0);
        assert_eq!(d.unique, 0);
        assert_eq!(d.top, None);
        assert_eq!(d.entropy, 0.0);
    }
}
