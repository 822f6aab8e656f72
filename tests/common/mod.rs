//! Shared test utilities and fixture generators
#![allow(dead_code)]

use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tempfile::TempDir;

/// How many columns of one type to generate and how much of each to blank out
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub count: usize,
    /// Fraction of rows set to null in every column of this type
    pub missing_fraction: f64,
}

impl ColumnSpec {
    pub fn new(count: usize, missing_fraction: f64) -> Self {
        Self {
            count,
            missing_fraction,
        }
    }

    pub fn complete(count: usize) -> Self {
        Self::new(count, 0.0)
    }
}

/// Synthetic dataset layout
#[derive(Debug, Clone)]
pub struct DatasetSpec {
    pub rows: usize,
    pub float: ColumnSpec,
    pub integer: ColumnSpec,
    pub categorical: ColumnSpec,
    pub boolean: ColumnSpec,
    pub string: ColumnSpec,
    pub seed: u64,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            rows: 100,
            float: ColumnSpec::complete(2),
            integer: ColumnSpec::complete(2),
            categorical: ColumnSpec::complete(2),
            boolean: ColumnSpec::complete(1),
            string: ColumnSpec::complete(1),
            seed: 42,
        }
    }
}

/// Generate a mixed-type DataFrame.
///
/// Columns are named `<type>_<i>`:
/// - `float_*`: uniform in [0, 1)
/// - `integer_*`: uniform in [0, 1_000_000)
/// - `categorical_*`: 3-letter codes over the alphabet A-D (64 categories)
/// - `boolean_*`: fair coin
/// - `string_*`: random 12-letter words (practically all distinct)
///
/// Each column of a type gets exactly `round(rows * missing_fraction)` nulls.
pub fn make_dataset(spec: &DatasetSpec) -> DataFrame {
    let rows = spec.rows.max(5);
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let mut columns: Vec<Column> = Vec::new();

    for i in 0..spec.float.count {
        let mask = missing_mask(&mut rng, rows, spec.float.missing_fraction);
        let values: Vec<Option<f64>> = (0..rows)
            .map(|r| (!mask[r]).then(|| rng.gen::<f64>()))
            .collect();
        columns.push(Column::new(format!("float_{}", i).into(), values));
    }

    for i in 0..spec.integer.count {
        let mask = missing_mask(&mut rng, rows, spec.integer.missing_fraction);
        let values: Vec<Option<i64>> = (0..rows)
            .map(|r| (!mask[r]).then(|| rng.gen_range(0..1_000_000)))
            .collect();
        columns.push(Column::new(format!("integer_{}", i).into(), values));
    }

    for i in 0..spec.categorical.count {
        let mask = missing_mask(&mut rng, rows, spec.categorical.missing_fraction);
        let values: Vec<Option<String>> = (0..rows)
            .map(|r| (!mask[r]).then(|| random_word(&mut rng, b"ABCD", 3)))
            .collect();
        columns.push(Column::new(format!("categorical_{}", i).into(), values));
    }

    for i in 0..spec.boolean.count {
        let mask = missing_mask(&mut rng, rows, spec.boolean.missing_fraction);
        let values: Vec<Option<bool>> = (0..rows)
            .map(|r| (!mask[r]).then(|| rng.gen_bool(0.5)))
            .collect();
        columns.push(Column::new(format!("boolean_{}", i).into(), values));
    }

    for i in 0..spec.string.count {
        let mask = missing_mask(&mut rng, rows, spec.string.missing_fraction);
        let values: Vec<Option<String>> = (0..rows)
            .map(|r| (!mask[r]).then(|| random_word(&mut rng, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ", 12)))
            .collect();
        columns.push(Column::new(format!("string_{}", i).into(), values));
    }

    DataFrame::new(columns).unwrap()
}

fn missing_mask(rng: &mut StdRng, rows: usize, fraction: f64) -> Vec<bool> {
    let amount = ((rows as f64) * fraction.clamp(0.0, 1.0)).round() as usize;
    let mut mask = vec![false; rows];
    for idx in rand::seq::index::sample(rng, rows, amount).into_iter() {
        mask[idx] = true;
    }
    mask
}

fn random_word(rng: &mut StdRng, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Three columns with known characteristics over 100 rows:
/// - `A`: numeric, 50% missing, std ≈ 2.02 (alternating 0 and 4)
/// - `B`: numeric, complete, std ≈ 5e-5 (alternating 1.0 and 1.0001)
/// - `C`: text, complete, two equally frequent values (entropy ln 2)
pub fn create_abc_dataframe() -> DataFrame {
    let a: Vec<Option<f64>> = (0..100)
        .map(|i| {
            if i < 50 {
                Some(if i % 2 == 0 { 0.0 } else { 4.0 })
            } else {
                None
            }
        })
        .collect();
    let b: Vec<f64> = (0..100)
        .map(|i| if i % 2 == 0 { 1.0 } else { 1.0001 })
        .collect();
    let c: Vec<&str> = (0..100).map(|i| if i % 2 == 0 { "x" } else { "y" }).collect();

    DataFrame::new(vec![
        Column::new("A".into(), a),
        Column::new("B".into(), b),
        Column::new("C".into(), c),
    ])
    .unwrap()
}

/// Create a DataFrame with specific missing value patterns
pub fn create_missing_test_dataframe() -> DataFrame {
    df! {
        "col_complete" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
        "col_20pct_missing" => [Some(1.0f64), None, Some(3.0), Some(4.0), Some(5.0)],
        "col_40pct_missing" => [Some(1.0f64), Some(2.0), None, None, Some(5.0)],
        "col_80pct_missing" => [Some("a"), None, None, None, None],
        "col_all_missing" => [None::<f64>, None, None, None, None],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Column names in order
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols = column_names(df);
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Assert that a DataFrame does NOT contain specific columns
pub fn assert_missing_columns(df: &DataFrame, unexpected_cols: &[&str]) {
    let actual_cols = column_names(df);
    for col in unexpected_cols {
        assert!(
            !actual_cols.contains(&col.to_string()),
            "Unexpected column still present: '{}'",
            col
        );
    }
}
