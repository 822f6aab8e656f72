//! Dataset abstraction the filter stages are written against
//!
//! Stages only need a handful of capabilities: the column schema, a row
//! count, per-column null counts, aggregation, materialization of selected
//! columns and column dropping. [`TabularData`] captures exactly that, so the same stage
//! runs over a deferred [`LazyFrame`] or an in-memory [`DataFrame`].

use anyhow::Result;
use polars::prelude::*;

/// Alias used for the row-count aggregation; never collides since it is the only output column.
const ROW_COUNT_ALIAS: &str = "__colsieve_rows";

/// Closed set of column type classes the stages dispatch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Integer and floating point columns
    Numeric,
    Boolean,
    /// Dictionary-encoded categoricals and enums
    Categorical,
    /// Free-form strings
    Text,
    /// Dates, durations, lists, structs, binary and anything else
    Other,
}

impl ColumnKind {
    pub fn from_dtype(dtype: &DataType) -> Self {
        match dtype {
            dt if dt.is_primitive_numeric() => ColumnKind::Numeric,
            DataType::Boolean => ColumnKind::Boolean,
            DataType::Categorical(_, _) | DataType::Enum(_, _) => ColumnKind::Categorical,
            DataType::String => ColumnKind::Text,
            _ => ColumnKind::Other,
        }
    }

    /// Columns scored by the variance filter
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }

    /// Columns scored by the entropy filter
    pub fn is_categorical_like(&self) -> bool {
        matches!(self, ColumnKind::Categorical | ColumnKind::Text)
    }
}

/// Capabilities a dataset must offer to be filtered.
///
/// Every method leaves `self` untouched; `drop_columns` returns a new handle.
pub trait TabularData: Sized {
    /// Column names with their type class, in dataset order.
    fn column_kinds(&self) -> Result<Vec<(String, ColumnKind)>>;

    /// Number of rows. May trigger a computation.
    fn row_count(&self) -> Result<usize>;

    /// Null count per column, in dataset order. May trigger a computation.
    fn null_counts(&self) -> Result<Vec<(String, usize)>>;

    /// Evaluate aggregation expressions in a single pass, yielding one row.
    fn aggregate(&self, exprs: Vec<Expr>) -> Result<DataFrame>;

    /// Materialize the given columns into memory.
    fn materialize(&self, columns: &[String]) -> Result<DataFrame>;

    /// A new dataset without `columns`; the order of the remaining columns is preserved.
    fn drop_columns(&self, columns: &[String]) -> Result<Self>;

    /// Names of the columns whose type class satisfies `predicate`.
    fn columns_where<F>(&self, predicate: F) -> Result<Vec<String>>
    where
        F: Fn(ColumnKind) -> bool,
    {
        Ok(self
            .column_kinds()?
            .into_iter()
            .filter(|(_, kind)| predicate(*kind))
            .map(|(name, _)| name)
            .collect())
    }
}

impl TabularData for LazyFrame {
    fn column_kinds(&self) -> Result<Vec<(String, ColumnKind)>> {
        let schema = self.clone().collect_schema()?;
        Ok(schema
            .iter()
            .map(|(name, dtype)| (name.to_string(), ColumnKind::from_dtype(dtype)))
            .collect())
    }

    fn row_count(&self) -> Result<usize> {
        let df = self
            .clone()
            .select([len().alias(ROW_COUNT_ALIAS)])
            .collect()?;
        read_count(&df, ROW_COUNT_ALIAS)
    }

    fn null_counts(&self) -> Result<Vec<(String, usize)>> {
        let names: Vec<String> = self
            .column_kinds()?
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        if names.is_empty() {
            return Ok(Vec::new());
        }

        // One pass over the data for every column
        let exprs: Vec<Expr> = names
            .iter()
            .map(|name| col(name.as_str()).null_count())
            .collect();
        let df = self.clone().select(exprs).collect()?;

        names
            .into_iter()
            .map(|name| {
                let count = read_count(&df, &name)?;
                Ok((name, count))
            })
            .collect()
    }

    fn aggregate(&self, exprs: Vec<Expr>) -> Result<DataFrame> {
        Ok(self.clone().select(exprs).collect()?)
    }

    fn materialize(&self, columns: &[String]) -> Result<DataFrame> {
        let exprs: Vec<Expr> = columns.iter().map(|name| col(name.as_str())).collect();
        Ok(self.clone().select(exprs).collect()?)
    }

    fn drop_columns(&self, columns: &[String]) -> Result<Self> {
        if columns.is_empty() {
            return Ok(self.clone());
        }

        let kept: Vec<Expr> = self
            .column_kinds()?
            .into_iter()
            .filter(|(name, _)| !columns.contains(name))
            .map(|(name, _)| col(name.as_str()))
            .collect();

        Ok(self.clone().select(kept))
    }
}

impl TabularData for DataFrame {
    fn column_kinds(&self) -> Result<Vec<(String, ColumnKind)>> {
        Ok(self
            .get_columns()
            .iter()
            .map(|column| {
                (
                    column.name().to_string(),
                    ColumnKind::from_dtype(column.dtype()),
                )
            })
            .collect())
    }

    fn row_count(&self) -> Result<usize> {
        Ok(self.height())
    }

    fn null_counts(&self) -> Result<Vec<(String, usize)>> {
        Ok(self
            .get_columns()
            .iter()
            .map(|column| (column.name().to_string(), column.null_count()))
            .collect())
    }

    fn aggregate(&self, exprs: Vec<Expr>) -> Result<DataFrame> {
        Ok(self.clone().lazy().select(exprs).collect()?)
    }

    fn materialize(&self, columns: &[String]) -> Result<DataFrame> {
        Ok(self.select(columns.iter().map(|name| name.as_str()))?)
    }

    fn drop_columns(&self, columns: &[String]) -> Result<Self> {
        Ok(self.drop_many(columns.iter().map(|name| name.as_str())))
    }
}

/// Read a single-row count aggregation as `usize`.
fn read_count(df: &DataFrame, name: &str) -> Result<usize> {
    let column = df.column(name)?.cast(&DataType::UInt64)?;
    let count = column.as_materialized_series().u64()?.get(0).unwrap_or(0);
    Ok(count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_frame() -> DataFrame {
        df! {
            "num" => [Some(1.0f64), None, Some(3.0)],
            "flag" => [Some(true), Some(false), None],
            "text" => [None::<&str>, None, Some("x")],
            "int" => [1i64, 2, 3],
        }
        .unwrap()
    }

    #[test]
    fn test_column_kind_mapping() {
        assert_eq!(ColumnKind::from_dtype(&DataType::Float64), ColumnKind::Numeric);
        assert_eq!(ColumnKind::from_dtype(&DataType::Int32), ColumnKind::Numeric);
        assert_eq!(ColumnKind::from_dtype(&DataType::Boolean), ColumnKind::Boolean);
        assert_eq!(ColumnKind::from_dtype(&DataType::String), ColumnKind::Text);
        assert_eq!(ColumnKind::from_dtype(&DataType::Date), ColumnKind::Other);
        assert_eq!(
            ColumnKind::from_dtype(&DataType::Enum(None, CategoricalOrdering::Physical)),
            ColumnKind::Categorical
        );
        assert_eq!(
            ColumnKind::from_dtype(&DataType::Categorical(None, CategoricalOrdering::Physical)),
            ColumnKind::Categorical
        );
        assert!(ColumnKind::Text.is_categorical_like());
        assert!(!ColumnKind::Boolean.is_categorical_like());
        assert!(!ColumnKind::Boolean.is_numeric());
    }

    #[test]
    fn test_lazy_and_eager_agree_on_nulls() {
        let df = mixed_frame();
        let lf = df.clone().lazy();

        assert_eq!(df.null_counts().unwrap(), lf.null_counts().unwrap());
        assert_eq!(
            df.null_counts().unwrap(),
            vec![
                ("num".to_string(), 1),
                ("flag".to_string(), 1),
                ("text".to_string(), 2),
                ("int".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_lazy_and_eager_agree_on_aggregates() {
        let df = mixed_frame();
        let exprs = vec![col("int").sum().alias("total"), col("num").max().alias("top")];

        let eager = df.aggregate(exprs.clone()).unwrap();
        let lazy = df.lazy().aggregate(exprs).unwrap();
        assert_eq!(eager.shape(), (1, 2));
        assert!(eager.equals_missing(&lazy));
    }

    #[test]
    fn test_row_count() {
        let df = mixed_frame();
        assert_eq!(df.row_count().unwrap(), 3);
        assert_eq!(df.lazy().row_count().unwrap(), 3);
    }

    #[test]
    fn test_columns_where() {
        let lf = mixed_frame().lazy();
        let numeric = lf.columns_where(|kind| kind.is_numeric()).unwrap();
        assert_eq!(numeric, vec!["num".to_string(), "int".to_string()]);
    }

    #[test]
    fn test_drop_preserves_order_and_input() {
        let df = mixed_frame();
        let lf = df.clone().lazy();
        let to_drop = vec!["flag".to_string()];

        let dropped = lf.drop_columns(&to_drop).unwrap().collect().unwrap();
        let names: Vec<String> = dropped
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["num", "text", "int"]);

        // Input handle still carries every column
        assert_eq!(lf.column_kinds().unwrap().len(), 4);

        let eager = df.drop_columns(&to_drop).unwrap();
        assert_eq!(eager.width(), 3);
        assert_eq!(df.width(), 4);
    }
}
