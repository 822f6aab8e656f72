//! Per-stage summary tables, indexed by column name

use serde::Serialize;

/// A summary row produced by one filter stage.
pub trait SummaryRow {
    fn column(&self) -> &str;

    /// Whether the stage dropped this column
    fn filtered(&self) -> bool;
}

/// Ordered summary of one stage: one row per inspected column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StageSummary<R> {
    rows: Vec<R>,
}

impl<R: SummaryRow> StageSummary<R> {
    pub(crate) fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for `column`, if this stage inspected it.
    pub fn get(&self, column: &str) -> Option<&R> {
        self.rows.iter().find(|row| row.column() == column)
    }

    /// Column names in summary order.
    pub fn columns(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.column().to_string()).collect()
    }

    /// Columns this stage dropped, in summary order.
    pub fn dropped_columns(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| row.filtered())
            .map(|row| row.column().to_string())
            .collect()
    }
}

impl<'a, R> IntoIterator for &'a StageSummary<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Serialize a filter decision as 0/1.
pub(crate) fn flag_as_int<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}
