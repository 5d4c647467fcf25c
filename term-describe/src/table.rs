//! In-memory row data: rows, tables, and the borrowed scopes statistics run over.
//!
//! A [`Table`] is loaded once and stays read-only for the whole run. Every
//! computation works on a [`Scope`], which is either the full table or the
//! rows of one group. Scopes borrow rows; nothing here is ever mutated after
//! construction.

use indexmap::IndexMap;

use crate::error::{DescribeError, Result};

/// One record: an ordered mapping from column name to raw string value.
///
/// An empty string marks a missing cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: IndexMap<String, String>,
}

impl Row {
    /// Creates a row from `(column, value)` pairs, preserving their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the raw value of `column`, or `None` if the row lacks it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Returns the raw value of `column`, failing fast when the row lacks it.
    pub fn value(&self, column: &str) -> Result<&str> {
        self.get(column)
            .ok_or_else(|| DescribeError::column_not_found(column))
    }

    /// Returns true if `column` holds a missing (empty) cell.
    pub fn is_missing(&self, column: &str) -> Result<bool> {
        Ok(self.value(column)?.is_empty())
    }

    /// Column names in row order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An ordered sequence of rows sharing one ordered column set.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table from an already-validated column set and rows.
    ///
    /// The loader is responsible for width consistency; use
    /// [`Table::from_records`] when the records still need checking.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Builds a table from a header and raw records, rejecting ragged records.
    ///
    /// Record `i` is reported as line `i + 2`, the header being line 1.
    pub fn from_records<I, R, S>(columns: Vec<String>, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            let values: Vec<String> = record.into_iter().map(Into::into).collect();
            if values.len() != columns.len() {
                return Err(DescribeError::RaggedRow {
                    line: index as u64 + 2,
                    expected: columns.len(),
                    found: values.len(),
                });
            }
            rows.push(Row::from_pairs(columns.iter().cloned().zip(values)));
        }
        Ok(Self { columns, rows })
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Schema lookup against the table's column set.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A scope covering every row of the table.
    pub fn scope(&self) -> Scope<'_> {
        Scope::new(&self.columns, self.rows.iter().collect())
    }
}

/// The row subset a report is computed over: the full table or one group.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    columns: &'a [String],
    rows: Vec<&'a Row>,
}

impl<'a> Scope<'a> {
    /// Creates a scope over `rows`, reporting on `columns`.
    pub fn new(columns: &'a [String], rows: Vec<&'a Row>) -> Self {
        Self { columns, rows }
    }

    /// Columns every report over this scope covers, even when it has no rows.
    pub fn columns(&self) -> &'a [String] {
        self.columns
    }

    /// Rows in scope order.
    pub fn rows(&self) -> &[&'a Row] {
        &self.rows
    }

    /// Number of rows in scope.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the scope has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Non-missing raw values of `column`, in row order.
    pub fn non_missing(&self, column: &str) -> Result<Vec<&'a str>> {
        let mut values = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let value = row.value(column)?;
            if !value.is_empty() {
                values.push(value);
            }
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_row_lookup_and_missing() {
        let row = Row::from_pairs([("page_id", "1"), ("spend", "")]);
        assert_eq!(row.get("page_id"), Some("1"));
        assert!(row.is_missing("spend").unwrap());
        assert!(!row.is_missing("page_id").unwrap());
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["page_id", "spend"]);
    }

    #[test]
    fn test_row_absent_column_is_schema_error() {
        let row = Row::from_pairs([("page_id", "1")]);
        let err = row.value("ad_id").unwrap_err();
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_from_records_rejects_ragged_rows() {
        let err = Table::from_records(
            header(&["a", "b"]),
            vec![vec!["1", "2"], vec!["3"]],
        )
        .unwrap_err();
        match err {
            DescribeError::RaggedRow {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_scope_non_missing_preserves_order() {
        let table = Table::from_records(
            header(&["x"]),
            vec![vec!["b"], vec![""], vec!["a"], vec!["b"]],
        )
        .unwrap();
        let scope = table.scope();
        assert_eq!(scope.len(), 4);
        assert_eq!(scope.non_missing("x").unwrap(), vec!["b", "a", "b"]);
        assert!(table.has_column("x"));
        assert!(!table.has_column("y"));
    }
}
