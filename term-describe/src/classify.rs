//! Scope-local column classification.
//!
//! A column is [`ColumnKind::Numeric`] for a scope when at least one of its
//! non-missing values in that scope parses as a number, and
//! [`ColumnKind::Categorical`] otherwise, including when the scope is empty.
//! The decision is never shared between scopes: a column may be numeric over
//! the whole table and categorical inside one of its groups.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::parse::is_numeric;
use crate::table::Scope;

/// How a column is summarized within one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    /// At least one non-missing value parses as a number.
    Numeric,
    /// No non-missing value parses as a number.
    Categorical,
}

impl ColumnKind {
    /// Classifies a set of non-missing raw values.
    pub fn of_values<'v, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'v str>,
    {
        if values.into_iter().any(is_numeric) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        }
    }

    /// Get the kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "Numeric",
            ColumnKind::Categorical => "Categorical",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies `column` within `scope`.
pub fn classify(scope: &Scope<'_>, column: &str) -> Result<ColumnKind> {
    let values = scope.non_missing(column)?;
    Ok(ColumnKind::of_values(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    fn table(values: &[&str]) -> Table {
        Table::from_records(
            vec!["col".to_string()],
            values.iter().map(|v| vec![*v]),
        )
        .unwrap()
    }

    #[test]
    fn test_single_numeric_value_makes_column_numeric() {
        let t = table(&["a", "7", "b"]);
        assert_eq!(classify(&t.scope(), "col").unwrap(), ColumnKind::Numeric);
    }

    #[test]
    fn test_grouped_digits_are_numeric() {
        let t = table(&["1_000", "2_000"]);
        assert_eq!(classify(&t.scope(), "col").unwrap(), ColumnKind::Numeric);
    }

    #[test]
    fn test_text_only_is_categorical() {
        let t = table(&["a", "", "b"]);
        assert_eq!(
            classify(&t.scope(), "col").unwrap(),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn test_all_missing_is_categorical() {
        let t = table(&["", ""]);
        assert_eq!(
            classify(&t.scope(), "col").unwrap(),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn test_empty_scope_is_categorical() {
        let t = table(&[]);
        assert_eq!(
            classify(&t.scope(), "col").unwrap(),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn test_classification_is_scope_local() {
        let t = table(&["x", "1", "y"]);
        let rows = t.rows();
        let text_only = Scope::new(t.columns(), vec![&rows[0], &rows[2]]);
        assert_eq!(classify(&t.scope(), "col").unwrap(), ColumnKind::Numeric);
        assert_eq!(
            classify(&text_only, "col").unwrap(),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn test_unknown_column_fails_fast() {
        let t = table(&["1"]);
        assert!(classify(&t.scope(), "other").unwrap_err().is_schema_error());
    }
}
