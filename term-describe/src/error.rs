//! Error types for the term-describe library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! `thiserror`-derived [`DescribeError`]. Errors fall into two families:
//!
//! - **Load errors** abort a run before any statistic is computed
//!   (unreadable source, missing header, ragged record).
//! - **Schema errors** signal that a row lacks a column the table's column
//!   set promised. They indicate a broken upstream invariant and fail fast.

use thiserror::Error;

/// The main error type for term-describe.
#[derive(Error, Debug)]
pub enum DescribeError {
    /// A source could not be read or parsed.
    #[error("Failed to load '{source_name}': {message}")]
    Load {
        /// Path or label of the source being loaded
        source_name: String,
        /// Detailed error message
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A record's width differs from the header width.
    #[error("Ragged row at line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        /// 1-based line of the offending record
        line: u64,
        /// Number of columns in the header
        expected: usize,
        /// Number of fields in the record
        found: usize,
    },

    /// The source contained no header record.
    #[error("Source '{source_name}' is empty: no header record")]
    EmptyInput { source_name: String },

    /// A requested column is absent from a row or from the table.
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Invalid parameters supplied by the caller.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error from I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error writing rendered output into a buffer.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// A type alias for `Result<T, DescribeError>`.
pub type Result<T> = std::result::Result<T, DescribeError>;

impl DescribeError {
    /// Creates a load error without an underlying cause.
    pub fn load(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Load {
            source_name: source_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a load error wrapping the underlying cause.
    pub fn load_with_source(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Load {
            source_name: source_name.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Creates a schema error for a missing column.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Returns true for errors raised while loading a source.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Load { .. } | Self::RaggedRow { .. } | Self::EmptyInput { .. } | Self::Io(_)
        )
    }

    /// Returns true when an upstream column-set invariant was violated.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::ColumnNotFound { .. })
    }
}

impl From<serde_json::Error> for DescribeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_load_error_display() {
        let err = DescribeError::load("ads.csv", "unreadable");
        assert_eq!(err.to_string(), "Failed to load 'ads.csv': unreadable");
        assert!(err.is_load_error());
        assert!(!err.is_schema_error());
    }

    #[test]
    fn test_load_error_keeps_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = DescribeError::load_with_source("ads.csv", "open failed", Box::new(cause));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_ragged_row_display() {
        let err = DescribeError::RaggedRow {
            line: 4,
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "Ragged row at line 4: expected 3 fields, found 2"
        );
        assert!(err.is_load_error());
    }

    #[test]
    fn test_column_not_found() {
        let err = DescribeError::column_not_found("page_id");
        assert_eq!(err.to_string(), "Column 'page_id' not found in dataset");
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_fmt_error_conversion() {
        fn render() -> Result<()> {
            Err(std::fmt::Error)?;
            Ok(())
        }
        let err = render().unwrap_err();
        assert!(matches!(err, DescribeError::Format(_)));
        assert!(!err.is_load_error());
    }

    #[test]
    fn test_serde_json_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: DescribeError = parse.unwrap_err().into();
        assert!(matches!(err, DescribeError::Serialization(_)));
    }
}
