//! Delimited-file source backed by the `csv` crate.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, instrument};

use super::DataSource;
use crate::error::{DescribeError, Result};
use crate::table::Table;

/// Options for configuring delimited-file reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
    /// Trim whitespace around fields and headers (default: false)
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: false,
        }
    }
}

impl CsvOptions {
    /// Tab-separated values.
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether fields are trimmed.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// A delimited file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvSource {
    /// Creates a source with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, CsvOptions::default())
    }

    /// Creates a source with custom options.
    pub fn with_options(path: impl Into<PathBuf>, options: CsvOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvSource {
    fn load(&self) -> Result<Table> {
        load_csv(&self.path, &self.options)
    }

    fn description(&self) -> String {
        format!("CSV file '{}'", self.path.display())
    }
}

/// Loads a delimited file from disk.
#[instrument(skip(path, options), fields(path = %path.as_ref().display()))]
pub fn load_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Table> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| {
        DescribeError::load_with_source(name.clone(), "cannot open file", Box::new(e))
    })?;
    read_csv(file, &name, options)
}

/// Reads delimited data from any reader.
///
/// The first record is the header. Every following record must have exactly
/// the header's width. Values are kept verbatim; an empty field is a
/// missing cell.
pub fn read_csv<R: Read>(reader: R, source_name: &str, options: &CsvOptions) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        // Headers are read by hand so width errors report consistent lines.
        .has_headers(false)
        .flexible(true)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .from_reader(reader);

    let mut records = csv_reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(|e| map_csv_error(source_name, e))?,
        None => {
            return Err(DescribeError::EmptyInput {
                source_name: source_name.to_string(),
            })
        }
    };
    let columns: Vec<String> = header.iter().map(str::to_string).collect();
    debug!(source = source_name, columns = ?columns, "Read header");

    let mut rows: Vec<StringRecord> = Vec::new();
    for record in records {
        let record = record.map_err(|e| map_csv_error(source_name, e))?;
        if record.len() != columns.len() {
            return Err(DescribeError::RaggedRow {
                line: record.position().map_or(0, |p| p.line()),
                expected: columns.len(),
                found: record.len(),
            });
        }
        rows.push(record);
    }

    let table = Table::from_records(columns, rows.iter().map(|r| r.iter()))?;
    info!(
        source = source_name,
        rows = table.len(),
        columns = table.columns().len(),
        "Loaded {} rows and {} columns",
        table.len(),
        table.columns().len()
    );
    Ok(table)
}

fn map_csv_error(source_name: &str, err: csv::Error) -> DescribeError {
    let message = match err.position() {
        Some(pos) => format!("malformed record at line {}", pos.line()),
        None => "malformed input".to_string(),
    };
    DescribeError::load_with_source(source_name, message, Box::new(err))
}
