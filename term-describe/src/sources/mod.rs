//! Table loaders.
//!
//! A loader turns a source into a [`Table`] whose rows all share the
//! header's ordered column set. Row and column order are preserved, and a
//! record whose width differs from the header is a load error, never padded
//! or truncated.

use std::fmt::Debug;

use crate::error::Result;
use crate::table::Table;

mod csv;

pub use self::csv::{load_csv, read_csv, CsvOptions, CsvSource};

/// A source that can be loaded into an in-memory [`Table`].
///
/// # Examples
///
/// ```rust,no_run
/// use term_describe::sources::{CsvSource, DataSource};
///
/// # fn example() -> term_describe::error::Result<()> {
/// let source = CsvSource::new("data/ads.csv");
/// let table = source.load()?;
/// println!("{}: {} rows", source.description(), table.len());
/// # Ok(())
/// # }
/// ```
pub trait DataSource: Debug {
    /// Reads the whole source into memory.
    fn load(&self) -> Result<Table>;

    /// Returns a human-readable description of this source.
    fn description(&self) -> String;
}
