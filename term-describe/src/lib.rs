//! # term-describe - Descriptive statistics for tabular row data
//!
//! term-describe loads a delimited file into an ordered table of string
//! cells and reports per-column statistics for the whole table and for
//! bounded groupings of it.
//!
//! ## Overview
//!
//! Each column is classified within the scope being described: a column is
//! **Numeric** when at least one of its non-missing values parses as a
//! number, and **Categorical** otherwise. A cell is missing only when it is
//! the empty string. Because classification is scope-local, the same column
//! can be numeric in one group and categorical in another.
//!
//! - Numeric columns report `count`, `mean`, `min`, `max` and the sample
//!   standard deviation.
//! - Categorical columns report `count`, the number of distinct values and
//!   the most frequent value.
//!
//! ## Quick Start
//!
//! ```rust
//! use term_describe::prelude::*;
//!
//! let data = "page_id,ad_id,spend\n1,10,5.0\n2,20,7.5\n1,11,\n";
//! let table = read_csv(data.as_bytes(), "inline", &CsvOptions::default()).unwrap();
//!
//! let summary = describe_table(&table, &SummaryConfig::default()).unwrap();
//! assert_eq!(summary.row_count, 3);
//!
//! let by_page = summary.by_primary.as_ref().unwrap();
//! assert_eq!(by_page.total_groups, 2);
//!
//! let text = HumanFormatter::new().format_summary(&summary).unwrap();
//! assert!(text.contains("=== Grouped by page_id, ad_id"));
//! ```
//!
//! ## Groupings
//!
//! A run computes up to two grouped reports: one keyed by a primary column
//! (`page_id` by default) and one keyed by the composite of the primary and a
//! secondary column (`ad_id` by default). Groups appear in first-seen order
//! and only the first few groups are computed; see [`report`] for the
//! truncation contract.
//!
//! ## Architecture
//!
//! - **`table`**: `Table`, `Row` and borrowed `Scope` views
//! - **`sources`**: delimited-file loading
//! - **`classify`** / **`parse`**: numeric detection and column kinds
//! - **`statistics`**: the `ColumnCalculator` seam and per-scope reports
//! - **`grouping`** / **`report`**: partitioning and bounded grouped reports
//! - **`summary`**: orchestration of the overall and grouped reports
//! - **`formatters`**: human-readable and JSON rendering
//! - **`logging`**: `tracing` subscriber setup

pub mod classify;
pub mod error;
pub mod formatters;
pub mod grouping;
pub mod logging;
pub mod parse;
pub mod prelude;
pub mod report;
pub mod sources;
pub mod statistics;
pub mod summary;
pub mod table;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_fixtures;
