//! Common test fixtures for description scenarios.
//!
//! The tables here model an ad-spend export: a page identifier, an ad
//! identifier, numeric columns with gaps and stragglers, and a categorical
//! column.

use std::cell::Cell;

use crate::error::Result;
use crate::statistics::{ColumnCalculator, ColumnStatistic, StatisticsCalculator, StatsReport};
use crate::table::{Scope, Table};

/// Column set shared by the ad fixtures.
pub const AD_COLUMNS: [&str; 5] = ["page_id", "ad_id", "spend", "impressions", "region"];

/// Eight ad rows over five pages and six `(page_id, ad_id)` pairs.
///
/// - `spend` has one missing cell and one unparseable `n/a`.
/// - `impressions` has one missing cell.
/// - `region` is categorical with one missing cell.
/// - Page `101` owns rows 0, 2 and 5 with spend 10, 20, 30.
pub fn ads_table() -> Table {
    let records = vec![
        vec!["101", "9001", "10", "1000", "CA"],
        vec!["102", "9002", "5", "500", "NY"],
        vec!["101", "9001", "20", "", "CA"],
        vec!["103", "9003", "", "700", "TX"],
        vec!["104", "9004", "40", "800", ""],
        vec!["101", "9005", "30", "1200", "NY"],
        vec!["105", "9006", "n/a", "300", "CA"],
        vec!["102", "9002", "15", "450", "NY"],
    ];
    Table::from_records(AD_COLUMNS.iter().map(|c| c.to_string()).collect(), records)
        .expect("fixture rows match the header")
}

/// A deterministic synthetic table of `rows` rows spread over `pages` pages.
pub fn synthetic_table(rows: usize, pages: usize) -> Table {
    let pages = pages.max(1);
    let regions = ["CA", "NY", "TX", "WA"];
    let records: Vec<Vec<String>> = (0..rows)
        .map(|i| {
            let spend = if i % 17 == 0 {
                String::new()
            } else {
                format!("{:.2}", (i % 97) as f64 * 1.25)
            };
            vec![
                format!("{}", 100 + i % pages),
                format!("{}", 9000 + i % (pages * 3)),
                spend,
                format!("{}", (i * 37) % 5000),
                regions[i % regions.len()].to_string(),
            ]
        })
        .collect();
    Table::from_records(AD_COLUMNS.iter().map(|c| c.to_string()).collect(), records)
        .expect("synthetic rows match the header")
}

/// Calculator that records how often it is invoked.
#[derive(Debug, Default)]
pub struct CountingCalculator {
    inner: StatisticsCalculator,
    invocations: Cell<usize>,
    scopes: Cell<usize>,
}

impl CountingCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `(scope, column)` computations performed.
    pub fn invocations(&self) -> usize {
        self.invocations.get()
    }

    /// Number of full scope reports computed.
    pub fn scopes_computed(&self) -> usize {
        self.scopes.get()
    }
}

impl ColumnCalculator for CountingCalculator {
    fn compute(&self, scope: &Scope<'_>, column: &str) -> Result<ColumnStatistic> {
        self.invocations.set(self.invocations.get() + 1);
        self.inner.compute(scope, column)
    }

    fn compute_report(&self, scope: &Scope<'_>) -> Result<StatsReport> {
        self.scopes.set(self.scopes.get() + 1);
        let mut report = StatsReport::new();
        for column in scope.columns() {
            report.insert(column.clone(), self.compute(scope, column)?);
        }
        Ok(report)
    }
}
