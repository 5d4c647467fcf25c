//! Column statistics for one scope.
//!
//! [`StatisticsCalculator`] turns a `(scope, column)` pair into a
//! [`ColumnStatistic`], classifying the column within that scope first:
//!
//! - **Numeric**: `count` is the number of non-missing values, parseable or
//!   not. `mean`, `min`, `max` and the sample standard deviation use only the
//!   values that parse; unparseable stragglers are counted but excluded.
//! - **Categorical**: `count`, the number of distinct raw values, and the
//!   most frequent value. Ties go to the value seen first.
//!
//! Nothing is cached: every call scans its scope afresh.
//!
//! # Example
//!
//! ```rust
//! use term_describe::statistics::{ColumnCalculator, ColumnStatistic, StatisticsCalculator};
//! use term_describe::table::Table;
//!
//! let table = Table::from_records(
//!     vec!["spend".to_string()],
//!     vec![vec!["1"], vec!["2"], vec!["3"], vec!["4"]],
//! )
//! .unwrap();
//!
//! let stat = StatisticsCalculator::new()
//!     .compute(&table.scope(), "spend")
//!     .unwrap();
//!
//! if let ColumnStatistic::Numeric(numeric) = stat {
//!     assert_eq!(numeric.count, 4);
//!     assert_eq!(numeric.mean, 2.5);
//! }
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::classify::ColumnKind;
use crate::error::Result;
use crate::parse::parse_numeric;
use crate::table::Scope;

/// Aggregates for a column classified as numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericStat {
    /// Non-missing values, including ones that do not parse.
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n-1); 0.0 with one parsed value.
    pub std_dev: f64,
}

/// Aggregates for a column classified as categorical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoricalStat {
    pub count: usize,
    pub unique_count: usize,
    /// Most frequent value and its frequency; `None` when there are no values.
    pub most_common: Option<(String, usize)>,
}

/// Statistic computed for one column in one scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStatistic {
    Numeric(NumericStat),
    Categorical(CategoricalStat),
}

impl ColumnStatistic {
    /// The classification this statistic was computed under.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnStatistic::Numeric(_) => ColumnKind::Numeric,
            ColumnStatistic::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// Number of non-missing values in scope.
    pub fn count(&self) -> usize {
        match self {
            ColumnStatistic::Numeric(stat) => stat.count,
            ColumnStatistic::Categorical(stat) => stat.count,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericStat> {
        match self {
            ColumnStatistic::Numeric(stat) => Some(stat),
            ColumnStatistic::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalStat> {
        match self {
            ColumnStatistic::Categorical(stat) => Some(stat),
            ColumnStatistic::Numeric(_) => None,
        }
    }
}

/// Per-column statistics for one scope, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatsReport {
    columns: IndexMap<String, ColumnStatistic>,
}

impl StatsReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the statistic for `column`.
    pub fn insert(&mut self, column: impl Into<String>, stat: ColumnStatistic) {
        self.columns.insert(column.into(), stat);
    }

    /// Gets the statistic for a specific column.
    pub fn get(&self, column: &str) -> Option<&ColumnStatistic> {
        self.columns.get(column)
    }

    /// Iterates `(column, statistic)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnStatistic)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Columns classified as numeric in this scope.
    pub fn numeric_columns(&self) -> impl Iterator<Item = (&str, &NumericStat)> {
        self.iter()
            .filter_map(|(name, stat)| stat.as_numeric().map(|s| (name, s)))
    }

    /// Columns classified as categorical in this scope.
    pub fn categorical_columns(&self) -> impl Iterator<Item = (&str, &CategoricalStat)> {
        self.iter()
            .filter_map(|(name, stat)| stat.as_categorical().map(|s| (name, s)))
    }

    /// Number of columns in the report.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Computes one [`ColumnStatistic`] for a column within a scope.
///
/// Report assembly is generic over this trait so the number of scopes
/// actually computed can be observed.
pub trait ColumnCalculator {
    /// Computes the statistic for `column` over `scope`.
    fn compute(&self, scope: &Scope<'_>, column: &str) -> Result<ColumnStatistic>;

    /// Computes a full report over every column of `scope`.
    fn compute_report(&self, scope: &Scope<'_>) -> Result<StatsReport> {
        let mut report = StatsReport::new();
        for column in scope.columns() {
            report.insert(column.clone(), self.compute(scope, column)?);
        }
        debug!(
            rows = scope.len(),
            columns = report.len(),
            numeric = report.numeric_columns().count(),
            "Computed scope report"
        );
        Ok(report)
    }
}

impl<C: ColumnCalculator + ?Sized> ColumnCalculator for &C {
    fn compute(&self, scope: &Scope<'_>, column: &str) -> Result<ColumnStatistic> {
        (**self).compute(scope, column)
    }
}

/// The default from-scratch calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsCalculator;

impl StatisticsCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ColumnCalculator for StatisticsCalculator {
    fn compute(&self, scope: &Scope<'_>, column: &str) -> Result<ColumnStatistic> {
        let values = scope.non_missing(column)?;
        Ok(column_statistic(&values))
    }
}

/// Computes the statistic for a column's non-missing raw values.
pub fn column_statistic(values: &[&str]) -> ColumnStatistic {
    match ColumnKind::of_values(values.iter().copied()) {
        ColumnKind::Numeric => {
            let numeric: Vec<f64> = values.iter().filter_map(|v| parse_numeric(v)).collect();
            ColumnStatistic::Numeric(numeric_stat(values.len(), &numeric))
        }
        ColumnKind::Categorical => ColumnStatistic::Categorical(categorical_stat(values)),
    }
}

/// `numeric` must be non-empty.
///
/// NaN values are skipped by `min`/`max` unless every value is NaN, in which
/// case both are NaN. `mean` and `std_dev` propagate NaN.
fn numeric_stat(count: usize, numeric: &[f64]) -> NumericStat {
    let mean = numeric.iter().sum::<f64>() / numeric.len() as f64;
    let min = numeric.iter().copied().reduce(f64::min).unwrap_or(f64::NAN);
    let max = numeric.iter().copied().reduce(f64::max).unwrap_or(f64::NAN);
    NumericStat {
        count,
        mean,
        min,
        max,
        std_dev: sample_std_dev(numeric, mean),
    }
}

/// Sample standard deviation around a precomputed mean; 0.0 for n <= 1.
pub fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let squared_deviations: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (squared_deviations / (values.len() - 1) as f64).sqrt()
}

fn categorical_stat(values: &[&str]) -> CategoricalStat {
    let mut frequencies: IndexMap<&str, usize> = IndexMap::new();
    for &value in values {
        *frequencies.entry(value).or_insert(0) += 1;
    }

    // Strictly-greater comparison keeps the first-inserted value on ties.
    let mut most_common: Option<(&str, usize)> = None;
    for (&value, &freq) in &frequencies {
        if most_common.map_or(true, |(_, best)| freq > best) {
            most_common = Some((value, freq));
        }
    }

    CategoricalStat {
        count: values.len(),
        unique_count: frequencies.len(),
        most_common: most_common.map(|(value, freq)| (value.to_string(), freq)),
    }
}
