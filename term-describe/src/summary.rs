//! Top-level orchestration: the overall report plus the configured groupings.
//!
//! A run computes, in order:
//!
//! 1. the overall [`StatsReport`] over the full table;
//! 2. if the primary key column exists, a [`GroupedReport`] keyed by it;
//! 3. if the secondary key column also exists, a [`GroupedReport`] keyed by
//!    the composite `(primary, secondary)`.
//!
//! Column presence is checked once against the table's column set.
//!
//! # Example
//!
//! ```rust
//! use term_describe::summary::{SummaryConfig, TableDescriber};
//! use term_describe::table::Table;
//!
//! let table = Table::from_records(
//!     vec!["page_id".to_string(), "spend".to_string()],
//!     vec![vec!["1", "10"], vec!["2", "5"], vec!["1", "20"]],
//! )
//! .unwrap();
//!
//! let describer = TableDescriber::builder()
//!     .config(SummaryConfig::default().with_primary_limit(1))
//!     .build();
//! let summary = describer.describe(&table).unwrap();
//!
//! let by_page = summary.by_primary.unwrap();
//! assert_eq!(by_page.len(), 1);
//! assert!(by_page.has_more);
//! assert!(summary.by_composite.is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::error::{DescribeError, Result};
use crate::grouping::GroupingConfig;
use crate::report::{grouped_report, GroupedReport};
use crate::statistics::{ColumnCalculator, StatisticsCalculator, StatsReport};
use crate::table::Table;

/// Which groupings to compute and how many groups each may report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Column for the single-key grouping (default `page_id`).
    pub primary_key: Option<String>,
    /// Groups computed for the primary grouping (default 5).
    pub primary_limit: usize,
    /// Column paired with the primary key for the composite grouping
    /// (default `ad_id`).
    pub secondary_key: Option<String>,
    /// Groups computed for the composite grouping (default 3).
    pub secondary_limit: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            primary_key: Some("page_id".to_string()),
            primary_limit: 5,
            secondary_key: Some("ad_id".to_string()),
            secondary_limit: 3,
        }
    }
}

impl SummaryConfig {
    /// Only the overall report; no groupings.
    pub fn without_grouping() -> Self {
        Self {
            primary_key: None,
            secondary_key: None,
            ..Self::default()
        }
    }

    pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = Some(column.into());
        self
    }

    pub fn with_secondary_key(mut self, column: impl Into<String>) -> Self {
        self.secondary_key = Some(column.into());
        self
    }

    pub fn with_primary_limit(mut self, limit: usize) -> Self {
        self.primary_limit = limit;
        self
    }

    pub fn with_secondary_limit(mut self, limit: usize) -> Self {
        self.secondary_limit = limit;
        self
    }

    /// Parses a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Groupings applicable to `table`, resolved by one schema lookup per key.
    ///
    /// The composite grouping requires both keys to be present.
    pub fn resolve(&self, table: &Table) -> (Option<GroupingConfig>, Option<GroupingConfig>) {
        let primary = self
            .primary_key
            .as_deref()
            .filter(|column| table.has_column(column));
        let secondary = self
            .secondary_key
            .as_deref()
            .filter(|column| table.has_column(column));

        let by_primary =
            primary.map(|p| GroupingConfig::new([p]).with_max_groups(self.primary_limit));
        let by_composite = primary.zip(secondary).map(|(p, s)| {
            GroupingConfig::new([p, s]).with_max_groups(self.secondary_limit)
        });
        (by_primary, by_composite)
    }
}

/// Everything computed for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub row_count: usize,
    pub column_count: usize,
    pub overall: StatsReport,
    pub by_primary: Option<GroupedReport>,
    pub by_composite: Option<GroupedReport>,
}

/// Builder for [`TableDescriber`].
pub struct TableDescriberBuilder<C> {
    config: SummaryConfig,
    calculator: C,
}

impl<C: ColumnCalculator> TableDescriberBuilder<C> {
    /// Set the summary configuration
    pub fn config(mut self, config: SummaryConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the column calculator
    pub fn calculator<D: ColumnCalculator>(self, calculator: D) -> TableDescriberBuilder<D> {
        TableDescriberBuilder {
            config: self.config,
            calculator,
        }
    }

    /// Build the TableDescriber
    pub fn build(self) -> TableDescriber<C> {
        TableDescriber {
            config: self.config,
            calculator: self.calculator,
        }
    }
}

/// Runs the overall and grouped descriptions of a table.
#[derive(Debug, Clone)]
pub struct TableDescriber<C = StatisticsCalculator> {
    config: SummaryConfig,
    calculator: C,
}

impl TableDescriber<StatisticsCalculator> {
    /// Create a new builder using the default calculator
    pub fn builder() -> TableDescriberBuilder<StatisticsCalculator> {
        TableDescriberBuilder {
            config: SummaryConfig::default(),
            calculator: StatisticsCalculator::new(),
        }
    }

    /// Create a TableDescriber with the given configuration
    pub fn new(config: SummaryConfig) -> Self {
        Self::builder().config(config).build()
    }
}

impl Default for TableDescriber<StatisticsCalculator> {
    fn default() -> Self {
        Self::new(SummaryConfig::default())
    }
}

impl<C: ColumnCalculator> TableDescriber<C> {
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Computes the overall report and the configured grouped reports.
    #[instrument(skip(self, table), fields(rows = table.len(), columns = table.columns().len()))]
    pub fn describe(&self, table: &Table) -> Result<Summary> {
        let scope = table.scope();
        let overall = self.calculator.compute_report(&scope)?;
        debug!(columns = overall.len(), "Computed overall report");

        let (by_primary, by_composite) = self.config.resolve(table);
        if by_primary.is_none() {
            if let Some(ref key) = self.config.primary_key {
                info!(column = %key, "Primary key column absent, skipping grouped reports");
            }
        }

        let by_primary = by_primary
            .map(|grouping| grouped_report(&self.calculator, &scope, &grouping))
            .transpose()?;
        let by_composite = by_composite
            .map(|grouping| grouped_report(&self.calculator, &scope, &grouping))
            .transpose()?;

        Ok(Summary {
            row_count: table.len(),
            column_count: table.columns().len(),
            overall,
            by_primary,
            by_composite,
        })
    }
}

/// Describes `table` with the default calculator.
pub fn describe_table(table: &Table, config: &SummaryConfig) -> Result<Summary> {
    TableDescriber::new(config.clone()).describe(table)
}

/// Rejects configurations whose keys coincide.
pub fn validate_config(config: &SummaryConfig) -> Result<()> {
    match (&config.primary_key, &config.secondary_key) {
        (Some(p), Some(s)) if p == s => Err(DescribeError::invalid_config(format!(
            "primary and secondary key are both '{p}'"
        ))),
        (None, Some(_)) => Err(DescribeError::invalid_config(
            "secondary key requires a primary key",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::GroupKey;
    use crate::statistics::ColumnStatistic;
    use crate::test_fixtures::{ads_table, CountingCalculator};

    #[test]
    fn test_default_config() {
        let config = SummaryConfig::default();
        assert_eq!(config.primary_key.as_deref(), Some("page_id"));
        assert_eq!(config.primary_limit, 5);
        assert_eq!(config.secondary_key.as_deref(), Some("ad_id"));
        assert_eq!(config.secondary_limit, 3);
    }

    #[test]
    fn test_partial_json_config_keeps_defaults() {
        let config = SummaryConfig::from_json_str(r#"{"primary_limit": 2}"#).unwrap();
        assert_eq!(config.primary_limit, 2);
        assert_eq!(config.secondary_limit, 3);
        assert_eq!(config.primary_key.as_deref(), Some("page_id"));
    }

    #[test]
    fn test_json_config_disables_secondary() {
        let config = SummaryConfig::from_json_str(r#"{"secondary_key": null}"#).unwrap();
        assert!(config.secondary_key.is_none());
    }

    #[test]
    fn test_full_run_over_ads() {
        let table = ads_table();
        let summary = describe_table(&table, &SummaryConfig::default()).unwrap();

        assert_eq!(summary.row_count, 8);
        assert_eq!(summary.overall.len(), 5);

        let by_page = summary.by_primary.expect("page_id present");
        assert_eq!(by_page.key_columns, vec!["page_id".to_string()]);
        assert_eq!(by_page.total_groups, 5);
        assert_eq!(by_page.len(), 5);
        assert!(!by_page.has_more);

        let by_pair = summary.by_composite.expect("ad_id present");
        assert_eq!(by_pair.total_groups, 6);
        assert_eq!(by_pair.len(), 3);
        assert!(by_pair.has_more);
        assert_eq!(
            by_pair.entries[2].key,
            GroupKey::new(vec!["103".to_string(), "9003".to_string()])
        );
    }

    #[test]
    fn test_overall_spend_counts_stragglers() {
        let summary = describe_table(&ads_table(), &SummaryConfig::without_grouping()).unwrap();
        match summary.overall.get("spend") {
            Some(ColumnStatistic::Numeric(stat)) => {
                assert_eq!(stat.count, 7);
                assert_eq!(stat.mean, 20.0);
                assert_eq!(stat.min, 5.0);
                assert_eq!(stat.max, 40.0);
            }
            other => panic!("expected numeric spend, got {other:?}"),
        }
        assert!(summary.by_primary.is_none());
        assert!(summary.by_composite.is_none());
    }

    #[test]
    fn test_absent_primary_skips_both_groupings() {
        let config = SummaryConfig::default().with_primary_key("campaign_id");
        let summary = describe_table(&ads_table(), &config).unwrap();
        assert!(summary.by_primary.is_none());
        assert!(summary.by_composite.is_none());
    }

    #[test]
    fn test_absent_secondary_skips_composite_only() {
        let config = SummaryConfig::default().with_secondary_key("creative_id");
        let summary = describe_table(&ads_table(), &config).unwrap();
        assert!(summary.by_primary.is_some());
        assert!(summary.by_composite.is_none());
    }

    #[test]
    fn test_limits_bound_calculator_work() {
        let table = ads_table();
        let describer = TableDescriber::builder()
            .config(
                SummaryConfig::default()
                    .with_primary_limit(2)
                    .with_secondary_limit(1),
            )
            .calculator(CountingCalculator::new())
            .build();

        describer.describe(&table).unwrap();

        // overall + 2 page groups + 1 pair group
        assert_eq!(describer.calculator().scopes_computed(), 4);
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config(&SummaryConfig::default()).is_ok());
        let same = SummaryConfig::default().with_secondary_key("page_id");
        assert!(validate_config(&same).is_err());
        let orphan = SummaryConfig {
            primary_key: None,
            ..SummaryConfig::default()
        };
        assert!(validate_config(&orphan).is_err());
    }
}
