//! Prelude for commonly used types and traits in term-describe.

pub use crate::classify::ColumnKind;
pub use crate::error::{DescribeError, Result};
pub use crate::formatters::{FormatterConfig, HumanFormatter, JsonFormatter, ReportFormatter};
pub use crate::grouping::{GroupKey, GroupingConfig};
pub use crate::logging::setup::LoggingConfig;
pub use crate::report::{GroupEntry, GroupedReport};
pub use crate::sources::{load_csv, read_csv, CsvOptions, CsvSource, DataSource};
pub use crate::statistics::{
    CategoricalStat, ColumnCalculator, ColumnStatistic, NumericStat, StatisticsCalculator,
    StatsReport,
};
pub use crate::summary::{describe_table, Summary, SummaryConfig, TableDescriber};
pub use crate::table::{Row, Scope, Table};
