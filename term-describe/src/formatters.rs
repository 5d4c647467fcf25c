//! Rendering of computed reports.
//!
//! Formatters render each column's fields in a fixed order:
//! `count, mean, min, max, std_dev` for numeric columns and
//! `count, unique_values, most_common` for categorical ones. An absent
//! `most_common` is rendered explicitly (the `none` sentinel in text, `null`
//! in JSON), never omitted.
//!
//! # Examples
//!
//! ```rust
//! use term_describe::formatters::{HumanFormatter, ReportFormatter};
//! use term_describe::summary::{describe_table, SummaryConfig};
//! use term_describe::table::Table;
//!
//! let table = Table::from_records(
//!     vec!["region".to_string()],
//!     vec![vec!["CA"], vec!["NY"], vec!["CA"]],
//! )
//! .unwrap();
//! let summary = describe_table(&table, &SummaryConfig::without_grouping()).unwrap();
//!
//! let text = HumanFormatter::new().format_summary(&summary).unwrap();
//! assert!(text.contains("most_common: CA (2)"));
//! ```

use std::fmt::{self, Write};

use crate::error::Result;
use crate::report::GroupedReport;
use crate::statistics::{ColumnStatistic, StatsReport};
use crate::summary::Summary;

/// Configuration options for rendering reports.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Spaces per indentation level
    pub indent: usize,
    /// Append a per-column overview of categorical columns after the overall report
    pub include_categorical_overview: bool,
    /// Prefix the output with a generation timestamp
    pub include_timestamp: bool,
    /// Text rendered for absent values
    pub none_sentinel: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            include_categorical_overview: true,
            include_timestamp: false,
            none_sentinel: "none".to_string(),
        }
    }
}

impl FormatterConfig {
    /// Only the reports, no overview or timestamp.
    pub fn minimal() -> Self {
        Self {
            include_categorical_overview: false,
            ..Self::default()
        }
    }

    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    pub fn with_categorical_overview(mut self, include: bool) -> Self {
        self.include_categorical_overview = include;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Trait for rendering reports into an output format.
pub trait ReportFormatter {
    /// Renders one scope's report.
    fn format_stats(&self, report: &StatsReport) -> Result<String>;

    /// Renders a grouped report.
    fn format_grouped(&self, report: &GroupedReport) -> Result<String>;

    /// Renders a full summary: overall report, then each grouping.
    fn format_summary(&self, summary: &Summary) -> Result<String>;
}

/// Renders reports as indented, human-readable text.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(self.config.indent * level)
    }

    fn write_stats(&self, out: &mut String, report: &StatsReport, level: usize) -> fmt::Result {
        let pad = self.pad(level);
        let field_pad = self.pad(level + 2);
        for (column, stat) in report.iter() {
            writeln!(out, "{pad}• Column: {column} [{}]", stat.kind())?;
            match stat {
                ColumnStatistic::Numeric(s) => {
                    writeln!(out, "{field_pad}count: {}", s.count)?;
                    writeln!(out, "{field_pad}mean: {}", format_number(s.mean))?;
                    writeln!(out, "{field_pad}min: {}", format_number(s.min))?;
                    writeln!(out, "{field_pad}max: {}", format_number(s.max))?;
                    writeln!(out, "{field_pad}std_dev: {}", format_number(s.std_dev))?;
                }
                ColumnStatistic::Categorical(s) => {
                    let most_common = match &s.most_common {
                        Some((value, freq)) => format!("{value} ({freq})"),
                        None => self.config.none_sentinel.clone(),
                    };
                    writeln!(out, "{field_pad}count: {}", s.count)?;
                    writeln!(out, "{field_pad}unique_values: {}", s.unique_count)?;
                    writeln!(out, "{field_pad}most_common: {most_common}")?;
                }
            }
        }
        Ok(())
    }

    fn write_grouped(&self, out: &mut String, report: &GroupedReport) -> fmt::Result {
        writeln!(
            out,
            "=== Grouped by {} (showing {} of {} groups) ===",
            report.key_columns.join(", "),
            report.len(),
            report.total_groups
        )?;
        for entry in &report.entries {
            writeln!(
                out,
                "\n{}{} ({} rows)",
                self.pad(1),
                entry.key.describe(&report.key_columns),
                entry.row_count
            )?;
            self.write_stats(out, &entry.report, 2)?;
        }
        if report.has_more {
            writeln!(out, "{}... (truncated)", self.pad(1))?;
        }
        Ok(())
    }

    fn write_categorical_overview(&self, out: &mut String, report: &StatsReport) -> fmt::Result {
        writeln!(out, "=== Categorical Columns ===")?;
        for (column, stat) in report.categorical_columns() {
            let most_common = stat
                .most_common
                .as_ref()
                .map(|(value, _)| value.as_str())
                .unwrap_or(self.config.none_sentinel.as_str());
            writeln!(out, "\n{}Column: {column}", self.pad(1))?;
            writeln!(out, "{}Unique values: {}", self.pad(2), stat.unique_count)?;
            writeln!(out, "{}Most frequent: {most_common}", self.pad(2))?;
        }
        Ok(())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format_stats(&self, report: &StatsReport) -> Result<String> {
        let mut out = String::new();
        self.write_stats(&mut out, report, 1)?;
        Ok(out)
    }

    fn format_grouped(&self, report: &GroupedReport) -> Result<String> {
        let mut out = String::new();
        self.write_grouped(&mut out, report)?;
        Ok(out)
    }

    fn format_summary(&self, summary: &Summary) -> Result<String> {
        let mut out = String::new();
        if self.config.include_timestamp {
            writeln!(
                out,
                "Generated at {}\n",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            )?;
        }

        writeln!(
            out,
            "=== Overall dataset ({} rows, {} columns) ===",
            summary.row_count, summary.column_count
        )?;
        self.write_stats(&mut out, &summary.overall, 1)?;

        if self.config.include_categorical_overview {
            out.push('\n');
            self.write_categorical_overview(&mut out, &summary.overall)?;
        }

        for grouped in [&summary.by_primary, &summary.by_composite]
            .into_iter()
            .flatten()
        {
            out.push('\n');
            self.write_grouped(&mut out, grouped)?;
        }
        Ok(out)
    }
}

/// Renders reports as JSON.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pretty: bool,
    include_timestamp: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    /// Creates a pretty-printing JSON formatter.
    pub fn new() -> Self {
        Self {
            pretty: true,
            include_timestamp: false,
        }
    }

    /// Creates a formatter producing single-line JSON.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            include_timestamp: false,
        }
    }

    /// Wraps summaries in `{"generated_at": ..., "summary": ...}`.
    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_stats(&self, report: &StatsReport) -> Result<String> {
        self.render(report)
    }

    fn format_grouped(&self, report: &GroupedReport) -> Result<String> {
        self.render(report)
    }

    fn format_summary(&self, summary: &Summary) -> Result<String> {
        if self.include_timestamp {
            self.render(&serde_json::json!({
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "summary": summary,
            }))
        } else {
            self.render(summary)
        }
    }
}

/// Formats a float the way Python's `repr` does for ordinary values: `7.0`, `2.5`.
fn format_number(value: f64) -> String {
    format!("{value:?}")
}
