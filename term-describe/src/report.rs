//! Truncation and assembly of grouped reports.
//!
//! Only the first `limit` groups of a partition are handed to the
//! calculator. Groups past the limit are counted and flagged through
//! [`GroupedReport::has_more`], but their statistics are never computed.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::grouping::{group_rows, Group, GroupKey, GroupingConfig};
use crate::statistics::{ColumnCalculator, StatsReport};
use crate::table::Scope;

/// A computed group: its key, size, and full report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEntry {
    pub key: GroupKey,
    pub row_count: usize,
    pub report: StatsReport,
}

/// Reports for at most `limit` groups of one partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedReport {
    /// Grouping columns, in key order.
    pub key_columns: Vec<String>,

    /// Computed groups, in partition order.
    pub entries: Vec<GroupEntry>,

    /// Number of groups in the partition, computed or not.
    pub total_groups: usize,

    /// True when the partition had more groups than the limit.
    pub has_more: bool,
}

impl GroupedReport {
    /// Number of groups whose statistics were computed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the entry for a specific key.
    pub fn get(&self, key: &GroupKey) -> Option<&GroupEntry> {
        self.entries.iter().find(|entry| &entry.key == key)
    }

    /// Number of groups left uncomputed.
    pub fn omitted_groups(&self) -> usize {
        self.total_groups - self.entries.len()
    }
}

/// Computes reports for the first `limit` groups of `groups`.
///
/// `columns` is the column set every group report covers.
pub fn assemble<'a, C>(
    calculator: &C,
    columns: &'a [String],
    key_columns: &[String],
    groups: Vec<Group<'a>>,
    limit: usize,
) -> Result<GroupedReport>
where
    C: ColumnCalculator + ?Sized,
{
    let total_groups = groups.len();
    let entries = groups
        .into_iter()
        .take(limit)
        .map(|group| {
            let report = calculator.compute_report(&group.scope(columns))?;
            Ok(GroupEntry {
                row_count: group.len(),
                key: group.key,
                report,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        total_groups,
        computed = entries.len(),
        limit,
        truncated = total_groups > limit,
        "Assembled grouped report"
    );

    Ok(GroupedReport {
        key_columns: key_columns.to_vec(),
        entries,
        total_groups,
        has_more: total_groups > limit,
    })
}

/// Groups `scope` per `config` and assembles the bounded report.
#[instrument(skip(calculator, scope), fields(rows = scope.len(), key = %config.label()))]
pub fn grouped_report<C>(
    calculator: &C,
    scope: &Scope<'_>,
    config: &GroupingConfig,
) -> Result<GroupedReport>
where
    C: ColumnCalculator + ?Sized,
{
    let groups = group_rows(scope, &config.columns)?;
    assemble(
        calculator,
        scope.columns(),
        &config.columns,
        groups,
        config.max_groups,
    )
}
