//! Order-preserving partitioning of a scope by one or more key columns.
//!
//! Groups are emitted in the order their key first appears in the scope,
//! never sorted by key value, and each group keeps its rows in their
//! original relative order. A composite key such as `[page_id, ad_id]`
//! produces one flat partition over pairs; it is not a nested grouping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

use crate::error::{DescribeError, Result};
use crate::logging::truncate_field;
use crate::table::{Row, Scope};

/// Configuration for a grouped report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Columns to group by, in key order.
    pub columns: Vec<String>,

    /// Maximum number of groups whose statistics are computed.
    pub max_groups: usize,
}

impl GroupingConfig {
    /// Creates a grouping over `columns` with the default limit of 5 groups.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            max_groups: 5,
        }
    }

    /// Sets the maximum number of groups to compute.
    pub fn with_max_groups(mut self, max: usize) -> Self {
        self.max_groups = max;
        self
    }

    /// Human-readable label, e.g. `page_id, ad_id`.
    pub fn label(&self) -> String {
        self.columns.join(", ")
    }
}

/// Ordered tuple of raw values, one per grouping column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupKey(Vec<String>);

impl GroupKey {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    /// Builds the key of `row` over `columns`.
    pub fn from_row(row: &Row, columns: &[String]) -> Result<Self> {
        columns
            .iter()
            .map(|column| row.value(column).map(str::to_string))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Renders `col = value` pairs joined by ` | `.
    pub fn describe(&self, columns: &[String]) -> String {
        columns
            .iter()
            .zip(&self.0)
            .map(|(column, value)| format!("{column} = {value}"))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => f.write_str(single),
            values => write!(f, "({})", values.join(", ")),
        }
    }
}

/// One group: its key and its rows in first-seen order.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub key: GroupKey,
    pub rows: Vec<&'a Row>,
}

impl<'a> Group<'a> {
    /// The group's rows as a scope over `columns`.
    pub fn scope(&self, columns: &'a [String]) -> Scope<'a> {
        Scope::new(columns, self.rows.clone())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Partitions `scope` by `key_columns`, in first-appearance order of each key.
#[instrument(skip(scope), fields(rows = scope.len()))]
pub fn group_rows<'a>(scope: &Scope<'a>, key_columns: &[String]) -> Result<Vec<Group<'a>>> {
    if key_columns.is_empty() {
        return Err(DescribeError::invalid_config(
            "grouping requires at least one key column",
        ));
    }

    let mut groups: IndexMap<GroupKey, Vec<&'a Row>> = IndexMap::new();
    for &row in scope.rows() {
        let key = GroupKey::from_row(row, key_columns)?;
        groups.entry(key).or_default().push(row);
    }

    debug!(
        key_columns = %truncate_field(&key_columns.join(","), 128),
        total_groups = groups.len(),
        "Partitioned scope"
    );

    Ok(groups
        .into_iter()
        .map(|(key, rows)| Group { key, rows })
        .collect())
}
