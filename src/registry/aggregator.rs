//! Projection of raw stats into display-ready rows.
//!
//! Every row field is concrete text. Any optional value reaching this module
//! is resolved to a defined sentinel before it lands in a row or a sort key;
//! absence never leaks into an output contract or a comparison.

use crate::registry::record::{ExecutionRecord, PerformanceStats};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Marker rendered for commands that are registered but never executed.
pub const NO_DATA: &str = "no data";

/// One flat performance row; only commands with recorded executions get one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatRow {
    pub command: String,
    pub calls: String,
    pub ok: String,
    pub failed: String,
    pub avg: String,
    pub min: String,
    pub max: String,
}

/// One (group, command) row of the grouped tree view. Commands without
/// executions are included with the [`NO_DATA`] marker.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GroupRow {
    pub group: String,
    pub command: String,
    pub calls: String,
    pub ok: String,
    pub failed: String,
    pub avg: String,
}

/// One row of the recent-execution history view.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryRow {
    pub started_at: String,
    pub command: String,
    pub duration: String,
    pub outcome: String,
    pub error: String,
}

fn secs(value: f64) -> String {
    format!("{:.3}", value)
}

/// Resolve an optional text value to a concrete cell value.
fn resolve(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatsAggregator;

impl StatsAggregator {
    pub fn new() -> Self {
        StatsAggregator
    }

    /// One row per command with recorded executions, sorted by name.
    pub fn flat_rows(&self, stats: &BTreeMap<String, PerformanceStats>) -> Vec<StatRow> {
        let mut rows: Vec<StatRow> = stats
            .values()
            .map(|s| StatRow {
                command: s.command_name.clone(),
                calls: s.call_count.to_string(),
                ok: s.success_count.to_string(),
                failed: s.failure_count.to_string(),
                avg: secs(s.avg_duration_secs),
                min: secs(s.min_duration_secs),
                max: secs(s.max_duration_secs),
            })
            .collect();
        // Sort keys are concrete strings; plain byte comparison, stable.
        rows.sort_by(|a, b| a.command.cmp(&b.command));
        rows
    }

    /// One row per (group, command) pair from the index tree.
    pub fn tree_rows(
        &self,
        tree: &BTreeMap<String, Vec<String>>,
        stats: &BTreeMap<String, PerformanceStats>,
    ) -> Vec<GroupRow> {
        let mut rows = Vec::new();
        for (group, names) in tree {
            for name in names {
                let row = match stats.get(name) {
                    Some(s) => GroupRow {
                        group: group.clone(),
                        command: name.clone(),
                        calls: s.call_count.to_string(),
                        ok: s.success_count.to_string(),
                        failed: s.failure_count.to_string(),
                        avg: secs(s.avg_duration_secs),
                    },
                    None => GroupRow {
                        group: group.clone(),
                        command: name.clone(),
                        calls: NO_DATA.to_string(),
                        ok: String::new(),
                        failed: String::new(),
                        avg: String::new(),
                    },
                };
                rows.push(row);
            }
        }
        rows
    }

    /// Rows for the recent-execution view, oldest first.
    pub fn history_rows(&self, records: &[Arc<ExecutionRecord>]) -> Vec<HistoryRow> {
        records
            .iter()
            .map(|r| HistoryRow {
                started_at: r.started_at.clone(),
                command: r.command_name.clone(),
                duration: secs(r.duration_secs),
                outcome: if r.succeeded { "ok" } else { "failed" }.to_string(),
                error: resolve(r.error_summary.as_deref()),
            })
            .collect()
    }
}
