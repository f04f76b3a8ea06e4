//! Complete dashboard views over the index and the record store.
//!
//! Stateless: every view recomputes from the current index and store state,
//! so output always reflects the latest executions.

use crate::core::table::TableFormatter;
use crate::registry::aggregator::{NO_DATA, StatsAggregator};
use crate::registry::index::CommandIndex;
use crate::registry::monitor::PerformanceMonitor;

const SUMMARY_HEADERS: [&str; 7] = ["COMMAND", "CALLS", "OK", "FAILED", "AVG(s)", "MIN(s)", "MAX(s)"];
const GROUP_HEADERS: [&str; 6] = ["GROUP", "COMMAND", "CALLS", "OK", "FAILED", "AVG(s)"];
const HISTORY_HEADERS: [&str; 5] = ["STARTED", "COMMAND", "DURATION(s)", "OUTCOME", "ERROR"];

pub struct Dashboard<'a> {
    monitor: &'a PerformanceMonitor,
    index: &'a CommandIndex,
    formatter: &'a TableFormatter,
    aggregator: StatsAggregator,
}

impl<'a> Dashboard<'a> {
    pub fn new(
        monitor: &'a PerformanceMonitor,
        index: &'a CommandIndex,
        formatter: &'a TableFormatter,
    ) -> Self {
        Dashboard {
            monitor,
            index,
            formatter,
            aggregator: StatsAggregator::new(),
        }
    }

    /// Flat performance table over commands with recorded executions.
    pub fn summary(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .aggregator
            .flat_rows(&self.monitor.get_all())
            .into_iter()
            .map(|r| vec![r.command, r.calls, r.ok, r.failed, r.avg, r.min, r.max])
            .collect();
        self.formatter.format(&SUMMARY_HEADERS, &rows)
    }

    /// Grouped tree table; registered commands without executions appear
    /// with the "no data" marker.
    pub fn by_group(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .aggregator
            .tree_rows(&self.index.tree(), &self.monitor.get_all())
            .into_iter()
            .map(|r| vec![r.group, r.command, r.calls, r.ok, r.failed, r.avg])
            .collect();
        self.formatter.format(&GROUP_HEADERS, &rows)
    }

    /// Single-command stat block, or an explicit no-data line when absent.
    pub fn detail(&self, name: &str) -> String {
        match self.monitor.get(name) {
            Some(s) => format!(
                "Command: {}\nCalls: {} ({} ok, {} failed)\nAvg: {:.3}s  Min: {:.3}s  Max: {:.3}s",
                s.command_name,
                s.call_count,
                s.success_count,
                s.failure_count,
                s.avg_duration_secs,
                s.min_duration_secs,
                s.max_duration_secs,
            ),
            None => format!("{} recorded for '{}'", NO_DATA, name),
        }
    }

    /// Recent-execution table, oldest first.
    pub fn history(&self, limit: usize) -> String {
        let rows: Vec<Vec<String>> = self
            .aggregator
            .history_rows(&self.monitor.recent(limit))
            .into_iter()
            .map(|r| vec![r.started_at, r.command, r.duration, r.outcome, r.error])
            .collect();
        self.formatter.format(&HISTORY_HEADERS, &rows)
    }
}
