//! Execution record storage.
//!
//! The store is the only stateful component on the recording path. All
//! mutation goes through a single in-process lock so concurrent invocation
//! sites can never interleave partially-written records.

use crate::registry::record::{ExecutionRecord, PerformanceStats};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Storage seam for execution records.
///
/// Any implementation with these semantics is substitutable; the tracker and
/// monitor only ever hold `Arc<dyn RecordStore>`.
pub trait RecordStore: Send + Sync {
    /// Append a record to its command's history. Nothing is ever dropped or
    /// overwritten for the process lifetime.
    fn append(&self, record: ExecutionRecord);

    /// Full history for one command, oldest first.
    fn records_for(&self, name: &str) -> Vec<Arc<ExecutionRecord>>;

    /// Most recent records across all commands, oldest first.
    fn recent(&self, limit: usize) -> Vec<Arc<ExecutionRecord>>;

    /// Stats for one command; `None` when no records exist for it.
    fn stats_for(&self, name: &str) -> Option<PerformanceStats>;

    /// Stats for every command with at least one record. Commands with zero
    /// executions are omitted, never zero-filled.
    fn all_stats(&self) -> BTreeMap<String, PerformanceStats>;

    /// Total number of records held.
    fn record_count(&self) -> usize;
}

#[derive(Debug, Default)]
struct StoreInner {
    by_command: FxHashMap<String, Vec<Arc<ExecutionRecord>>>,
    timeline: Vec<Arc<ExecutionRecord>>,
}

/// Process-memory record store; state is lost on exit by design.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

impl RecordStore for InMemoryStore {
    fn append(&self, record: ExecutionRecord) {
        let record = Arc::new(record);
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner
            .by_command
            .entry(record.command_name.clone())
            .or_default()
            .push(Arc::clone(&record));
        inner.timeline.push(record);
    }

    fn records_for(&self, name: &str) -> Vec<Arc<ExecutionRecord>> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.by_command.get(name).cloned().unwrap_or_default()
    }

    fn recent(&self, limit: usize) -> Vec<Arc<ExecutionRecord>> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let start = inner.timeline.len().saturating_sub(limit);
        inner.timeline[start..].to_vec()
    }

    fn stats_for(&self, name: &str) -> Option<PerformanceStats> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let records = inner.by_command.get(name)?;
        PerformanceStats::from_records(name, records)
    }

    fn all_stats(&self) -> BTreeMap<String, PerformanceStats> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner
            .by_command
            .iter()
            .filter_map(|(name, records)| {
                PerformanceStats::from_records(name, records).map(|s| (name.clone(), s))
            })
            .collect()
    }

    fn record_count(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.timeline.len()
    }
}
