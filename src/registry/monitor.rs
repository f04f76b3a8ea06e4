//! Read-only stats queries, decoupling views from store internals.

use crate::registry::record::{ExecutionRecord, PerformanceStats};
use crate::registry::store::RecordStore;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Query façade over the record store. Carries no state of its own.
pub struct PerformanceMonitor {
    store: Arc<dyn RecordStore>,
}

impl PerformanceMonitor {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        PerformanceMonitor { store }
    }

    pub fn get(&self, name: &str) -> Option<PerformanceStats> {
        self.store.stats_for(name)
    }

    pub fn get_all(&self) -> BTreeMap<String, PerformanceStats> {
        self.store.all_stats()
    }

    pub fn recent(&self, limit: usize) -> Vec<Arc<ExecutionRecord>> {
        self.store.recent(limit)
    }
}
