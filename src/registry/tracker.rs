//! Execution tracking toggle and recording entry point.

use crate::registry::record::ExecutionRecord;
use crate::registry::store::RecordStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Toggleable recorder sitting between invocation sites and the store.
///
/// Two states, enabled and disabled, starting enabled. Transitions are
/// unconditional and idempotent. Recording never fails: when disabled it is
/// a silent no-op, so observability can never crash the observed program.
pub struct ExecutionTracker {
    enabled: AtomicBool,
    store: Arc<dyn RecordStore>,
}

impl ExecutionTracker {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        ExecutionTracker {
            enabled: AtomicBool::new(true),
            store,
        }
    }

    pub fn with_enabled(store: Arc<dyn RecordStore>, enabled: bool) -> Self {
        ExecutionTracker {
            enabled: AtomicBool::new(enabled),
            store,
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Descriptive alias for [`is_enabled`](Self::is_enabled); both names are
    /// kept because consumers have misread terser spellings of this query.
    pub fn is_tracking_enabled(&self) -> bool {
        self.is_enabled()
    }

    /// Record one completed invocation, stamped with the current time.
    pub fn record(
        &self,
        command_name: &str,
        duration_secs: f64,
        succeeded: bool,
        error_summary: Option<String>,
    ) {
        if !self.is_enabled() {
            return;
        }
        self.store.append(ExecutionRecord::new(
            command_name,
            duration_secs,
            succeeded,
            error_summary,
        ));
    }
}
