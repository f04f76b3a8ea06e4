//! Execution records and the stats derived from them.

use crate::core::time;
use serde::{Deserialize, Serialize};

/// One completed invocation of a command. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutionRecord {
    pub record_id: String,
    pub command_name: String,
    /// Epoch-seconds timestamp with `Z` suffix, stamped at record time.
    pub started_at: String,
    pub duration_secs: f64,
    pub succeeded: bool,
    /// Present iff `succeeded` is false.
    pub error_summary: Option<String>,
}

impl ExecutionRecord {
    /// Build a record stamped with the current time.
    ///
    /// Negative durations are clamped to zero and the error summary is
    /// dropped for successful executions, so the iff-invariant holds by
    /// construction.
    pub fn new(
        command_name: &str,
        duration_secs: f64,
        succeeded: bool,
        error_summary: Option<String>,
    ) -> Self {
        ExecutionRecord {
            record_id: time::new_record_id(),
            command_name: command_name.to_string(),
            started_at: time::now_epoch_z(),
            duration_secs: duration_secs.max(0.0),
            succeeded,
            error_summary: if succeeded { None } else { error_summary },
        }
    }
}

/// Aggregate statistics for one command, derived on demand.
///
/// Only ever computed from at least one record, so the duration fields are
/// always real measurements. "No records" is `None` at the query site, never
/// a zero-filled instance of this struct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceStats {
    pub command_name: String,
    pub call_count: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub avg_duration_secs: f64,
    pub min_duration_secs: f64,
    pub max_duration_secs: f64,
}

impl PerformanceStats {
    /// Compute stats over a non-empty record set; `None` when empty.
    pub fn from_records(command_name: &str, records: &[impl AsRef<ExecutionRecord>]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let mut success_count = 0u64;
        let mut total = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in records {
            let record = record.as_ref();
            if record.succeeded {
                success_count += 1;
            }
            total += record.duration_secs;
            min = min.min(record.duration_secs);
            max = max.max(record.duration_secs);
        }
        let call_count = records.len() as u64;
        Some(PerformanceStats {
            command_name: command_name.to_string(),
            call_count,
            success_count,
            failure_count: call_count - success_count,
            avg_duration_secs: total / call_count as f64,
            min_duration_secs: min,
            max_duration_secs: max,
        })
    }
}
