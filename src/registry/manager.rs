//! Top-level façade wiring the registry subsystem together.
//!
//! External code holds one `RegistryManager` (usually behind an `Arc`) and
//! never touches the components directly. The manager performs no business
//! logic of its own; everything is delegation.

use crate::core::config::BarnacleConfig;
use crate::core::error::RegistryError;
use crate::core::table::TableFormatter;
use crate::registry::dashboard::Dashboard;
use crate::registry::index::CommandIndex;
use crate::registry::inspector::{CommandDefinition, CommandInspector};
use crate::registry::metadata::CommandMetadata;
use crate::registry::monitor::PerformanceMonitor;
use crate::registry::record::{ExecutionRecord, PerformanceStats};
use crate::registry::store::{InMemoryStore, RecordStore};
use crate::registry::tracker::ExecutionTracker;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};

pub struct RegistryManager {
    index: RwLock<CommandIndex>,
    inspector: CommandInspector,
    tracker: ExecutionTracker,
    monitor: PerformanceMonitor,
    formatter: TableFormatter,
}

impl RegistryManager {
    pub fn new(config: &BarnacleConfig) -> Self {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
        RegistryManager {
            index: RwLock::new(CommandIndex::new()),
            inspector: CommandInspector::new(),
            tracker: ExecutionTracker::with_enabled(Arc::clone(&store), config.tracking.enabled),
            monitor: PerformanceMonitor::new(store),
            formatter: TableFormatter::new(config.table.clone()),
        }
    }

    fn index_read(&self) -> RwLockReadGuard<'_, CommandIndex> {
        self.index.read().unwrap_or_else(|e| e.into_inner())
    }

    // ----- discovery -----

    /// Inspect and register one command definition.
    pub fn register_command(&self, definition: &CommandDefinition) -> Result<(), RegistryError> {
        let metadata = self.inspector.inspect(definition)?;
        let mut index = self.index.write().unwrap_or_else(|e| e.into_inner());
        index.register(metadata)
    }

    pub fn lookup_command(&self, name: &str) -> Option<CommandMetadata> {
        self.index_read().lookup(name).cloned()
    }

    pub fn command_names(&self) -> Vec<String> {
        self.index_read().names()
    }

    pub fn command_count(&self) -> usize {
        self.index_read().len()
    }

    pub fn command_tree(&self) -> BTreeMap<String, Vec<String>> {
        self.index_read().tree()
    }

    pub fn search_commands(&self, query: &str) -> Vec<CommandMetadata> {
        self.index_read().search(query).into_iter().cloned().collect()
    }

    pub fn search_commands_pattern(
        &self,
        pattern: &str,
    ) -> Result<Vec<CommandMetadata>, RegistryError> {
        Ok(self
            .index_read()
            .search_pattern(pattern)?
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn command_docs_markdown(&self) -> String {
        self.index_read().docs_markdown()
    }

    // ----- tracking -----

    pub fn enable_tracking(&self) {
        self.tracker.enable();
    }

    pub fn disable_tracking(&self) {
        self.tracker.disable();
    }

    pub fn is_tracking_enabled(&self) -> bool {
        self.tracker.is_tracking_enabled()
    }

    /// Record one completed invocation; silent no-op while tracking is off.
    pub fn record_execution(
        &self,
        name: &str,
        duration_secs: f64,
        succeeded: bool,
        error_summary: Option<String>,
    ) {
        self.tracker.record(name, duration_secs, succeeded, error_summary);
    }

    // ----- queries -----

    pub fn stats_for(&self, name: &str) -> Option<PerformanceStats> {
        self.monitor.get(name)
    }

    pub fn all_stats(&self) -> BTreeMap<String, PerformanceStats> {
        self.monitor.get_all()
    }

    pub fn execution_history(&self, limit: usize) -> Vec<Arc<ExecutionRecord>> {
        self.monitor.recent(limit)
    }

    // ----- dashboard views -----

    pub fn dashboard_summary(&self) -> String {
        let index = self.index_read();
        Dashboard::new(&self.monitor, &index, &self.formatter).summary()
    }

    pub fn dashboard_by_group(&self) -> String {
        let index = self.index_read();
        Dashboard::new(&self.monitor, &index, &self.formatter).by_group()
    }

    pub fn dashboard_detail(&self, name: &str) -> String {
        let index = self.index_read();
        Dashboard::new(&self.monitor, &index, &self.formatter).detail(name)
    }

    pub fn dashboard_history(&self, limit: usize) -> String {
        let index = self.index_read();
        Dashboard::new(&self.monitor, &index, &self.formatter).history(limit)
    }
}

impl Default for RegistryManager {
    fn default() -> Self {
        RegistryManager::new(&BarnacleConfig::default())
    }
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "registry",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "In-process command registry with execution telemetry",
        "operations": [
            { "name": "register_command", "description": "Inspect and index one command definition" },
            { "name": "record_execution", "description": "Record one completed invocation (no-op when tracking is disabled)" },
            { "name": "enable_tracking", "description": "Turn execution tracking on" },
            { "name": "disable_tracking", "description": "Turn execution tracking off" },
            { "name": "dashboard_summary", "description": "Flat performance table" },
            { "name": "dashboard_by_group", "description": "Grouped tree table" },
            { "name": "dashboard_detail", "description": "Single-command stats or explicit no-data" },
            { "name": "dashboard_history", "description": "Recent execution table" }
        ],
        "storage": ["process memory only; state is lost on exit"]
    })
}
