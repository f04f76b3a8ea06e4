//! Command index: the flat name → metadata map and its derived group tree.

use crate::core::error::RegistryError;
use crate::registry::metadata::CommandMetadata;
use regex::Regex;
use std::collections::BTreeMap;

/// Bucket label for commands registered without a group.
///
/// Participates in the same sort order as user-defined group labels.
pub const UNGROUPED: &str = "ungrouped";

/// Registry of command metadata, populated once at startup.
///
/// Keys are unique command names; there is no deletion API. The group tree
/// is derived fresh on every call, so it can never go stale.
#[derive(Debug, Default)]
pub struct CommandIndex {
    commands: BTreeMap<String, CommandMetadata>,
}

impl CommandIndex {
    pub fn new() -> Self {
        CommandIndex {
            commands: BTreeMap::new(),
        }
    }

    /// Insert metadata into the flat map.
    ///
    /// Fails with `DuplicateCommand` on a name collision; the index is left
    /// unchanged by a failed attempt.
    pub fn register(&mut self, metadata: CommandMetadata) -> Result<(), RegistryError> {
        if self.commands.contains_key(&metadata.name) {
            return Err(RegistryError::DuplicateCommand(metadata.name));
        }
        self.commands.insert(metadata.name.clone(), metadata);
        Ok(())
    }

    /// Absence is a normal outcome, not an error.
    pub fn lookup(&self, name: &str) -> Option<&CommandMetadata> {
        self.commands.get(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn all(&self) -> impl Iterator<Item = &CommandMetadata> {
        self.commands.values()
    }

    /// Group → sorted command names, every registered command in exactly one
    /// bucket. Ungrouped commands land under [`UNGROUPED`].
    pub fn tree(&self) -> BTreeMap<String, Vec<String>> {
        let mut tree: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for meta in self.commands.values() {
            tree.entry(meta.group_label().to_string())
                .or_default()
                .push(meta.name.clone());
        }
        for names in tree.values_mut() {
            names.sort();
        }
        tree
    }

    pub fn commands_in_group(&self, group: &str) -> Vec<&CommandMetadata> {
        self.commands
            .values()
            .filter(|meta| meta.group_label() == group)
            .collect()
    }

    /// Case-insensitive substring search over names and summaries.
    pub fn search(&self, query: &str) -> Vec<&CommandMetadata> {
        let query = query.to_lowercase();
        self.commands
            .values()
            .filter(|meta| {
                meta.name.to_lowercase().contains(&query)
                    || meta.summary.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Regex search over names and summaries.
    pub fn search_pattern(&self, pattern: &str) -> Result<Vec<&CommandMetadata>, RegistryError> {
        let re = Regex::new(pattern)
            .map_err(|e| RegistryError::ValidationError(format!("bad search pattern: {}", e)))?;
        Ok(self
            .commands
            .values()
            .filter(|meta| re.is_match(&meta.name) || re.is_match(&meta.summary))
            .collect())
    }

    /// Markdown listing of all commands grouped by label.
    pub fn docs_markdown(&self) -> String {
        let mut md = String::from("# Commands\n\n");
        for (group, names) in self.tree() {
            if group == UNGROUPED {
                md.push_str("## Global commands\n\n");
            } else {
                md.push_str(&format!("## Group: {}\n\n", group));
            }
            for name in names {
                // tree() only yields registered names
                if let Some(meta) = self.commands.get(&name) {
                    let doc = if meta.summary.is_empty() {
                        "(no documentation)"
                    } else {
                        meta.summary.as_str()
                    };
                    md.push_str(&format!("- **{}**: {}\n", name, doc));
                }
            }
            md.push('\n');
        }
        md
    }
}
