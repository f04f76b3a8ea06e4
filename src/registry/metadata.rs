//! Immutable command metadata produced at discovery time.

use serde::{Deserialize, Serialize};

/// One declared parameter of a command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub type_label: String,
    pub required: bool,
}

/// Description of a discoverable command.
///
/// Created once by the inspector and owned by the index; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandMetadata {
    pub name: String,
    pub group: Option<String>,
    pub parameters: Vec<ParameterSpec>,
    /// Short one-line summary; empty when the definition carried no docs.
    pub summary: String,
}

impl CommandMetadata {
    /// Group label with absence resolved to the ungrouped sentinel.
    pub fn group_label(&self) -> &str {
        self.group.as_deref().unwrap_or(crate::registry::index::UNGROUPED)
    }
}
