//! Command inspection.
//!
//! Turns a raw command definition into validated [`CommandMetadata`] for the
//! index and documentation surfaces. Inspection has no side effects; it does
//! not register anything.

use crate::core::error::RegistryError;
use crate::registry::metadata::{CommandMetadata, ParameterSpec};

/// Raw, caller-supplied description of a command before validation.
#[derive(Debug, Clone, Default)]
pub struct CommandDefinition {
    pub name: String,
    pub group: Option<String>,
    /// Doc text; the first non-empty line becomes the summary.
    pub doc: String,
    /// (name, type label, required) triples in declaration order.
    pub parameters: Vec<(String, String, bool)>,
}

impl CommandDefinition {
    pub fn new(name: &str) -> Self {
        CommandDefinition {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = doc.to_string();
        self
    }

    pub fn parameter(mut self, name: &str, type_label: &str, required: bool) -> Self {
        self.parameters
            .push((name.to_string(), type_label.to_string(), required));
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInspector;

impl CommandInspector {
    pub fn new() -> Self {
        CommandInspector
    }

    /// Extract validated metadata from a definition.
    ///
    /// Fails with `InvalidCommand` when the name is empty or when parameter
    /// metadata cannot be derived (an unnamed parameter).
    pub fn inspect(&self, def: &CommandDefinition) -> Result<CommandMetadata, RegistryError> {
        let name = def.name.trim();
        if name.is_empty() {
            return Err(RegistryError::InvalidCommand(
                "command name cannot be empty".to_string(),
            ));
        }

        let mut parameters = Vec::with_capacity(def.parameters.len());
        for (param_name, type_label, required) in &def.parameters {
            if param_name.trim().is_empty() {
                return Err(RegistryError::InvalidCommand(format!(
                    "command '{}' has a parameter with no name",
                    name
                )));
            }
            parameters.push(ParameterSpec {
                name: param_name.trim().to_string(),
                type_label: type_label.trim().to_string(),
                required: *required,
            });
        }

        Ok(CommandMetadata {
            name: name.to_string(),
            group: def
                .group
                .as_deref()
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(String::from),
            parameters,
            summary: first_doc_line(&def.doc),
        })
    }
}

/// First non-empty line of the doc text, trimmed; empty string when no docs.
fn first_doc_line(doc: &str) -> String {
    doc.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}
