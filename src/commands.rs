//! Built-in command registration — centralizes the commands the binary
//! discovers at startup.
//!
//! Adding a new built-in: append one entry to `BUILTIN_COMMANDS`.

use crate::core::error::RegistryError;
use crate::core::time;
use crate::registry::inspector::CommandDefinition;
use crate::registry::manager::RegistryManager;
use sha2::{Digest, Sha256};
use std::fs;

pub(crate) struct BuiltinCommand {
    pub name: &'static str,
    pub group: Option<&'static str>,
    pub doc: &'static str,
    /// (name, type label, required) triples in declaration order.
    pub parameters: &'static [(&'static str, &'static str, bool)],
    pub run: fn(&[String]) -> Result<String, RegistryError>,
}

/// All commands the binary registers at startup.
pub(crate) const BUILTIN_COMMANDS: &[BuiltinCommand] = &[
    BuiltinCommand {
        name: "checksum",
        group: Some("hash"),
        doc: "Compute the SHA-256 digest of a file.",
        parameters: &[("path", "path", true)],
        run: run_checksum,
    },
    BuiltinCommand {
        name: "now",
        group: Some("time"),
        doc: "Print the current unix-epoch timestamp.",
        parameters: &[],
        run: run_now,
    },
    BuiltinCommand {
        name: "elapsed",
        group: Some("time"),
        doc: "Format a duration in seconds as hh:mm:ss.",
        parameters: &[("seconds", "integer", true)],
        run: run_elapsed,
    },
    BuiltinCommand {
        name: "about",
        group: None,
        doc: "Print version information.",
        parameters: &[],
        run: run_about,
    },
];

pub(crate) fn find_builtin(name: &str) -> Option<&'static BuiltinCommand> {
    BUILTIN_COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Register every built-in with the manager. Duplicate names in the table
/// are a programming error and surface as `DuplicateCommand`.
pub(crate) fn register_builtins(manager: &RegistryManager) -> Result<(), RegistryError> {
    for cmd in BUILTIN_COMMANDS {
        let mut def = CommandDefinition::new(cmd.name).doc(cmd.doc);
        if let Some(group) = cmd.group {
            def = def.group(group);
        }
        for (param, type_label, required) in cmd.parameters {
            def = def.parameter(param, type_label, *required);
        }
        manager.register_command(&def)?;
    }
    Ok(())
}

fn required_arg<'a>(args: &'a [String], idx: usize, name: &str) -> Result<&'a str, RegistryError> {
    args.get(idx)
        .map(String::as_str)
        .ok_or_else(|| RegistryError::ValidationError(format!("missing argument: {}", name)))
}

fn run_checksum(args: &[String]) -> Result<String, RegistryError> {
    let path = required_arg(args, 0, "path")?;
    let bytes = fs::read(path).map_err(RegistryError::IoError)?;
    let digest = Sha256::digest(&bytes);
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    Ok(format!("{}  {}", hex, path))
}

fn run_now(_args: &[String]) -> Result<String, RegistryError> {
    Ok(time::now_epoch_z())
}

fn run_elapsed(args: &[String]) -> Result<String, RegistryError> {
    let raw = required_arg(args, 0, "seconds")?;
    let seconds: u64 = raw
        .parse()
        .map_err(|_| RegistryError::ValidationError(format!("not a seconds count: {}", raw)))?;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    Ok(format!("{:02}:{:02}:{:02}", hours, minutes, secs))
}

fn run_about(_args: &[String]) -> Result<String, RegistryError> {
    Ok(format!("barnacle v{}", env!("CARGO_PKG_VERSION")))
}
