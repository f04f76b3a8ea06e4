//! Barnacle: an in-process command registry with execution telemetry.
//!
//! **Barnacle attaches to a running program, discovers its invokable
//! commands, and keeps score.**
//!
//! Commands are registered once at startup (inspector → index). Each
//! invocation, if tracking is enabled, produces an execution record
//! (tracker → store). On demand, the monitor and aggregator pull store and
//! index state to build dashboard views.
//!
//! # Core Principles
//!
//! - **In-process**: all state lives in memory and dies with the process
//! - **Never in the way**: recording is a silent no-op when tracking is off;
//!   telemetry can never crash the program it observes
//! - **Absence is explicit**: a command with no executions is "no data",
//!   never a zero-filled statistic
//!
//! # Architecture
//!
//! - [`registry`]: discovery (inspector, index), tracking (tracker, store),
//!   querying (monitor), presentation (aggregator, dashboard), and the
//!   [`registry::manager::RegistryManager`] façade — the only type external
//!   callers need to hold
//! - [`core`]: shared primitives (errors, timestamps, config, tables)
//!
//! # Examples
//!
//! ```bash
//! # What commands exist?
//! barnacle commands tree
//!
//! # Run one with timing
//! barnacle run elapsed 3725 --show-stats
//!
//! # Render the dashboards
//! barnacle stats summary
//! barnacle stats groups
//! ```

pub mod core;
pub mod registry;

mod cli;
mod commands;

pub use crate::core::config::BarnacleConfig;
pub use crate::core::error::RegistryError;
pub use crate::registry::inspector::CommandDefinition;
pub use crate::registry::manager::RegistryManager;

use crate::cli::{Cli, Command, CommandsCommand, StatsCommand, TrackCommand};
use crate::core::table::TableFormatter;
use clap::Parser;
use colored::Colorize;
use std::time::Instant;

pub fn run() -> Result<(), RegistryError> {
    let cli = Cli::parse();
    let current_dir = std::env::current_dir()?;
    let config = BarnacleConfig::load_from_dir(&current_dir)?;

    let manager = RegistryManager::new(&config);
    commands::register_builtins(&manager)?;

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Schema => {
            println!(
                "{}",
                serde_json::to_string_pretty(&registry::manager::schema()).unwrap()
            );
            Ok(())
        }
        Command::Commands(group) => run_commands(&manager, &config, group.command),
        Command::Run(run_cli) => run_builtin(&manager, run_cli),
        Command::Stats(stats) => run_stats(&manager, stats.command),
        Command::Track(track) => match track.command {
            TrackCommand::Status => {
                let state = if manager.is_tracking_enabled() {
                    "enabled".bright_green()
                } else {
                    "disabled".bright_red()
                };
                println!("Execution tracking: {}", state);
                Ok(())
            }
        },
    }
}

fn run_commands(
    manager: &RegistryManager,
    config: &BarnacleConfig,
    command: CommandsCommand,
) -> Result<(), RegistryError> {
    match command {
        CommandsCommand::List { format, group } => {
            let mut commands: Vec<_> = manager
                .command_names()
                .into_iter()
                .filter_map(|name| manager.lookup_command(&name))
                .collect();
            if let Some(group) = &group {
                commands.retain(|meta| meta.group_label() == group.as_str());
            }
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&commands).unwrap());
            } else {
                let formatter = TableFormatter::new(config.table.clone());
                let rows: Vec<Vec<String>> = commands
                    .iter()
                    .map(|meta| {
                        let params: Vec<String> = meta
                            .parameters
                            .iter()
                            .map(|p| {
                                if p.required {
                                    format!("{}:{}", p.name, p.type_label)
                                } else {
                                    format!("[{}:{}]", p.name, p.type_label)
                                }
                            })
                            .collect();
                        vec![
                            meta.name.clone(),
                            meta.group_label().to_string(),
                            params.join(" "),
                            meta.summary.clone(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    formatter.format(&["NAME", "GROUP", "PARAMETERS", "SUMMARY"], &rows)
                );
            }
        }
        CommandsCommand::Tree { format } => {
            let tree = manager.command_tree();
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&tree).unwrap());
            } else {
                for (group, names) in &tree {
                    println!("{}", group.bold());
                    for name in names {
                        println!("  • {}", name);
                    }
                }
            }
        }
        CommandsCommand::Docs => {
            println!("{}", manager.command_docs_markdown());
        }
        CommandsCommand::Search { query, regex } => {
            let matches = if regex {
                manager.search_commands_pattern(&query)?
            } else {
                manager.search_commands(&query)
            };
            if matches.is_empty() {
                println!("No commands match '{}'", query);
            } else {
                for meta in matches {
                    println!("{}  {}", meta.name.bold(), meta.summary);
                }
            }
        }
    }
    Ok(())
}

fn run_builtin(manager: &RegistryManager, cli: cli::RunCli) -> Result<(), RegistryError> {
    let builtin = commands::find_builtin(&cli.name)
        .ok_or_else(|| RegistryError::NotFound(format!("no such command: {}", cli.name)))?;

    if cli.no_track {
        manager.disable_tracking();
    }

    let start = Instant::now();
    let outcome = (builtin.run)(&cli.args);
    let duration = start.elapsed().as_secs_f64();

    // The execution is reported regardless of tracking state; the manager
    // no-ops when tracking is disabled.
    match &outcome {
        Ok(_) => manager.record_execution(&cli.name, duration, true, None),
        Err(e) => manager.record_execution(&cli.name, duration, false, Some(e.to_string())),
    }

    match outcome {
        Ok(output) => {
            println!("{}", output);
            if cli.show_stats {
                println!();
                println!("{}", manager.dashboard_detail(&cli.name));
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn run_stats(manager: &RegistryManager, command: StatsCommand) -> Result<(), RegistryError> {
    match command {
        StatsCommand::Summary { format } => {
            if format == "json" {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&manager.all_stats()).unwrap()
                );
            } else {
                println!("{}", manager.dashboard_summary());
            }
        }
        StatsCommand::Groups { format } => {
            if format == "json" {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&manager.command_tree()).unwrap()
                );
            } else {
                println!("{}", manager.dashboard_by_group());
            }
        }
        StatsCommand::Show { name } => {
            println!("{}", manager.dashboard_detail(&name));
        }
        StatsCommand::History { limit } => {
            println!("{}", manager.dashboard_history(limit));
        }
    }
    Ok(())
}
