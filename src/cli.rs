//! CLI struct definitions for the barnacle command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "barnacle",
    version = env!("CARGO_PKG_VERSION"),
    about = "In-process command registry with execution telemetry and dashboards. 🦀",
    disable_version_flag = true
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Inspect the registered command set
    Commands(CommandsCli),
    /// Execute a built-in command with execution tracking
    Run(RunCli),
    /// Render telemetry dashboards
    Stats(StatsCli),
    /// Query execution-tracking state
    Track(TrackCli),
    /// Print the registry schema as JSON
    Schema,
    /// Print the version
    Version,
}

#[derive(clap::Args, Debug)]
pub(crate) struct CommandsCli {
    #[clap(subcommand)]
    pub command: CommandsCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CommandsCommand {
    /// List all registered commands
    List {
        /// Output format: 'text' or 'json'.
        #[clap(long, default_value = "text")]
        format: String,
        /// Only show commands in this group.
        #[clap(long)]
        group: Option<String>,
    },
    /// Show the group -> command tree
    Tree {
        /// Output format: 'text' or 'json'.
        #[clap(long, default_value = "text")]
        format: String,
    },
    /// Render command documentation as markdown
    Docs,
    /// Search commands by name or summary
    Search {
        query: String,
        /// Treat the query as a regular expression.
        #[clap(long)]
        regex: bool,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct RunCli {
    /// Name of the built-in command to run.
    pub name: String,
    /// Arguments passed through to the command.
    pub args: Vec<String>,
    /// Print the command's stat detail after the run.
    #[clap(long)]
    pub show_stats: bool,
    /// Disable execution tracking for this run.
    #[clap(long)]
    pub no_track: bool,
}

#[derive(clap::Args, Debug)]
pub(crate) struct StatsCli {
    #[clap(subcommand)]
    pub command: StatsCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum StatsCommand {
    /// Flat performance table over executed commands
    Summary {
        /// Output format: 'text' or 'json'.
        #[clap(long, default_value = "text")]
        format: String,
    },
    /// Grouped tree table including commands with no data
    Groups {
        /// Output format: 'text' or 'json'.
        #[clap(long, default_value = "text")]
        format: String,
    },
    /// Stat detail for a single command
    Show { name: String },
    /// Recent execution history
    History {
        /// Limit to N most recent records.
        #[clap(long, default_value = "50")]
        limit: usize,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct TrackCli {
    #[clap(subcommand)]
    pub command: TrackCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum TrackCommand {
    /// Show whether execution tracking is enabled
    Status,
}
