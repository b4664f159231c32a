// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `watchdiff`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchdiff",
    version,
    about = "Watch a Kubernetes resource and print a diff for every update.",
    long_about = None
)]
pub struct CliArgs {
    /// Resource type to watch (e.g. `pod`, `deployment`).
    #[arg(value_name = "RESOURCE_TYPE")]
    pub resource_type: String,

    /// Name of the resource.
    #[arg(value_name = "RESOURCE_NAME")]
    pub resource_name: String,

    /// Diff against the first snapshot instead of the previous one.
    #[arg(short = 'f', long)]
    pub diff_with_first: bool,

    /// Disable colored output.
    ///
    /// Color is also disabled automatically when stdout is not a terminal or
    /// `TERM` is unset/`dumb`.
    #[arg(long)]
    pub no_color: bool,

    /// Skip the cleanup step and diff raw objects, server-managed fields
    /// (`status`, `metadata.managedFields`, ...) included.
    #[arg(long)]
    pub raw: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHDIFF_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
