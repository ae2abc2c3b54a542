// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::tasks::TaskKind;

/// Command-line arguments for `stylewatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stylewatch",
    version,
    about = "Compile and minify SCSS, and rebuild on change.",
    long_about = None
)]
pub struct CliArgs {
    /// Task to run. Without one, builds once and then watches.
    #[command(subcommand)]
    pub task: Option<TaskCommand>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Stylewatch.toml` in the current working directory if it
    /// exists, built-in defaults otherwise.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STYLEWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Resolve configuration and list the sources, but don't write anything.
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum TaskCommand {
    /// Compile and minify every source once.
    #[command(name = "buildStyles", alias = "build-styles")]
    BuildStyles,
    /// Watch the sources and rebuild on every change.
    Serve,
}

impl CliArgs {
    pub fn task_kind(&self) -> TaskKind {
        match self.task {
            Some(TaskCommand::BuildStyles) => TaskKind::BuildStyles,
            Some(TaskCommand::Serve) => TaskKind::Serve,
            None => TaskKind::Default,
        }
    }
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
