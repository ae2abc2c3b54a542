// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod styles;
pub mod tasks;
pub mod types;
pub mod watch;

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{resolve_config, ConfigFile};
use crate::tasks::{TaskKind, TaskSet, TaskSetBuilder};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution
/// - task construction
/// - running the requested task (or the default series)
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(args.config.as_deref().map(Path::new))?;
    let kind = args.task_kind();
    let tasks = TaskSetBuilder::new(cfg.clone()).build();

    if args.dry_run {
        print_dry_run(&cfg, &tasks, kind)?;
        return Ok(());
    }

    tasks.run(kind).await
}

/// Print the resolved configuration and the current source set.
fn print_dry_run(cfg: &ConfigFile, tasks: &TaskSet, kind: TaskKind) -> Result<()> {
    println!("stylewatch dry-run");
    println!("  task = {kind}");
    println!("  root = {}", cfg.root_dir().display());
    println!("  styles.source = {}", cfg.source().as_str());
    println!("  styles.output = {}", cfg.output_dir().display());
    println!("  styles.compatibility = {}", cfg.compatibility());
    println!(
        "  watch.triggered_while_running_behaviour = {:?}",
        cfg.watch().triggered_while_running_behaviour
    );
    println!("  watch.queue_length = {}", cfg.watch().queue_length);
    println!();

    let sources = tasks.build_styles().sources()?;
    println!("sources ({}):", sources.files.len());
    for source in &sources.files {
        println!("  - {} -> {}", source.path.display(), source.output.display());
    }
    if !sources.partials.is_empty() {
        println!("partials ({}):", sources.partials.len());
        for partial in &sources.partials {
            println!("  - {}", partial.display());
        }
    }

    debug!("dry-run complete (nothing written)");
    Ok(())
}
