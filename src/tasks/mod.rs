// src/tasks/mod.rs

//! The tasks a user can invoke, as explicit values.
//!
//! A [`TaskSetBuilder`] turns a validated [`ConfigFile`] into a [`TaskSet`];
//! [`TaskSet::run`] executes a [`TaskKind`] as a series of [`Step`]s.

pub mod build_styles;
pub mod serve;

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::ConfigFile;
use crate::fs::{FileSystem, RealFileSystem};
use crate::styles::{Minifier, StyleCompiler, StylePipeline};

pub use build_styles::{BuildReport, BuildStylesTask};
pub use serve::ServeTask;

/// A single unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BuildStyles,
    Serve,
}

/// Named entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskKind {
    BuildStyles,
    Serve,
    /// `buildStyles`, then `serve`.
    #[default]
    Default,
}

impl TaskKind {
    pub fn name(self) -> &'static str {
        match self {
            TaskKind::BuildStyles => "buildStyles",
            TaskKind::Serve => "serve",
            TaskKind::Default => "default",
        }
    }

    /// Steps this task runs, in order.
    pub fn steps(self) -> &'static [Step] {
        match self {
            TaskKind::BuildStyles => &[Step::BuildStyles],
            TaskKind::Serve => &[Step::Serve],
            TaskKind::Default => &[Step::BuildStyles, Step::Serve],
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The constructed tasks for one configuration.
#[derive(Debug, Clone)]
pub struct TaskSet {
    build_styles: Arc<BuildStylesTask>,
    serve: ServeTask,
}

impl TaskSet {
    pub fn build_styles(&self) -> &Arc<BuildStylesTask> {
        &self.build_styles
    }

    pub fn serve(&self) -> &ServeTask {
        &self.serve
    }

    /// Run every step of `kind` in sequence, stopping at the first error.
    pub async fn run(&self, kind: TaskKind) -> Result<()> {
        info!(task = %kind, "starting task");
        for step in kind.steps() {
            match step {
                Step::BuildStyles => {
                    self.build_once().await?;
                }
                Step::Serve => self.serve.run().await?,
            }
        }
        info!(task = %kind, "task finished");
        Ok(())
    }

    /// Run `buildStyles` once on the blocking pool.
    pub async fn build_once(&self) -> Result<BuildReport> {
        let task = Arc::clone(&self.build_styles);
        tokio::task::spawn_blocking(move || task.run())
            .await
            .context("build worker panicked")?
    }
}

/// Builds a [`TaskSet`] from configuration.
#[derive(Debug)]
pub struct TaskSetBuilder {
    config: ConfigFile,
    fs: Arc<dyn FileSystem>,
}

impl TaskSetBuilder {
    pub fn new(config: ConfigFile) -> Self {
        Self {
            config,
            fs: Arc::new(RealFileSystem),
        }
    }

    /// Use a different filesystem (tests use the in-memory mock).
    pub fn filesystem(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn build(self) -> TaskSet {
        let cfg = self.config;
        let source_dir = cfg.source_dir();

        let pipeline = StylePipeline::new(
            StyleCompiler::new().with_load_path(source_dir.clone()),
            Minifier::new(cfg.compatibility()),
        );

        let build_styles = Arc::new(BuildStylesTask::new(
            self.fs,
            cfg.source().clone(),
            source_dir,
            cfg.output_dir(),
            pipeline,
        ));

        let serve = ServeTask::new(
            Arc::clone(&build_styles),
            cfg.watch().triggered_while_running_behaviour,
            cfg.watch().queue_length,
        );

        TaskSet {
            build_styles,
            serve,
        }
    }
}
