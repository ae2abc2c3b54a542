// src/tasks/build_styles.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::fs::FileSystem;
use crate::styles::{CompileError, SourcePattern, SourceSet, StylePipeline};

/// Outcome of one `buildStyles` run.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Output files written, in source order.
    pub written: Vec<PathBuf>,
    /// Sources that failed to compile or minify; nothing was written for them.
    pub failures: Vec<CompileError>,
    /// Partials matched by the pattern (not compiled on their own).
    pub partials: Vec<PathBuf>,
}

impl BuildReport {
    /// True when every selected source produced output.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compile every source selected by the pattern, minify, and write the
/// results under the output directory.
///
/// Compile failures are per file: they are logged, recorded in the report
/// and the run moves on. Filesystem failures end the run with an error.
#[derive(Debug, Clone)]
pub struct BuildStylesTask {
    fs: Arc<dyn FileSystem>,
    pattern: SourcePattern,
    source_dir: PathBuf,
    output_dir: PathBuf,
    pipeline: StylePipeline,
}

impl BuildStylesTask {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        pattern: SourcePattern,
        source_dir: PathBuf,
        output_dir: PathBuf,
        pipeline: StylePipeline,
    ) -> Self {
        Self {
            fs,
            pattern,
            source_dir,
            output_dir,
            pipeline,
        }
    }

    pub fn pattern(&self) -> &SourcePattern {
        &self.pattern
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Enumerate the current source set without building anything.
    pub fn sources(&self) -> Result<SourceSet> {
        SourceSet::collect(
            self.fs.as_ref(),
            &self.source_dir,
            &self.pattern,
            &self.output_dir,
        )
    }

    /// Run the whole build synchronously.
    pub fn run(&self) -> Result<BuildReport> {
        let sources = self.sources()?;
        info!(
            sources = sources.files.len(),
            pattern = %self.pattern.as_str(),
            "building styles"
        );

        let mut report = BuildReport {
            partials: sources.partials,
            ..BuildReport::default()
        };

        for source in &sources.files {
            let contents = self.fs.read(&source.path)?;

            match self.pipeline.produce(self.fs.as_ref(), source, &contents) {
                Ok(artifact) => {
                    self.fs.write(&artifact.output, artifact.css.as_bytes())?;
                    debug!(
                        source = %artifact.source.display(),
                        output = %artifact.output.display(),
                        bytes = artifact.css.len(),
                        "wrote stylesheet"
                    );
                    report.written.push(artifact.output);
                }
                Err(err) => {
                    error!(file = %err.path.display(), stage = %err.stage, "{}", err.message);
                    report.failures.push(err);
                }
            }
        }

        if report.is_clean() {
            info!(written = report.written.len(), "styles built");
        } else {
            warn!(
                written = report.written.len(),
                failed = report.failures.len(),
                "styles built with errors"
            );
        }

        Ok(report)
    }
}
