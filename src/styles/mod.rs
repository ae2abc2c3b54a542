// src/styles/mod.rs

//! The style pipeline: select sources, compile SCSS, minify, emit artifacts.
//!
//! Nothing here touches the output directory; writing artifacts is the job
//! of [`crate::tasks::BuildStylesTask`]. A failure in one file is reported as
//! a [`CompileError`] value so the caller can keep going with the rest.

pub mod compile;
pub mod minify;
pub mod sources;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::fs::FileSystem;

pub use compile::StyleCompiler;
pub use minify::Minifier;
pub use sources::{is_partial, output_path_for, SourceFile, SourcePattern, SourceSet};

/// Pipeline stage a [`CompileError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStage {
    Compile,
    Minify,
}

impl fmt::Display for CompileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileStage::Compile => f.write_str("compile"),
            CompileStage::Minify => f.write_str("minify"),
        }
    }
}

/// A single source file that could not be turned into CSS.
#[derive(Debug, Clone, Error)]
#[error("{stage} error in {}: {message}", .path.display())]
pub struct CompileError {
    pub path: PathBuf,
    pub stage: CompileStage,
    pub message: String,
}

impl CompileError {
    pub fn compile(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            stage: CompileStage::Compile,
            message: message.into(),
        }
    }

    pub fn minify(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            stage: CompileStage::Minify,
            message: message.into(),
        }
    }
}

/// Minified CSS for one source, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub source: PathBuf,
    pub output: PathBuf,
    pub css: String,
}

/// Compile + minify for a single file.
#[derive(Debug, Clone, Default)]
pub struct StylePipeline {
    compiler: StyleCompiler,
    minifier: Minifier,
}

impl StylePipeline {
    pub fn new(compiler: StyleCompiler, minifier: Minifier) -> Self {
        Self { compiler, minifier }
    }

    /// Turn the raw bytes of `source` into an [`Artifact`].
    ///
    /// Empty sources pass through as empty CSS without being compiled.
    pub fn produce(
        &self,
        fs: &dyn FileSystem,
        source: &SourceFile,
        contents: &[u8],
    ) -> Result<Artifact, CompileError> {
        if contents.is_empty() {
            return Ok(Artifact {
                source: source.path.clone(),
                output: source.output.clone(),
                css: String::new(),
            });
        }

        let text = std::str::from_utf8(contents).map_err(|err| {
            CompileError::compile(&source.path, format!("source is not valid UTF-8: {err}"))
        })?;

        let css = self.compiler.compile(fs, &source.path, text)?;
        let css = self.minifier.minify(&source.path, &css)?;

        Ok(Artifact {
            source: source.path.clone(),
            output: source.output.clone(),
            css,
        })
    }
}
