// src/styles/compile.rs

use std::path::{Path, PathBuf};

use grass::{Options, OutputStyle};

use crate::fs::{FileSystem, GrassFs};
use crate::styles::CompileError;

/// SCSS -> CSS compiler backed by `grass`.
///
/// Imports are resolved relative to the importing file first, then against
/// the configured load paths.
#[derive(Debug, Clone, Default)]
pub struct StyleCompiler {
    load_paths: Vec<PathBuf>,
}

impl StyleCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_load_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.load_paths.push(path.into());
        self
    }

    /// Compile `source` (the contents of `path`) to plain CSS.
    pub fn compile(
        &self,
        fs: &dyn FileSystem,
        path: &Path,
        source: &str,
    ) -> Result<String, CompileError> {
        let grass_fs = GrassFs::new(fs);

        // The source is handed over as a string, so the file's own directory
        // has to be a load path for its relative imports.
        let mut load_paths = Vec::with_capacity(self.load_paths.len() + 1);
        if let Some(parent) = path.parent() {
            load_paths.push(parent.to_path_buf());
        }
        load_paths.extend(self.load_paths.iter().cloned());

        let options = Options::default()
            .fs(&grass_fs)
            .style(OutputStyle::Expanded)
            .load_paths(&load_paths);

        grass::from_string(source.to_owned(), &options)
            .map_err(|err| CompileError::compile(path, err.to_string()))
    }
}
