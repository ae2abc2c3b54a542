// src/styles/sources.rs

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};

use crate::fs::FileSystem;

/// A source glob split into its literal base directory and the glob part.
///
/// `./src/sass/**/*.scss` becomes base `src/sass` and glob `**/*.scss`. The
/// base is the directory that gets watched and the root that output paths are
/// made relative to; the glob is matched against paths relative to it.
#[derive(Clone)]
pub struct SourcePattern {
    raw: String,
    base: PathBuf,
    glob: String,
    matcher: GlobMatcher,
}

impl fmt::Debug for SourcePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourcePattern")
            .field("raw", &self.raw)
            .field("base", &self.base)
            .field("glob", &self.glob)
            .finish_non_exhaustive()
    }
}

impl SourcePattern {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            bail!("source pattern must not be empty");
        }

        let normalized = trimmed.replace('\\', "/");
        let mut base = PathBuf::new();
        let mut glob_parts: Vec<&str> = Vec::new();

        for (i, part) in normalized.split('/').enumerate() {
            if !glob_parts.is_empty() || is_glob_component(part) {
                glob_parts.push(part);
                continue;
            }
            if i == 0 && part.is_empty() {
                base.push("/");
                continue;
            }
            if part.is_empty() || part == "." {
                continue;
            }
            base.push(part);
        }

        // A literal path selects exactly one file.
        let glob = if glob_parts.is_empty() {
            let file = base
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .with_context(|| format!("source pattern {raw:?} names no file"))?;
            base.pop();
            globset::escape(&file)
        } else {
            glob_parts.join("/")
        };

        let matcher = GlobBuilder::new(&glob)
            .literal_separator(true)
            .build()
            .with_context(|| format!("invalid glob pattern: {glob}"))?
            .compile_matcher();

        Ok(Self {
            raw: trimmed.to_string(),
            base,
            glob,
            matcher,
        })
    }

    /// The pattern as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Literal directory prefix, relative to the project root (may be empty).
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Glob part, matched against paths relative to [`Self::base`].
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// Base directory resolved against `root`.
    pub fn base_dir(&self, root: &Path) -> PathBuf {
        if self.base.as_os_str().is_empty() {
            root.to_path_buf()
        } else {
            root.join(&self.base)
        }
    }

    /// Returns true if `rel_path` (relative to the base, forward slashes)
    /// is selected by this pattern.
    ///
    /// Like shell globs, wildcards never select hidden files or descend into
    /// hidden directories.
    pub fn matches(&self, rel_path: &str) -> bool {
        if rel_path.split('/').any(|c| c.starts_with('.')) {
            return false;
        }
        self.matcher.is_match(rel_path)
    }
}

fn is_glob_component(part: &str) -> bool {
    part.contains(['*', '?', '[', '{'])
}

/// Partials (`_name.scss`) are only compiled through imports.
pub fn is_partial(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('_'))
}

/// One selected source and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub output: PathBuf,
}

/// The files selected by a [`SourcePattern`] for a single build.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    /// Sources to compile, sorted by path.
    pub files: Vec<SourceFile>,
    /// Matching partials, which produce no output of their own.
    pub partials: Vec<PathBuf>,
}

impl SourceSet {
    /// Enumerate everything under `source_dir` matching `pattern`.
    ///
    /// A missing source directory yields an empty set; any other filesystem
    /// failure is returned. Symlinked files are selected, symlinked
    /// directories are not entered.
    pub fn collect(
        fs: &dyn FileSystem,
        source_dir: &Path,
        pattern: &SourcePattern,
        output_dir: &Path,
    ) -> Result<Self> {
        if !fs.is_dir(source_dir) {
            warn!("source directory {:?} does not exist; nothing to build", source_dir);
            return Ok(Self::default());
        }

        let mut matched = Vec::new();
        let mut stack = vec![source_dir.to_path_buf()];

        while let Some(dir) = stack.pop() {
            for path in fs.read_dir(&dir)? {
                if fs.is_dir(&path) {
                    // Like `**` in shell globs, never descend through a
                    // symlinked directory; it may point back up the tree.
                    if fs.is_symlink(&path) {
                        debug!("skipping symlinked directory {:?}", path);
                        continue;
                    }
                    stack.push(path);
                } else if fs.is_file(&path) {
                    if let Some(rel) = relative_str(source_dir, &path) {
                        if pattern.matches(&rel) {
                            matched.push(path);
                        }
                    }
                }
            }
        }

        matched.sort();

        let mut set = Self::default();
        for path in matched {
            if is_partial(&path) {
                set.partials.push(path);
                continue;
            }
            let output = output_path_for(source_dir, output_dir, &path)?;
            set.files.push(SourceFile { path, output });
        }

        debug!(
            files = set.files.len(),
            partials = set.partials.len(),
            "collected style sources"
        );
        Ok(set)
    }
}

/// Output path for `source`: same path relative to `source_dir`, placed under
/// `output_dir`, with a `.css` extension.
pub fn output_path_for(source_dir: &Path, output_dir: &Path, source: &Path) -> Result<PathBuf> {
    let rel = source
        .strip_prefix(source_dir)
        .with_context(|| format!("{:?} is not under source directory {:?}", source, source_dir))?;
    Ok(output_dir.join(rel).with_extension("css"))
}

fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(rel.to_string_lossy().replace('\\', "/"))
}
