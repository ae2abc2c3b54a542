// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::styles::SourcePattern;
use crate::types::{Compatibility, TriggerWhileRunningBehaviour};

/// Source glob used when no configuration says otherwise.
pub const DEFAULT_SOURCE: &str = "./src/sass/**/*.scss";

/// Output directory used when no configuration says otherwise.
pub const DEFAULT_OUTPUT: &str = "./src/assets";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [styles]
/// source = "./src/sass/**/*.scss"
/// output = "./src/assets"
/// compatibility = "ie8"
///
/// [watch]
/// triggered_while_running_behaviour = "queue"
/// queue_length = 1
/// ```
///
/// Every section and key is optional; an empty file is the same as no file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub styles: StylesSection,

    #[serde(default)]
    pub watch: WatchSection,
}

/// `[styles]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StylesSection {
    /// Glob selecting the SCSS sources, relative to the project root.
    #[serde(default = "default_source")]
    pub source: String,

    /// Directory the CSS is written to, relative to the project root.
    #[serde(default = "default_output")]
    pub output: String,

    /// Minifier compatibility profile (`"*"`, `"ie11"` ... `"ie7"`).
    #[serde(default)]
    pub compatibility: Compatibility,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

impl Default for StylesSection {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            compatibility: Compatibility::default(),
        }
    }
}

/// `[watch]` section.
///
/// Controls what happens to changes that arrive while a build is running.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// `"queue"` (default) or `"drop"`.
    #[serde(default)]
    pub triggered_while_running_behaviour: TriggerWhileRunningBehaviour,

    /// Maximum number of follow-up builds to remember in `queue` mode.
    #[serde(default = "default_queue_length")]
    pub queue_length: usize,
}

fn default_queue_length() -> usize {
    1
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            triggered_while_running_behaviour: TriggerWhileRunningBehaviour::default(),
            queue_length: default_queue_length(),
        }
    }
}

/// Validated configuration.
///
/// Obtained through `ConfigFile::try_from(RawConfigFile)` (see `validate.rs`)
/// or the loader helpers. Relative paths are resolved against
/// [`ConfigFile::root_dir`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    root_dir: PathBuf,
    source: SourcePattern,
    output: PathBuf,
    compatibility: Compatibility,
    watch: WatchSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        source: SourcePattern,
        output: PathBuf,
        compatibility: Compatibility,
        watch: WatchSection,
    ) -> Self {
        Self {
            root_dir: PathBuf::from("."),
            source,
            output,
            compatibility,
            watch,
        }
    }

    /// Resolve relative paths against `root` instead of the current directory.
    pub fn with_root_dir(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_dir = root.into();
        self
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn source(&self) -> &SourcePattern {
        &self.source
    }

    pub fn compatibility(&self) -> Compatibility {
        self.compatibility
    }

    pub fn watch(&self) -> &WatchSection {
        &self.watch
    }

    /// Directory that is scanned and watched for sources.
    pub fn source_dir(&self) -> PathBuf {
        self.source.base_dir(&self.root_dir)
    }

    /// Directory the CSS output goes to.
    pub fn output_dir(&self) -> PathBuf {
        self.root_dir.join(&self.output)
    }
}
