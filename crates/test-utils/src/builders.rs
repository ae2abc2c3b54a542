#![allow(dead_code)]

use stylewatch::config::{ConfigFile, RawConfigFile};
use stylewatch::types::{Compatibility, TriggerWhileRunningBehaviour};

/// Builder for `ConfigFile` to simplify test setup.
///
/// Starts from the built-in defaults.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
    root_dir: Option<std::path::PathBuf>,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
            root_dir: None,
        }
    }

    pub fn source(mut self, pattern: &str) -> Self {
        self.config.styles.source = pattern.to_string();
        self
    }

    pub fn output(mut self, dir: &str) -> Self {
        self.config.styles.output = dir.to_string();
        self
    }

    pub fn compatibility(mut self, compatibility: Compatibility) -> Self {
        self.config.styles.compatibility = compatibility;
        self
    }

    pub fn behaviour(mut self, behaviour: TriggerWhileRunningBehaviour) -> Self {
        self.config.watch.triggered_while_running_behaviour = behaviour;
        self
    }

    pub fn queue_length(mut self, len: usize) -> Self {
        self.config.watch.queue_length = len;
        self
    }

    pub fn root_dir(mut self, root: impl Into<std::path::PathBuf>) -> Self {
        self.root_dir = Some(root.into());
        self
    }

    pub fn build(self) -> ConfigFile {
        let cfg = ConfigFile::try_from(self.config)
            .expect("Failed to build valid config from builder");
        match self.root_dir {
            Some(root) => cfg.with_root_dir(root),
            None => cfg,
        }
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
