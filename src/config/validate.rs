// src/config/validate.rs

use std::path::{Component, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile, StylesSection, WatchSection};
use crate::errors::{Result, StylewatchError};
use crate::styles::SourcePattern;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = StylewatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let source = validate_source(&raw.styles)?;
        let output = validate_output(&raw.styles)?;
        validate_watch(&raw.watch)?;
        Ok(ConfigFile::new_unchecked(
            source,
            output,
            raw.styles.compatibility,
            raw.watch,
        ))
    }
}

fn validate_source(styles: &StylesSection) -> Result<SourcePattern> {
    SourcePattern::parse(&styles.source).map_err(|e| {
        StylewatchError::ConfigError(format!("[styles].source {:?}: {e:#}", styles.source))
    })
}

/// Output directory with `.` components removed, so `./src/assets` and
/// `src/assets` name the same place.
fn validate_output(styles: &StylesSection) -> Result<PathBuf> {
    let trimmed = styles.output.trim();
    if trimmed.is_empty() {
        return Err(StylewatchError::ConfigError(
            "[styles].output must not be empty".to_string(),
        ));
    }

    let cleaned: PathBuf = PathBuf::from(trimmed)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if cleaned.as_os_str().is_empty() {
        return Err(StylewatchError::ConfigError(format!(
            "[styles].output {:?} must name a directory other than the project root",
            styles.output
        )));
    }

    Ok(cleaned)
}

fn validate_watch(watch: &WatchSection) -> Result<()> {
    // triggered_while_running_behaviour is strongly typed and validated
    // during deserialization.
    if watch.queue_length == 0 {
        return Err(StylewatchError::ConfigError(
            "[watch].queue_length must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
