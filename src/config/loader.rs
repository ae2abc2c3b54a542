// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, StylewatchError};

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for the
/// checked form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// Relative paths in the file are resolved against the file's directory.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let raw_config = load_from_path(path)?;
    let config = ConfigFile::try_from(raw_config)?.with_root_dir(config_root_dir(path));
    Ok(config)
}

/// Resolve the configuration to use.
///
/// - An explicitly given path must exist.
/// - Otherwise `Stylewatch.toml` in the current directory is used if present.
/// - Otherwise the built-in defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(StylewatchError::ConfigError(format!(
                "config file {:?} does not exist",
                path
            )));
        }
        info!("using config file {:?}", path);
        return load_and_validate(path);
    }

    let default_path = default_config_path();
    if default_path.is_file() {
        info!("using config file {:?}", default_path);
        return load_and_validate(&default_path);
    }

    debug!("no config file found; using built-in defaults");
    ConfigFile::try_from(RawConfigFile::default())
}

/// Default config file location: `Stylewatch.toml` in the current directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Stylewatch.toml")
}

/// Project root for a config file.
///
/// - If the path has a non-empty parent (e.g. `web/Stylewatch.toml`), that
///   directory is the root.
/// - A bare filename like `Stylewatch.toml` means the current directory.
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
