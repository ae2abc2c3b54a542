// tests/config_loading.rs

use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use stylewatch::config::{
    load_and_validate, resolve_config, ConfigFile, RawConfigFile, DEFAULT_SOURCE,
};
use stylewatch::errors::StylewatchError;
use stylewatch::types::{Compatibility, TriggerWhileRunningBehaviour};
use tempfile::{NamedTempFile, TempDir};

type TestResult = Result<(), Box<dyn Error>>;

fn config_from(toml: &str) -> (NamedTempFile, Result<ConfigFile, StylewatchError>) {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{toml}").unwrap();
    let result = load_and_validate(file.path());
    (file, result)
}

#[test]
fn built_in_defaults_match_the_classic_pipeline() -> TestResult {
    let cfg = ConfigFile::try_from(RawConfigFile::default())?;

    assert_eq!(cfg.source().as_str(), DEFAULT_SOURCE);
    assert_eq!(cfg.source_dir(), PathBuf::from("./src/sass"));
    assert_eq!(cfg.output_dir(), PathBuf::from("./src/assets"));
    assert_eq!(cfg.compatibility(), Compatibility::Ie8);
    assert_eq!(
        cfg.watch().triggered_while_running_behaviour,
        TriggerWhileRunningBehaviour::Queue
    );
    assert_eq!(cfg.watch().queue_length, 1);

    Ok(())
}

#[test]
fn empty_file_is_the_same_as_defaults() -> TestResult {
    let (_file, cfg) = config_from("");
    let cfg = cfg?;
    assert_eq!(cfg.source().as_str(), DEFAULT_SOURCE);
    assert_eq!(cfg.compatibility(), Compatibility::Ie8);
    Ok(())
}

#[test]
fn all_sections_are_read() -> TestResult {
    let (file, cfg) = config_from(
        r#"
[styles]
source = "web/scss/**/*.scss"
output = "./web/static/css"
compatibility = "*"

[watch]
triggered_while_running_behaviour = "drop"
queue_length = 3
"#,
    );
    let cfg = cfg?;
    let root = file.path().parent().unwrap_or(Path::new("."));

    assert_eq!(cfg.root_dir(), root);
    assert_eq!(cfg.source_dir(), root.join("web/scss"));
    assert_eq!(cfg.output_dir(), root.join("web/static/css"));
    assert_eq!(cfg.compatibility(), Compatibility::Modern);
    assert_eq!(
        cfg.watch().triggered_while_running_behaviour,
        TriggerWhileRunningBehaviour::Drop
    );
    assert_eq!(cfg.watch().queue_length, 3);

    Ok(())
}

#[test]
fn zero_queue_length_is_a_config_error() {
    let (_file, result) = config_from("[watch]\nqueue_length = 0\n");
    match result {
        Err(StylewatchError::ConfigError(msg)) => assert!(msg.contains("queue_length")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn invalid_glob_is_a_config_error() {
    let (_file, result) = config_from("[styles]\nsource = \"src/[oops/*.scss\"\n");
    match result {
        Err(StylewatchError::ConfigError(msg)) => assert!(msg.contains("[styles].source")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn output_pointing_at_root_is_rejected() {
    let (_file, result) = config_from("[styles]\noutput = \".\"\n");
    assert!(matches!(result, Err(StylewatchError::ConfigError(_))));
}

#[test]
fn unknown_compatibility_fails_to_parse() {
    let (_file, result) = config_from("[styles]\ncompatibility = \"ie6\"\n");
    assert!(matches!(result, Err(StylewatchError::TomlError(_))));
}

#[test]
fn unknown_behaviour_fails_to_parse() {
    let (_file, result) =
        config_from("[watch]\ntriggered_while_running_behaviour = \"cancel\"\n");
    assert!(matches!(result, Err(StylewatchError::TomlError(_))));
}

#[test]
fn explicit_missing_config_is_an_error() -> TestResult {
    let tmp = TempDir::new()?;
    let missing = tmp.path().join("nope.toml");

    match resolve_config(Some(&missing)) {
        Err(StylewatchError::ConfigError(msg)) => assert!(msg.contains("does not exist")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }

    Ok(())
}

#[test]
fn explicit_config_is_loaded_relative_to_its_directory() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("Stylewatch.toml");
    std::fs::write(&path, "[styles]\noutput = \"dist\"\n")?;

    let cfg = resolve_config(Some(&path))?;

    assert_eq!(cfg.output_dir(), tmp.path().join("dist"));
    assert_eq!(cfg.source_dir(), tmp.path().join("src/sass"));

    Ok(())
}
