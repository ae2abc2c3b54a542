// tests/cli_args.rs

use clap::Parser;
use stylewatch::cli::{CliArgs, LogLevel};
use stylewatch::logging::parse_level_str;
use stylewatch::tasks::TaskKind;

#[test]
fn no_task_runs_the_default_series() {
    let args = CliArgs::try_parse_from(["stylewatch"]).unwrap();
    assert_eq!(args.task_kind(), TaskKind::Default);
    assert!(!args.dry_run);
    assert!(args.config.is_none());
}

#[test]
fn task_names_and_aliases_are_accepted() {
    let args = CliArgs::try_parse_from(["stylewatch", "buildStyles"]).unwrap();
    assert_eq!(args.task_kind(), TaskKind::BuildStyles);

    let args = CliArgs::try_parse_from(["stylewatch", "build-styles"]).unwrap();
    assert_eq!(args.task_kind(), TaskKind::BuildStyles);

    let args = CliArgs::try_parse_from(["stylewatch", "serve"]).unwrap();
    assert_eq!(args.task_kind(), TaskKind::Serve);
}

#[test]
fn global_options_work_after_the_task() {
    let args = CliArgs::try_parse_from([
        "stylewatch",
        "serve",
        "--config",
        "web/Stylewatch.toml",
        "--log-level",
        "debug",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.config.as_deref(), Some("web/Stylewatch.toml"));
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    assert!(args.dry_run);
}

#[test]
fn unknown_task_is_rejected() {
    assert!(CliArgs::try_parse_from(["stylewatch", "deploy"]).is_err());
}

#[test]
fn log_level_env_values() {
    assert_eq!(parse_level_str(" DEBUG "), Some(tracing::Level::DEBUG));
    assert_eq!(parse_level_str("warning"), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str("loud"), None);
}
