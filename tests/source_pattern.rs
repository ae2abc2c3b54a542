// tests/source_pattern.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use stylewatch::styles::{is_partial, output_path_for, SourcePattern};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn default_pattern_splits_into_base_and_glob() -> TestResult {
    let pattern = SourcePattern::parse("./src/sass/**/*.scss")?;
    assert_eq!(pattern.base(), Path::new("src/sass"));
    assert_eq!(pattern.glob(), "**/*.scss");
    assert_eq!(pattern.base_dir(Path::new("/project")), PathBuf::from("/project/src/sass"));
    Ok(())
}

#[test]
fn recursive_glob_matches_top_level_and_nested_files() -> TestResult {
    let pattern = SourcePattern::parse("src/sass/**/*.scss")?;
    assert!(pattern.matches("a.scss"));
    assert!(pattern.matches("deep/er/b.scss"));
    assert!(!pattern.matches("a.css"));
    assert!(!pattern.matches("notes.scss.bak"));
    Ok(())
}

#[test]
fn single_star_does_not_cross_directories() -> TestResult {
    let pattern = SourcePattern::parse("styles/*.scss")?;
    assert!(pattern.matches("main.scss"));
    assert!(!pattern.matches("nested/main.scss"));
    Ok(())
}

#[test]
fn hidden_paths_are_never_selected() -> TestResult {
    let pattern = SourcePattern::parse("src/**/*.scss")?;
    assert!(!pattern.matches(".hidden.scss"));
    assert!(!pattern.matches(".cache/a.scss"));
    Ok(())
}

#[test]
fn glob_at_root_has_empty_base() -> TestResult {
    let pattern = SourcePattern::parse("**/*.scss")?;
    assert_eq!(pattern.base(), Path::new(""));
    assert_eq!(pattern.base_dir(Path::new(".")), PathBuf::from("."));
    Ok(())
}

#[test]
fn literal_path_selects_one_file() -> TestResult {
    let pattern = SourcePattern::parse("src/sass/main.scss")?;
    assert_eq!(pattern.base(), Path::new("src/sass"));
    assert!(pattern.matches("main.scss"));
    assert!(!pattern.matches("other.scss"));
    Ok(())
}

#[test]
fn invalid_patterns_are_rejected() {
    assert!(SourcePattern::parse("").is_err());
    assert!(SourcePattern::parse("   ").is_err());
    assert!(SourcePattern::parse("src/[unclosed/*.scss").is_err());
}

#[test]
fn partials_are_recognised_by_leading_underscore() {
    assert!(is_partial(Path::new("src/sass/_vars.scss")));
    assert!(!is_partial(Path::new("src/sass/vars.scss")));
    assert!(!is_partial(Path::new("src/_dir/vars.scss")));
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,7}"
}

proptest! {
    #[test]
    fn output_mirrors_source_layout(
        dirs in proptest::collection::vec(segment(), 0..4),
        stem in segment(),
    ) {
        let source_dir = Path::new("src/sass");
        let output_dir = Path::new("src/assets");

        let mut rel = PathBuf::new();
        for d in &dirs {
            rel.push(d);
        }
        rel.push(format!("{stem}.scss"));

        let out = output_path_for(source_dir, output_dir, &source_dir.join(&rel)).unwrap();

        prop_assert!(out.starts_with(output_dir));
        prop_assert_eq!(out.extension().and_then(|e| e.to_str()), Some("css"));
        prop_assert_eq!(
            out.strip_prefix(output_dir).unwrap().with_extension("scss"),
            rel
        );
    }
}

#[test]
fn sources_outside_the_base_have_no_output() {
    let result = output_path_for(
        Path::new("src/sass"),
        Path::new("src/assets"),
        Path::new("elsewhere/a.scss"),
    );
    assert!(result.is_err());
}
