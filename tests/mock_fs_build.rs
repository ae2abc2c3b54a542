// tests/mock_fs_build.rs

mod common;
use crate::common::builders::ConfigFileBuilder;
use crate::common::init_tracing;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use stylewatch::fs::mock::MockFileSystem;
use stylewatch::styles::{SourcePattern, SourceSet};
use stylewatch::tasks::{TaskSet, TaskSetBuilder};

type TestResult = Result<(), Box<dyn Error>>;

fn tasks_on(fs: &MockFileSystem) -> TaskSet {
    let cfg = ConfigFileBuilder::new().build();
    TaskSetBuilder::new(cfg).filesystem(Arc::new(fs.clone())).build()
}

#[test]
fn source_set_is_sorted_and_mapped_to_output() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("./src/sass/zeta.scss", "a { color: red; }");
    fs.add_file("./src/sass/alpha.scss", "a { color: red; }");
    fs.add_file("./src/sass/sub/mid.scss", "a { color: red; }");
    fs.add_file("./src/sass/_partial.scss", "$x: 1;");
    fs.add_file("./src/sass/notes.txt", "text");

    let pattern = SourcePattern::parse("./src/sass/**/*.scss")?;
    let set = SourceSet::collect(
        &fs,
        &PathBuf::from("./src/sass"),
        &pattern,
        &PathBuf::from("./src/assets"),
    )?;

    let sources: Vec<_> = set.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        sources,
        vec![
            PathBuf::from("./src/sass/alpha.scss"),
            PathBuf::from("./src/sass/sub/mid.scss"),
            PathBuf::from("./src/sass/zeta.scss"),
        ]
    );

    let outputs: Vec<_> = set.files.iter().map(|f| f.output.clone()).collect();
    assert_eq!(
        outputs,
        vec![
            PathBuf::from("./src/assets/alpha.css"),
            PathBuf::from("./src/assets/sub/mid.css"),
            PathBuf::from("./src/assets/zeta.css"),
        ]
    );

    assert_eq!(set.partials, vec![PathBuf::from("./src/sass/_partial.scss")]);

    Ok(())
}

#[test]
fn build_writes_through_the_filesystem_abstraction() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("./src/sass/a.scss", "body { color: red; }");
    fs.add_file("./src/sass/b.scss", "body { color: blue;");

    let report = tasks_on(&fs).build_styles().run()?;

    assert_eq!(report.written, vec![PathBuf::from("./src/assets/a.css")]);
    assert_eq!(fs.contents("./src/assets/a.css"), Some(b"body{color:red}".to_vec()));
    assert_eq!(fs.contents("./src/assets/b.css"), None);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, PathBuf::from("./src/sass/b.scss"));

    Ok(())
}

#[test]
fn write_failure_is_a_filesystem_error() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("./src/sass/a.scss", "body { color: red; }");
    fs.deny_writes_under("./src/assets");

    let err = tasks_on(&fs)
        .build_styles()
        .run()
        .expect_err("write into a read-only output directory must fail");

    assert!(format!("{err:#}").contains("Permission denied"));

    Ok(())
}

#[test]
fn dry_run_listing_does_not_write() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("./src/sass/a.scss", "body { color: red; }");

    let set = tasks_on(&fs).build_styles().sources()?;

    assert_eq!(set.files.len(), 1);
    assert_eq!(fs.contents("./src/assets/a.css"), None);

    Ok(())
}

#[test]
fn unreadable_source_aborts_the_run() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("./src/sass/a.scss", "body { color: red; }");
    fs.add_file("./src/sass/b.scss", "body { color: green; }");
    fs.deny_reads_under("./src/sass/b.scss");

    let err = tasks_on(&fs)
        .build_styles()
        .run()
        .expect_err("a source that cannot be read must fail the build");

    assert!(format!("{err:#}").contains("Permission denied"));
    assert!(format!("{err:#}").contains("b.scss"));

    Ok(())
}

#[test]
fn symlinked_directory_is_skipped_by_the_walk() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("./src/sass/a.scss", "body { color: red; }");
    fs.add_symlinked_dir("./src/sass/loop");
    fs.add_file("./src/sass/loop/a.scss", "body { color: red; }");

    let set = tasks_on(&fs).build_styles().sources()?;

    let sources: Vec<_> = set.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(sources, vec![PathBuf::from("./src/sass/a.scss")]);

    Ok(())
}
