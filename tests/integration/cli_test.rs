//! Tests for the clipclean binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::temp_fixture;

/// Command isolated from the user's config file and log settings.
fn clipclean(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clipclean").expect("binary should be built");
    cmd.env("CLIPCLEAN_CONFIG", config_dir.join("config.toml"))
        .env_remove("CLIPCLEAN_LOG");
    cmd
}

#[test]
fn cleans_input_into_output() {
    let (dir, input) = temp_fixture("kindle_en.txt");
    let output = dir.path().join("cleaned.md");

    clipclean(dir.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned 2 book(s): kept 3 clipping(s)"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with('\u{feff}'));
    assert_eq!(
        written.trim_start_matches('\u{feff}'),
        "## Book A (Author A)\n\nHello world\n\nok\n\n## Book B (Author B)\n\nA note about book B\n\n"
    );
}

#[test]
fn uses_default_paths_in_working_directory() {
    let (dir, fixture) = temp_fixture("kindle_zh.txt");
    fs::rename(&fixture, dir.path().join("My Clippings.txt")).unwrap();

    clipclean(dir.path())
        .current_dir(dir.path())
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("Clipping_cleaned.md")).unwrap();
    assert!(written.contains("## 三体 (刘慈欣)"));
    assert!(!written.contains("我的笔记"));
}

#[test]
fn config_file_changes_output() {
    let (dir, input) = temp_fixture("kindle_en.txt");
    let output = dir.path().join("cleaned.md");
    fs::write(
        dir.path().join("config.toml"),
        "[output]\nwrite_bom = false\ninclude_metadata = true\n",
    )
    .unwrap();

    clipclean(dir.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("## Book A (Author A)"));
    assert!(written.contains("*note · page 7 | Location 101 · 2025-09-18 11:22:10*"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    clipclean(dir.path())
        .arg(dir.path().join("absent.txt"))
        .arg(dir.path().join("out.md"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input file not found"));

    assert!(!dir.path().join("out.md").exists());
}

#[test]
fn invalid_config_fails() {
    let (dir, input) = temp_fixture("kindle_en.txt");
    fs::write(dir.path().join("config.toml"), "[dedup\n").unwrap();

    clipclean(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
