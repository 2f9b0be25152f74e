mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn help_lists_the_bootstrap_flags() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--typescript"))
        .stdout(predicate::str::contains("--commit"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn existing_directory_exits_110_without_touching_it() {
    let ctx = TestContext::new();
    let project = ctx.existing_project("my-app");

    ctx.cli()
        .args(["my-app", "--yes"])
        .assert()
        .code(110)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--debug"));

    let entries: Vec<_> = fs::read_dir(&project).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(!project.join("package.json").exists());
}

#[test]
fn unreachable_remote_exits_120() {
    let ctx = TestContext::new();
    let remote = ctx.home().join("nowhere").join("repo.git");

    ctx.cli()
        .arg(&remote)
        .arg("--yes")
        .assert()
        .code(120)
        .stderr(predicate::str::contains("unreachable"));

    assert!(!ctx.work_dir().join("repo").exists());
}

#[test]
fn uncreatable_directory_exits_130() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("blocker"), "not a directory").unwrap();

    ctx.cli().args(["blocker/app", "--yes"]).assert().code(130);
}

#[test]
fn debug_mode_reports_without_side_effects() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["my-app", "--debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("debug report"))
        .stdout(predicate::str::contains("exists: no"));

    assert!(ctx.entries().is_empty());
}

#[test]
fn invalid_settings_file_exits_1() {
    let ctx = TestContext::new();
    ctx.write_settings("no_such_key = true\n");

    ctx.cli()
        .args(["my-app", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid settings file"));

    assert_eq!(ctx.entries(), [".ovite.toml"]);
}
