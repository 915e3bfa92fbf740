//! Behavioral specs for running the build tool twice.
//!
//! Tests that duo:
//! - Selects the workspace or a single package from the argument
//! - Runs the all-features invocation only after the first succeeds
//! - Exits with the exit code of the last invocation that ran

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn workspace_run_invokes_tool_twice() {
    let tool = FakeTool::passing();

    tool.cmd()
        .arg("test")
        .assert()
        .success()
        .stdout("checking workspace\n");

    assert_eq!(
        tool.calls(),
        [
            args(&["test", "--workspace"]),
            args(&["test", "--workspace", "--all-features"]),
        ]
    );
}

#[test]
fn check_uses_check_subcommand() {
    let tool = FakeTool::passing();

    tool.cmd().arg("check").assert().success();

    assert_eq!(
        tool.calls(),
        [
            args(&["check", "--workspace"]),
            args(&["check", "--workspace", "--all-features"]),
        ]
    );
}

#[test]
fn first_failure_skips_all_features_run() {
    let tool = FakeTool::new(2, 0);

    tool.cmd()
        .args(["test", "foo"])
        .assert()
        .code(2)
        .stdout("checking package foo\n");

    assert_eq!(tool.calls(), [args(&["test", "--package", "foo"])]);
}

#[test]
fn all_features_failure_sets_exit_code() {
    let tool = FakeTool::new(0, 1);

    tool.cmd().args(["test", "foo"]).assert().code(1);

    assert_eq!(
        tool.calls(),
        [
            args(&["test", "--package", "foo"]),
            args(&["test", "--package", "foo", "--all-features"]),
        ]
    );
}

#[test]
fn empty_package_means_workspace() {
    let tool = FakeTool::passing();

    tool.cmd()
        .args(["check", ""])
        .assert()
        .success()
        .stdout("checking workspace\n");

    assert_eq!(tool.calls()[0], args(&["check", "--workspace"]));
}

#[test]
fn package_name_is_passed_verbatim() {
    let tool = FakeTool::passing();

    tool.cmd().args(["check", "my crate;rm"]).assert().success();

    assert_eq!(tool.calls()[0], args(&["check", "--package", "my crate;rm"]));
}

#[test]
fn hyphen_leading_package_name_is_passed_verbatim() {
    let tool = FakeTool::passing();

    tool.cmd()
        .args(["test", "-weird", "-v"])
        .assert()
        .success()
        .stdout("checking package -weird\n")
        .stderr(predicates::str::contains("[verbose]"));

    assert_eq!(
        tool.calls(),
        [
            args(&["test", "--package", "-weird"]),
            args(&["test", "--package", "-weird", "--all-features"]),
        ]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let tool = FakeTool::new(0, 5);

    tool.cmd().args(["test", "foo"]).assert().code(5);
    tool.cmd().args(["test", "foo"]).assert().code(5);

    let calls = tool.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0..2], calls[2..4]);
}

#[test]
fn passthrough_and_manifest_path_reach_both_runs() {
    let tool = FakeTool::passing();

    tool.cmd()
        .args([
            "test",
            "foo",
            "--manifest-path",
            "a/Cargo.toml",
            "--",
            "--release",
            "--",
            "--nocapture",
        ])
        .assert()
        .success();

    assert_eq!(
        tool.calls(),
        [
            args(&[
                "test",
                "--package",
                "foo",
                "--manifest-path",
                "a/Cargo.toml",
                "--release",
                "--",
                "--nocapture",
            ]),
            args(&[
                "test",
                "--package",
                "foo",
                "--all-features",
                "--manifest-path",
                "a/Cargo.toml",
                "--release",
                "--",
                "--nocapture",
            ]),
        ]
    );
}

#[test]
fn tool_flag_overrides_environment() {
    let tool = FakeTool::passing();

    duo_cmd()
        .env("DUO_TOOL", "duo-no-such-tool")
        .args(["check", "--tool"])
        .arg(tool.script())
        .assert()
        .success();

    assert_eq!(tool.calls().len(), 2);
}

#[test]
fn dir_flag_sets_tool_working_directory() {
    let tool = FakeTool::passing();
    let sub = tool.path().join("sub");
    std::fs::create_dir(&sub).unwrap();

    tool.cmd().args(["check", "-C", "sub"]).assert().success();

    assert_eq!(
        tool.last_cwd().canonicalize().unwrap(),
        sub.canonicalize().unwrap()
    );
}

#[test]
fn missing_tool_exits_127() {
    duo_cmd()
        .env("DUO_TOOL", "duo-no-such-tool")
        .arg("check")
        .assert()
        .code(127)
        .stdout("checking workspace\n")
        .stderr(predicates::str::contains("duo: failed to run duo-no-such-tool"));
}

#[test]
fn verbose_logs_each_command() {
    let tool = FakeTool::new(0, 3);

    tool.cmd()
        .args(["check", "-v"])
        .assert()
        .code(3)
        .stderr(
            predicates::str::contains("[verbose] running")
                .and(predicates::str::contains("check --workspace --all-features"))
                .and(predicates::str::contains("[verbose] all-features exited with 3")),
        );
}

#[test]
fn debug_env_enables_verbose() {
    let tool = FakeTool::passing();

    tool.cmd()
        .env("DUO_DEBUG", "1")
        .arg("check")
        .assert()
        .success()
        .stderr(predicates::str::contains("[verbose]"));
}
