//! Behavioral specs for --dry-run.
//!
//! Tests that a dry run prints the plan without invoking the tool.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn dry_run_prints_plan_without_running() {
    let tool = FakeTool::new(1, 1);
    let program = tool.script().display().to_string();

    tool.cmd()
        .args(["check", "foo", "--dry-run"])
        .assert()
        .success()
        .stdout(format!(
            "checking package foo\n\
             {program} check --package foo\n\
             {program} check --package foo --all-features\n"
        ));

    assert!(tool.calls().is_empty());
}

#[test]
fn dry_run_json_is_parseable() {
    let tool = FakeTool::passing();

    let output = tool
        .cmd()
        .args(["test", "--dry-run", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["subcommand"], "test");
    assert_eq!(json["scope"], "workspace");
    assert!(json["package"].is_null());
    assert_eq!(
        json["invocations"][1]["args"],
        serde_json::json!(["test", "--workspace", "--all-features"])
    );
    assert!(tool.calls().is_empty());
}
