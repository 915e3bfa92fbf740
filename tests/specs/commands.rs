//! Behavioral specs for the command surface.
//!
//! Tests that duo correctly handles:
//! - Bare invocation, --help and --version
//! - Unknown flags (exit code 2)
//! - Shell completions

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn bare_invocation_shows_help() {
    duo_cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"));
}

#[test]
fn help_lists_test_and_check() {
    duo_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("test").and(predicates::str::contains("check")));
}

#[test]
fn version_flag_prints_version() {
    duo_cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_exits_with_usage_error() {
    duo_cmd().args(["check", "foo", "--bogus"]).assert().code(2);
}

#[test]
fn unknown_subcommand_exits_with_usage_error() {
    duo_cmd().arg("build").assert().code(2);
}

#[test]
fn json_output_without_dry_run_is_an_argument_error() {
    duo_cmd()
        .args(["check", "-o", "json"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("requires --dry-run"));
}

#[test]
fn completions_print_script() {
    duo_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicates::str::contains("duo"));
}
