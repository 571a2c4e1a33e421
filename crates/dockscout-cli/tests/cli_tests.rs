//! Fast CLI tests using assert_cmd.
//! These test the binary directly without needing a container runtime.

#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but works fine

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    Command::cargo_bin("dockscout")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remote Container Dashboard"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("dockscout")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn test_subcommand_help() {
    for subcmd in &[
        "list", "watch", "search", "start", "stop", "restart", "attach", "logs", "inspect",
        "stats", "rm", "exec", "bash",
    ] {
        Command::cargo_bin("dockscout")
            .unwrap()
            .args([subcmd, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty().not());
    }
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("dockscout")
        .unwrap()
        .arg("nonexistent-subcommand")
        .assert()
        .failure();
}

#[test]
fn test_missing_subcommand_fails() {
    Command::cargo_bin("dockscout").unwrap().assert().failure();
}

#[test]
fn test_config_shows_output() {
    Command::cargo_bin("dockscout")
        .unwrap()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file"));
}

#[test]
fn test_runtime_flag_rejects_unknown_value() {
    Command::cargo_bin("dockscout")
        .unwrap()
        .args(["--runtime", "containerd", "list"])
        .assert()
        .failure();
}

#[test]
fn test_lifecycle_fails_cleanly_without_tty_or_name() {
    // With no name argument and no TTY the selector must refuse, not hang.
    let out = Command::cargo_bin("dockscout")
        .unwrap()
        .args(["--runtime", "docker", "--host", "127.0.0.1:1", "start"])
        .assert()
        .failure();
    out.stderr(predicate::str::contains("Error:"));
}
