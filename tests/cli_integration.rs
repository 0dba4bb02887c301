//! Smoke tests for the ticketdesk binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_commands() {
    let mut cmd = Command::cargo_bin("ticketdesk").unwrap();
    let assert = cmd.arg("--help").assert().success();

    assert.stdout(predicate::str::contains("menu"));
}

#[cfg(feature = "api")]
#[test]
fn help_lists_serve_when_api_enabled() {
    let mut cmd = Command::cargo_bin("ticketdesk").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn version_prints() {
    let mut cmd = Command::cargo_bin("ticketdesk").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ticketdesk"));
}

#[test]
fn unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("ticketdesk").unwrap();
    cmd.arg("bogus").assert().failure();
}
