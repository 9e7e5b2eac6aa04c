//! CLI surface tests (argument validation and error reporting).
//!
//! The interactive player needs a terminal and a scoring service, so these
//! tests only exercise the paths that fail (or finish) before the TUI
//! starts.

use assert_cmd::Command;
use predicates::prelude::*;

fn rnaviz() -> Command {
    Command::cargo_bin("rnaviz").unwrap()
}

#[test]
fn help_mentions_the_visualizer() {
    rnaviz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("traceback visualizer"));
}

#[test]
fn version_prints_build_info() {
    rnaviz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rnaviz"));
}

#[test]
fn missing_sequence_is_an_error() {
    rnaviz()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no RNA sequence"));
}

#[test]
fn non_alphabetic_sequence_is_rejected() {
    rnaviz()
        .arg("GC-AU")
        .assert()
        .failure()
        .stderr(predicate::str::contains("string of bases"));
}

#[test]
fn non_integer_min_loop_is_rejected_by_clap() {
    rnaviz()
        .args(["GCAU", "--min-loop", "abc"])
        .assert()
        .failure();
}

#[test]
fn unreachable_scoring_service_is_reported() {
    rnaviz()
        .args(["GCAU", "--api-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scoring request"));
}

#[test]
fn completions_subcommand_writes_a_script() {
    rnaviz()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rnaviz"));
}
