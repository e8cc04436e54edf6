//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_coregraph_command;

#[test]
fn test_small_rate() {
    no_cfg_coregraph_command()
        .arg("-r")
        .arg("249")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--rate' must be at least 250 milliseconds",
        ));
}

#[test]
fn test_small_human_rate() {
    no_cfg_coregraph_command()
        .arg("--rate")
        .arg("100ms")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--rate' must be at least 250 milliseconds",
        ));
}

#[test]
fn test_large_rate() {
    no_cfg_coregraph_command()
        .arg("-r")
        .arg("18446744073709551616")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--rate' has an invalid value"));
}

#[test]
fn test_rate_over_a_day() {
    no_cfg_coregraph_command()
        .arg("-r")
        .arg("18446744073709551615")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--rate' must be at most 86400000 milliseconds",
        ));
}

#[test]
fn test_invalid_rate() {
    no_cfg_coregraph_command()
        .arg("-r")
        .arg("soonish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--rate' has an invalid value"));
}

#[test]
fn test_small_history() {
    no_cfg_coregraph_command()
        .arg("--history")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--history' must be at least 2"));
}

#[test]
fn test_large_history() {
    no_cfg_coregraph_command()
        .arg("--history")
        .arg("100001")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--history' must be at most 100000"));
}

#[test]
fn test_zero_window() {
    no_cfg_coregraph_command()
        .arg("--window")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--window' must be between 1 and 500",
        ));
}

#[test]
fn test_window_larger_than_history() {
    no_cfg_coregraph_command()
        .args(["--history", "20", "--window", "21"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--window' must be between 1 and 20",
        ));
}

#[test]
fn test_zero_max_cores() {
    no_cfg_coregraph_command()
        .arg("--max_cores")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--max_cores' must be between 1 and 1024",
        ));
}

#[test]
fn test_negative_history() {
    no_cfg_coregraph_command()
        .arg("--history")
        .arg("-5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_unknown_arg() {
    no_cfg_coregraph_command()
        .arg("--frames_per_second")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_version() {
    no_cfg_coregraph_command()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help() {
    no_cfg_coregraph_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--total_from_counter"))
        .stdout(predicate::str::contains("--max_cores"));
}
