//! Tests for config files that should be accepted.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::coregraph_command;

/// The app exits on the bad argument before drawing anything, but only after
/// the config has been read.
#[test]
fn test_config_values_are_read() {
    coregraph_command(&["-C", "./tests/valid_configs/all_flags.toml"])
        .args(["--window", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--window' must be between 1 and 100",
        ));
}

#[test]
fn test_args_override_config() {
    coregraph_command(&["-C", "./tests/valid_configs/all_flags.toml"])
        .args(["--history", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--history' must be at least 2"));
}

#[test]
fn test_missing_config_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("coregraph.toml");
    let path_str = path.to_str().unwrap();

    coregraph_command(&["-C", path_str, "-r", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--rate' must be at least"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[flags]"));
    assert!(written.contains("[colors]"));
}
