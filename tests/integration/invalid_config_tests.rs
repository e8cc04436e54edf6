//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::coregraph_command;

#[test]
fn test_toml_mismatch_type() {
    coregraph_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_duplicate_rate() {
    coregraph_command(&["-C", "./tests/invalid_configs/duplicate_rate.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

#[test]
fn test_invalid_colour_hex() {
    coregraph_command(&["-C", "./tests/invalid_configs/invalid_colour_hex.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please update 'colors.core_color' in your config file",
        ));
}

#[test]
fn test_invalid_colour_hex_length() {
    coregraph_command(&[
        "-C",
        "./tests/invalid_configs/invalid_colour_hex_length.toml",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("'#12345' is not a hex colour"));
}

#[test]
fn test_invalid_colour_name() {
    coregraph_command(&["-C", "./tests/invalid_configs/invalid_colour_name.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'Mauve' is not a known colour name",
        ));
}

#[test]
fn test_invalid_colour_rgb() {
    coregraph_command(&["-C", "./tests/invalid_configs/invalid_colour_rgb.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please update 'colors.axis_color' in your config file",
        ));
}

#[test]
fn test_small_rate() {
    coregraph_command(&["-C", "./tests/invalid_configs/small_rate.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'rate' must be at least 250 milliseconds",
        ));
}

#[test]
fn test_invalid_rate() {
    coregraph_command(&["-C", "./tests/invalid_configs/invalid_rate.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'rate' has an invalid value"));
}

#[test]
fn test_window_too_large() {
    coregraph_command(&["-C", "./tests/invalid_configs/window_too_large.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'window' must be between 1 and 50",
        ));
}

#[test]
fn test_too_many_cores() {
    coregraph_command(&["-C", "./tests/invalid_configs/too_many_cores.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'max_cores' must be between 1 and 1024",
        ));
}
