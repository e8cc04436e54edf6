//! Integration tests for coregraph.

mod util;

mod arg_tests;
mod invalid_config_tests;
mod valid_config_tests;
