//! Integration tests for smenu.
//!
//! - `fixtures` - Test helpers for creating temporary script directories
//! - `cli_tests` - CLI interface tests
//! - `config_tests` - Configuration loading tests through the binary
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod config_tests;
pub mod fixtures;
pub mod snapshot_tests;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

/// Get a Command for the smenu binary, isolated from the caller's
/// environment and user config.
pub fn smenu() -> Command {
    let mut cmd = cargo_bin_cmd!("smenu");
    cmd.env_remove("SMENU_DIR")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", "/nonexistent/smenu-test-config");
    cmd
}
