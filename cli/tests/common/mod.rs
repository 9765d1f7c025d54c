//! Shared utilities

#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;
pub use thunderpush_test_server::{closed_port, serve_once, Recorded};

/// Returns the CLI command, isolated from the user config
pub fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_thunderpush-cli"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

/// Returns the CLI command, connected to a local port
pub fn cli_on(home: &TempDir, port: u16) -> Command {
    let mut cmd = cli(home);
    cmd.args(["--host", "127.0.0.1", "--port", &port.to_string()])
        .args(["-k", "key", "-s", "secret"]);
    cmd
}
