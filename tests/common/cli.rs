//! Helpers for running the `wdb` binary.

use assert_cmd::Command;
use serde_json::Value;

/// A `wdb` command isolated from the caller's environment.
///
/// Settings variables are cleared and the config directory points at a path
/// that does not exist, so only the arguments given by the test apply.
#[must_use]
pub fn wdb() -> Command {
    let mut cmd = Command::cargo_bin("wdb").expect("wdb binary not built");
    cmd.env_remove("WDB_DATADIR")
        .env_remove("WDB_CONFIG")
        .env_remove("WDB_FORMAT")
        .env_remove("NO_COLOR")
        .env("XDG_CONFIG_HOME", "/nonexistent/wdb-test-config")
        .env("RUST_LOG", "off");
    cmd
}

/// Runs `wdb --robot <args>` and parses stdout as JSON.
///
/// # Panics
///
/// Panics if the command fails or stdout is not JSON.
#[must_use]
pub fn robot_json(args: &[&str]) -> Value {
    let output = wdb().arg("--robot").args(args).output().expect("Failed to run wdb");
    assert!(
        output.status.success(),
        "wdb {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    parse_json(&String::from_utf8_lossy(&output.stdout))
}

/// Parses JSON, with the text in the panic message on failure.
#[must_use]
pub fn parse_json(text: &str) -> Value {
    serde_json::from_str(text.trim()).unwrap_or_else(|_| panic!("Failed to parse JSON:\n{text}"))
}
