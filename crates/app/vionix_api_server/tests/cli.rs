//! CLI smoke tests for the server binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_configuration_flags() {
    Command::cargo_bin("vionix_api_server")
        .expect("binary built")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn version_prints_crate_version() {
    Command::cargo_bin("vionix_api_server")
        .expect("binary built")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn in_memory_conflicts_with_database_url() {
    Command::cargo_bin("vionix_api_server")
        .expect("binary built")
        .args(["--in-memory", "--database-url", "postgres://localhost/vionix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
