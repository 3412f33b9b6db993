use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_main_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("tracksync");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("docs"))
        .stdout(predicate::str::contains("--project-root"));
}

#[test]
fn test_sync_help_shows_modes() {
    let mut cmd = cargo_bin_cmd!("tracksync");
    cmd.args(["sync", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--check"));
}

#[test]
fn test_dry_run_conflicts_with_check() {
    let mut cmd = cargo_bin_cmd!("tracksync");
    cmd.args(["sync", "--dry-run", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("tracksync");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tracksync "));
}
