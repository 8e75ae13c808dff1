//! Integration tests for the ContactVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The passphrase is supplied through `CONTACTVAULT_PASSPHRASE` so no
//! test has to drive the interactive prompt; the `add` command (which
//! prompts for each contact field) is only covered via `--help`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASSPHRASE: &str = "integration-passphrase";

/// Helper: get a Command pointing at the contactvault binary.
///
/// Drops a config file with light Argon2 settings into the temp dir so
/// the suite does not spend its time on 64 MB key derivations.
fn contactvault(dir: &TempDir) -> Command {
    let config = dir.path().join(".contactvault.toml");
    if !config.exists() {
        std::fs::write(
            &config,
            "argon2_memory_kib = 8192\nargon2_iterations = 1\nargon2_parallelism = 1\n",
        )
        .unwrap();
    }

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("contactvault").expect("binary should exist");
    cmd.current_dir(dir.path());
    cmd.env("CONTACTVAULT_PASSPHRASE", PASSPHRASE);
    cmd
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    contactvault(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Encrypted hierarchical contact manager",
        ))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("tree"))
        .stdout(predicate::str::contains("mkdir"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    contactvault(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("contactvault"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    contactvault(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn init_creates_vault_file() {
    let tmp = TempDir::new().unwrap();

    contactvault(&tmp).arg("init").assert().success();
    assert!(tmp.path().join("contacts.cvault").exists());
}

#[test]
fn init_twice_fails() {
    let tmp = TempDir::new().unwrap();

    contactvault(&tmp).arg("init").assert().success();
    contactvault(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn mkdir_and_tree_show_structure() {
    let tmp = TempDir::new().unwrap();

    contactvault(&tmp).arg("init").assert().success();
    contactvault(&tmp).args(["mkdir", "work"]).assert().success();
    contactvault(&tmp)
        .args(["mkdir", "clients", "--in", "work"])
        .assert()
        .success();

    contactvault(&tmp)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("[D] - root"))
        .stdout(predicate::str::contains("[D] - work"))
        .stdout(predicate::str::contains("[D] - clients"));
}

#[test]
fn mkdir_in_missing_parent_fails() {
    let tmp = TempDir::new().unwrap();

    contactvault(&tmp).arg("init").assert().success();
    contactvault(&tmp)
        .args(["mkdir", "orphan", "--in", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn tree_without_vault_shows_fresh_root() {
    let tmp = TempDir::new().unwrap();

    // No init: a missing vault file means "no data yet", not an error.
    contactvault(&tmp)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("[D] - root"));
}

#[test]
fn list_empty_folder_reports_no_contacts() {
    let tmp = TempDir::new().unwrap();

    contactvault(&tmp).arg("init").assert().success();
    contactvault(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts"));
}

#[test]
fn wrong_passphrase_fails() {
    let tmp = TempDir::new().unwrap();

    contactvault(&tmp).arg("init").assert().success();
    contactvault(&tmp).args(["mkdir", "work"]).assert().success();

    contactvault(&tmp)
        .arg("tree")
        .env("CONTACTVAULT_PASSPHRASE", "a-different-passphrase")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decryption failed"));
}

#[test]
fn reset_discards_tree() {
    let tmp = TempDir::new().unwrap();

    contactvault(&tmp).arg("init").assert().success();
    contactvault(&tmp).args(["mkdir", "work"]).assert().success();
    contactvault(&tmp)
        .args(["reset", "--force"])
        .assert()
        .success();

    contactvault(&tmp)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("[D] - root"))
        .stdout(predicate::str::contains("work").not());
}

#[test]
fn add_help_shows_folder_flag() {
    let tmp = TempDir::new().unwrap();
    contactvault(&tmp)
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--in"));
}
