//! CLI integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `basoka` running in an empty directory with no secrets in the environment.
fn basoka(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("basoka");
    cmd.current_dir(dir.path())
        .env_remove("BOT_TOKEN")
        .env_remove("AUTHORIZED_USER_IDS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    basoka(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("servers"));
}

#[test]
fn version_names_the_binary() {
    let dir = TempDir::new().unwrap();
    basoka(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("basoka"));
}

#[test]
fn check_config_requires_bot_token() {
    let dir = TempDir::new().unwrap();
    basoka(&dir)
        .args(["check", "config"])
        .env("AUTHORIZED_USER_IDS", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BOT_TOKEN"));
}

#[test]
fn check_config_rejects_malformed_user_ids() {
    let dir = TempDir::new().unwrap();
    basoka(&dir)
        .args(["check", "config"])
        .env("BOT_TOKEN", "123:secret")
        .env("AUTHORIZED_USER_IDS", "12,alice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("AUTHORIZED_USER_IDS"));
}

#[test]
fn check_config_summary_hides_token() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bot.toml"),
        "[registry]\npath = \"data/servers.json\"\n",
    )
    .unwrap();

    basoka(&dir)
        .args(["check", "config", "--config", "bot.toml"])
        .env("BOT_TOKEN", "123:secret")
        .env("AUTHORIZED_USER_IDS", "11, 22")
        .assert()
        .success()
        .stdout(predicate::str::contains("data/servers.json"))
        .stdout(predicate::str::contains("123:secret").not());
}

#[test]
fn check_config_reports_invalid_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bot.toml"), "[agent\n").unwrap();

    basoka(&dir)
        .args(["check", "config", "--config", "bot.toml"])
        .env("BOT_TOKEN", "123:secret")
        .env("AUTHORIZED_USER_IDS", "11")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn servers_list_prints_stored_registry() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("servers.json"),
        r#"{"web": "10.0.0.7:8080", "db1": "10.0.0.5:5432"}"#,
    )
    .unwrap();

    basoka(&dir)
        .args(["servers", "list", "--quiet"])
        .assert()
        .success()
        .stdout("db1 10.0.0.5:5432\nweb 10.0.0.7:8080\n");
}

#[test]
fn servers_list_json_lines() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("custom.json"),
        r#"{"db1": {"address": "10.0.0.5:5432", "running": false}}"#,
    )
    .unwrap();

    basoka(&dir)
        .args(["servers", "list", "--registry", "custom.json", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"payload":{"address":"10.0.0.5:5432","name":"db1"},"type":"server"}"#,
        ));
}

#[test]
fn servers_list_missing_file_is_not_created() {
    let dir = TempDir::new().unwrap();

    basoka(&dir)
        .args(["servers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));

    assert!(!dir.path().join("servers.json").exists());
}

#[test]
fn servers_list_corrupt_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("servers.json"), "[1, 2").unwrap();

    basoka(&dir)
        .args(["servers", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}
