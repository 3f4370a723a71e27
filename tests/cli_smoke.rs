#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly and
//! responds to basic commands without crashing.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn qna() -> Command {
    Command::cargo_bin("qna").unwrap()
}

#[test]
fn test_help_displays_usage() {
    qna()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive Q&A CLI with on-demand answer translation",
        ))
        .stdout(predicate::str::contains("configure"))
        .stdout(predicate::str::contains("languages"));
}

#[test]
fn test_version_displays_version() {
    qna()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    qna()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("fr"))
        .stdout(predicate::str::contains("French"))
        .stdout(predicate::str::contains("Spanish"))
        .stdout(predicate::str::contains("Italian"));
}

#[test]
fn test_configure_show_without_config() {
    let temp_dir = TempDir::new().unwrap();

    qna()
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_session_without_config_reports_missing_endpoint() {
    let temp_dir = TempDir::new().unwrap();

    qna()
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("qna.endpoint"));
}

#[test]
fn test_session_with_unset_key_env_names_the_variable() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("qna");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        r#"
[qna]
endpoint = "https://qna.example.com/query"
api_key_env = "QNA_SMOKE_TEST_UNSET_KEY"

[translator]
endpoint = "https://translate.example.com/translate?api-version=3.0"
api_key = "translator-key"
region = "westeurope"
"#,
    )
    .unwrap();

    qna()
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .env_remove("QNA_SMOKE_TEST_UNSET_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("QNA_SMOKE_TEST_UNSET_KEY"));
}
