//! End-to-end tests for the bracet binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bracet(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bracet").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("BRACET_CONFIG")
        .env_remove("BRACET_VERBOSE")
        .env("BRACET_NO_COLOR", "true");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    bracet(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_tokens_text_output() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "main.swift", "let a = b<c>(d)\n");
    bracet(&dir)
        .args(["tokens", "main.swift", "--no-trivia"])
        .assert()
        .success()
        .stdout(
            "Identifier\t\"let\"\nIdentifier\t\"a\"\nOperator\t\"=\"\nIdentifier\t\"b\"\n\
             StartOfScope\t\"<\"\nIdentifier\t\"c\"\nEndOfScope\t\">\"\nStartOfScope\t\"(\"\n\
             Identifier\t\"d\"\nEndOfScope\t\")\"\n",
        );
}

#[test]
fn test_tokens_json_output() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "main.swift", "x // hi");
    let output = bracet(&dir)
        .args(["tokens", "main.swift", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let texts: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["x", " ", "//", " ", "hi"]);
}

#[test]
fn test_tokens_reports_lex_error() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "bad.swift", "let c = 'x'\n");
    bracet(&dir)
        .args(["tokens", "bad.swift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E1001]"))
        .stderr(predicate::str::contains("bad.swift:1:9"));
}

#[test]
fn test_tokens_missing_file() {
    let dir = TempDir::new().unwrap();
    bracet(&dir)
        .args(["tokens", "missing.swift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a file"));
}

#[test]
fn test_check_passes_clean_file() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "ok.swift", "func f<T>(_ x: T) -> [T] {\n    return [x]\n}\n");
    bracet(&dir)
        .args(["check", "ok.swift"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok   ok.swift"))
        .stdout(predicate::str::contains("checked 1 file(s): 0 failed"));
}

#[test]
fn test_check_fails_unbalanced_file() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "open.swift", "func f() {\n");
    bracet(&dir)
        .args(["check", "open.swift"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL open.swift"))
        .stderr(predicate::str::contains("is never closed"))
        .stderr(predicate::str::contains("1 of 1 file(s) failed the check"));
}

#[test]
fn test_check_allow_unbalanced() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "open.swift", "func f() {\n");
    bracet(&dir)
        .args(["check", "open.swift", "--allow-unbalanced"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning[W1001]"));
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "bracet.toml", "[output]\nshow_trivia = false\n\n[check]\nrequire_balanced = false\n");
    write_file(&dir, "open.swift", "f( x");
    bracet(&dir)
        .args(["tokens", "open.swift"])
        .assert()
        .success()
        .stdout("Identifier\t\"f\"\nStartOfScope\t\"(\"\nIdentifier\t\"x\"\n");
    bracet(&dir).args(["check", "open.swift"]).assert().success();
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "custom.toml", "[output]\nformat = \"json\"\n");
    write_file(&dir, "a.swift", "a");
    bracet(&dir)
        .args(["--config", "custom.toml", "tokens", "a.swift"])
        .assert()
        .success()
        .stdout("[{\"kind\":\"Identifier\",\"text\":\"a\"}]\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    bracet(&dir)
        .args(["--config", "nope.toml", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_init_writes_config() {
    let dir = TempDir::new().unwrap();
    bracet(&dir).arg("init").assert().success();
    let content = std::fs::read_to_string(dir.path().join("bracet.toml")).unwrap();
    assert!(content.contains("require_balanced = true"));

    bracet(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    bracet(&dir).args(["init", "--force"]).assert().success();
}
