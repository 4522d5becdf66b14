//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizkit() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizkit").unwrap();
    // Keep the caller's ~/.config/quizkit and environment overrides out of the tests.
    cmd.env("HOME", std::env::temp_dir().join("quizkit-cli-tests-no-home"))
        .env_remove("QUIZKIT_DEFAULT_POINTS");
    cmd
}

const ARITHMETIC: &str = r#"[question_set]
name = "Arithmetic"

[[questions]]
title = "2 + 2 = ?"

[[questions.choices]]
text = "3"

[[questions.choices]]
text = "4"
correct = true

[[questions.choices]]
text = "5"
"#;

const NEEDS_WORK: &str = r#"[question_set]
name = "Needs Work"

[[questions]]
title = "No correct answer"

[[questions.choices]]
text = "maybe"
"#;

const INVALID: &str = r#"[question_set]
name = "Invalid"

[[questions]]
title = "Invalid points"
points = -10
"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_valid_question_set() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "arithmetic.toml", ARITHMETIC);

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Arithmetic (1 questions)"))
        .stdout(predicate::str::contains("All question sets valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "needs-work.toml", NEEDS_WORK);

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[#1] WARNING: question has no correct choice"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_warns_on_blank_set_name() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "unnamed.toml",
        &ARITHMETIC.replace("name = \"Arithmetic\"", "name = \"  \""),
    );

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: question set has no name"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_invalid_question_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "invalid.toml", INVALID);

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid question #1"))
        .stderr(predicate::str::contains("points must be a positive integer"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "arithmetic.toml", ARITHMETIC);
    write(dir.path(), "needs-work.toml", NEEDS_WORK);

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Arithmetic"))
        .stdout(predicate::str::contains("Needs Work"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_respects_config_limits() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "arithmetic.toml", ARITHMETIC);
    let config = write(dir.path(), "strict.toml", "[limits]\nmax_title_len = 3\n");

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 3 allowed"));
}

#[test]
fn show_text_table() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "arithmetic.toml", ARITHMETIC);

    quizkit()
        .current_dir(dir.path())
        .arg("show")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 + 2 = ?"))
        .stdout(predicate::str::contains("yes"))
        .stdout(predicate::str::contains("1 question(s), 1 point(s) total"));
}

#[test]
fn show_uses_env_default_points() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "arithmetic.toml", ARITHMETIC);

    quizkit()
        .current_dir(dir.path())
        .env("QUIZKIT_DEFAULT_POINTS", "2")
        .arg("show")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 question(s), 2 point(s) total"));
}

#[test]
fn show_uses_home_config_without_local_file() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "arithmetic.toml", ARITHMETIC);

    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("quizkit");
    std::fs::create_dir_all(&config_dir).unwrap();
    write(&config_dir, "config.toml", "default_points = 4\n");

    quizkit()
        .current_dir(dir.path())
        .env("HOME", home.path())
        .arg("show")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 question(s), 4 point(s) total"));
}

#[test]
fn show_json() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "arithmetic.toml", ARITHMETIC);

    let output = quizkit()
        .current_dir(dir.path())
        .arg("show")
        .arg("--questions")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Arithmetic");
    let choices = json["questions"][0]["choices"].as_array().unwrap();
    assert_eq!(choices.len(), 3);
    let correct: Vec<_> = choices
        .iter()
        .filter(|c| c["is_correct"] == true)
        .collect();
    assert_eq!(correct.len(), 1);
    assert_eq!(correct[0]["text"], "4");
}

#[test]
fn show_unknown_format() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "arithmetic.toml", ARITHMETIC);

    quizkit()
        .current_dir(dir.path())
        .arg("show")
        .arg("--questions")
        .arg(&path)
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizkit.toml"))
        .stdout(predicate::str::contains("Created question-sets/example.toml"));

    assert!(dir.path().join("quizkit.toml").exists());
    assert!(dir.path().join("question-sets/example.toml").exists());

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--questions")
        .arg("question-sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("All question sets valid"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    quizkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz question-set toolkit"));
}
