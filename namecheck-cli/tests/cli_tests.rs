use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PROJECT_RULES: &str = r#"
layer = "project"

[[rule]]
name = "ts-variables"
allowed_casings = ["camelCase"]

[rule.applies_to]
kinds = ["variable", "parameter"]
languages = ["typescript", "javascript"]

[[rule]]
name = "ts-constants"
allowed_casings = ["SCREAMING_SNAKE_CASE"]
severity = "warning"

[rule.applies_to]
kinds = ["constant"]
"#;

fn write_rules(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("rules.toml");
    fs::write(&path, PROJECT_RULES).unwrap();
    path
}

fn write_records(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("records.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "naming-convention compliance checker",
        ));
}

#[test]
fn test_check_reports_violations_with_exit_code_1() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);
    let records = write_records(
        &dir,
        r#"[
            {"text": "first_name", "constructKind": "variable", "languageTag": "typescript"},
            {"text": "lastName", "constructKind": "variable", "languageTag": "typescript"}
        ]"#,
    );

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["check", "--rules"])
        .arg(&rules)
        .arg("--records")
        .arg(&records)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error: `first_name`"))
        .stdout(predicate::str::contains("try: firstName"))
        .stdout(predicate::str::contains("rule: ts-variables (project)"))
        .stdout(predicate::str::contains(
            "Checked 2 identifiers: 1 passed, 1 violations",
        ));
}

#[test]
fn test_check_clean_stream_exits_0() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);
    let records = write_records(
        &dir,
        r#"[{"text": "lastName", "constructKind": "variable", "languageTag": "typescript"}]"#,
    );

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["check", "--rules"])
        .arg(&rules)
        .arg("--records")
        .arg(&records)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Checked 1 identifiers: 1 passed, 0 violations",
        ));
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);
    let records = write_records(
        &dir,
        r#"[{"text": "first_name", "constructKind": "variable", "languageTag": "typescript"}]"#,
    );

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    let output = cmd
        .args(["check", "--output", "json", "--rules"])
        .arg(&rules)
        .arg("--records")
        .arg(&records)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["operation"], "check");
    assert_eq!(value["summary"]["totalViolations"], 1);
    assert_eq!(value["violations"][0]["record"]["text"], "first_name");
    assert_eq!(value["violations"][0]["reasonCode"], "wrongCasing");
    assert_eq!(value["violations"][0]["suggestions"][0], "firstName");
}

#[test]
fn test_check_reads_records_from_stdin() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["check", "--rules"])
        .arg(&rules)
        .write_stdin(concat!(
            r#"{"text": "first_name", "constructKind": "variable", "languageTag": "typescript"}"#,
            "\n",
            r#"{"text": "lastName", "constructKind": "variable", "languageTag": "typescript"}"#,
            "\n",
        ))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error: `first_name`"));
}

#[test]
fn test_check_quiet_suppresses_output() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);
    let records = write_records(
        &dir,
        r#"[{"text": "first_name", "constructKind": "variable", "languageTag": "typescript"}]"#,
    );

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["check", "--quiet", "--rules"])
        .arg(&rules)
        .arg("--records")
        .arg(&records)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_rules_file_exits_2() {
    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["check", "--rules", "/nonexistent/rules.toml"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_malformed_rule_document_exits_2() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        "layer = \"project\"\n[[rule]]\nallowed_casings = [\"wiggleCase\"]\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["check", "--rules"])
        .arg(&path)
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_invalid_record_json_exits_2() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["check", "--rules"])
        .arg(&rules)
        .write_stdin("{not json\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_record_missing_fields_is_skipped() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["check", "--rules"])
        .arg(&rules)
        .write_stdin(concat!(
            "{\"text\": \"x\"}\n",
            r#"{"text": "lastName", "constructKind": "variable", "languageTag": "typescript"}"#,
            "\n",
        ))
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Checked 1 identifiers: 1 passed, 0 violations",
        ))
        .stdout(predicate::str::contains("Skipped 1 malformed records"));
}

#[test]
fn test_check_requires_rules() {
    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments"));
}

#[test]
fn test_rules_command_prints_effective_table() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["rules", "--rules"])
        .arg(&rules)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Loaded 2 rules from 1 document"))
        .stdout(predicate::str::contains(
            "ts-variables (project, error): camelCase",
        ))
        .stdout(predicate::str::contains(
            "ts-constants (project, warning): SCREAMING_SNAKE_CASE",
        ))
        .stdout(predicate::str::contains("kinds: variable, parameter"));
}

#[test]
fn test_rules_command_rejects_never_failing_rule() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(&path, "layer = \"project\"\n[[rule]]\nname = \"noop\"\n").unwrap();

    let mut cmd = Command::cargo_bin("namecheck").unwrap();
    cmd.args(["rules", "--rules"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("noop"));
}
