// End-to-end tests for the leadset binary.
// Run with: cargo test -p leadset-cli --test dedupe_cli

use std::path::{Path, PathBuf};
use std::process::Command;

fn leadset() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_leadset"));
    // The binary honors LEADSET_CONFIG; tests must not inherit it.
    cmd.env_remove("LEADSET_CONFIG");
    cmd
}

// Three records: the second replaces the first by email, the third
// re-offers id "2" with an older date and drops.
const LEADS: &str = r#"{
  "leads": [
    {"_id": "1", "email": "a@x.com", "firstName": "Ann", "lastName": "Lee", "address": "1 Elm St", "entryDate": "2024-05-01"},
    {"_id": "2", "email": "a@x.com", "firstName": "Bob", "lastName": "Lee", "address": "2 Elm St", "entryDate": "2024-05-02"},
    {"_id": "2", "email": "b@x.com", "firstName": "Cal", "lastName": "Lee", "address": "3 Elm St", "entryDate": "2024-04-30"}
  ]
}"#;

fn write_leads(dir: &Path) -> PathBuf {
    let path = dir.join("leads.json");
    std::fs::write(&path, LEADS).unwrap();
    path
}

#[test]
fn dedupe_writes_both_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_leads(dir.path());

    let out = leadset().arg("dedupe").arg(&input).output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let dupless = std::fs::read_to_string(dir.path().join("leads-dupless.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&dupless).unwrap();
    let kept = doc["leads"].as_array().unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0]["_id"], "2");
    assert_eq!(kept[0]["email"], "a@x.com");

    let changelog = std::fs::read_to_string(dir.path().join("leads-changelog.txt")).unwrap();
    assert!(changelog.starts_with("CHANGE LOGS:\n"));
    assert!(changelog.contains("id:    1 -> 2"));

    // Changelog echoed to stdout, summary on stderr.
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--- START CHANGE LOG ---"));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("3 records in"));
    assert!(stderr.contains("1 kept"));
    assert!(stderr.contains("1 dropped"));
}

#[test]
fn json_flag_replaces_changelog_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_leads(dir.path());

    let out = leadset().arg("dedupe").arg(&input).arg("--json").output().unwrap();
    assert!(out.status.success());

    let result: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(result["summary"]["input"], 3);
    assert_eq!(result["summary"]["kept"], 1);
    assert_eq!(result["summary"]["replaced"], 1);
    assert_eq!(result["summary"]["dropped"], 1);
    assert_eq!(result["changes"][0]["from"]["_id"], "1");
    assert_eq!(result["changes"][0]["to"]["_id"], "2");
}

#[test]
fn quiet_suppresses_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_leads(dir.path());

    let out = leadset().arg("dedupe").arg(&input).arg("--quiet").output().unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn output_flag_overrides_dupless_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_leads(dir.path());
    let target = dir.path().join("clean.json");

    let out = leadset()
        .arg("dedupe")
        .arg(&input)
        .arg("--output")
        .arg(&target)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(target.exists());
    // The changelog still lands next to the input.
    assert!(dir.path().join("leads-changelog.txt").exists());
}

#[test]
fn missing_input_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();

    let out = leadset()
        .arg("dedupe")
        .arg(dir.path().join("nope.json"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(5));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: cannot read"));
    assert!(stderr.contains("hint:"));
}

#[test]
fn malformed_document_exits_parse() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("leads.json");
    std::fs::write(&input, "{this is not json").unwrap();

    let out = leadset().arg("dedupe").arg(&input).output().unwrap();
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("document parse error"));
}

#[test]
fn missing_field_names_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("leads.json");
    std::fs::write(
        &input,
        r#"{"leads": [{"_id": "1", "email": "a@x.com", "firstName": "", "lastName": "", "address": ""}]}"#,
    )
    .unwrap();

    let out = leadset().arg("dedupe").arg(&input).output().unwrap();
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("lead 0"));
}

#[test]
fn fail_on_drop_exits_dropped_after_writing_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_leads(dir.path());
    let config = dir.path().join("run.toml");
    std::fs::write(&config, "fail_on_drop = true\n").unwrap();

    let out = leadset()
        .arg("dedupe")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("fail_on_drop"));

    // The outputs were written before the failing exit.
    assert!(dir.path().join("leads-dupless.json").exists());
    assert!(dir.path().join("leads-changelog.txt").exists());
}

#[test]
fn invalid_config_exits_parse() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_leads(dir.path());
    let config = dir.path().join("run.toml");
    std::fs::write(&config, "array_key = \"\"\n").unwrap();

    let out = leadset()
        .arg("dedupe")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("config validation error"));
}

#[test]
fn validate_reports_record_count() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_leads(dir.path());

    let out = leadset().arg("validate").arg(&input).output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("valid: 3 lead record(s)"));

    // Validate writes nothing.
    assert!(!dir.path().join("leads-dupless.json").exists());
}
