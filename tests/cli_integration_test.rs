//! Binary-level tests for the recoveriq CLI.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn recoveriq(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recoveriq").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("RECOVERIQ_CONFIG");
    cmd
}

#[test]
fn test_demo_json_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let output = recoveriq(&temp_dir)
        .args(["demo", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert_eq!(json["metadata"]["rows"], 500);
    assert_eq!(json["metadata"]["source"], "demo (500 rows, seed 42)");
    for key in ["kpis", "score", "funnel", "risks", "levers", "health"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn test_demo_is_reproducible_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let run = |name: &str| {
        let path = temp_dir.path().join(name);
        recoveriq(&temp_dir)
            .args(["demo", "--rows", "200", "--seed", "7", "-f", "json", "-o"])
            .arg(&path)
            .assert()
            .success();
        let mut json: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        json.as_object_mut().unwrap().remove("metadata");
        json
    };

    assert_eq!(run("first.json"), run("second.json"));
}

#[test]
fn test_analyze_exported_demo_csv() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("data").join("leads.csv");
    let md_path = temp_dir.path().join("reports").join("report.md");

    recoveriq(&temp_dir)
        .args(["demo", "--rows", "150", "-f", "json", "-o", "demo.json", "--export-csv"])
        .arg(&csv_path)
        .assert()
        .success();
    assert!(csv_path.exists());

    recoveriq(&temp_dir)
        .arg("analyze")
        .arg(&csv_path)
        .arg("-o")
        .arg(&md_path)
        .assert()
        .success();

    let markdown = fs::read_to_string(&md_path).unwrap();
    assert!(markdown.starts_with("# Collections Campaign Report"));
    assert!(markdown.contains("## Risk Radar"));
}

#[test]
fn test_analyze_reports_missing_columns_on_one_line() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("partial.csv");
    fs::write(
        &csv_path,
        indoc! {"
            Lead_ID,Lead_State,AI_Attempted_Calls
            L1,active,3
        "},
    )
    .unwrap();

    let output = recoveriq(&temp_dir)
        .arg("analyze")
        .arg(&csv_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim().lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.starts_with("Error: Invalid lead table"), "stderr: {stderr}");
    assert!(stderr.contains(
        "Missing columns: AI_Connected_Calls, Lead_Entity_Disposition, Total_Spend_INR"
    ));
}

#[test]
fn test_plain_terminal_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = recoveriq(&temp_dir)
        .args(["demo", "--rows", "60", "--plain"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("02 Campaign Health Score"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_init_writes_config_once() {
    let temp_dir = TempDir::new().unwrap();

    recoveriq(&temp_dir).arg("init").assert().success();
    let config_path = temp_dir.path().join(".recoveriq.toml");
    assert!(config_path.exists());

    let second = recoveriq(&temp_dir).arg("init").output().unwrap();
    assert!(!second.status.success());

    recoveriq(&temp_dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_discovered_config_sets_default_format() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".recoveriq.toml"),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let output = recoveriq(&temp_dir).args(["demo", "--rows", "40"]).output().unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kpis"]["total"], 40);
}

#[test]
fn test_config_path_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("policies").join("team.toml");
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "[output]\ndefault_format = \"json\"\n").unwrap();

    let output = recoveriq(&temp_dir)
        .env("RECOVERIQ_CONFIG", &config_path)
        .args(["demo", "--rows", "25"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kpis"]["total"], 25);
}
