//! File-level tests for CSV ingestion and config discovery.

use indoc::indoc;
use pretty_assertions::assert_eq;
use recoveriq::config::{discover_config, load_config_from_path, CONFIG_FILE_NAME};
use recoveriq::io::{export_leads_csv, generate_demo_leads, load_leads_csv};
use recoveriq::{build_report, Error, RecoverIqConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_csv_and_build_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        temp_dir.path(),
        "leads.csv",
        indoc! {"
            Lead_ID,Lead_Entity_Disposition,Lead_State,AI_Attempted_Calls,AI_Connected_Calls,Total_Spend_INR
            L1,PTP,completed,3,1,20.00
            L2,RTP,active,5,2,10.00
            L3,Not_Evaluated,active,14,0,30.00
            L4,Unreachable,inactive,0,0,0.00
        "},
    );

    let table = load_leads_csv(&path).unwrap();
    let report = build_report(&table, &RecoverIqConfig::default()).unwrap();

    assert_eq!(report.kpis.total, 4);
    assert_eq!(report.kpis.ptp_pct, 25.0);
    assert_eq!(report.kpis.cost_per_ptp, 60.0);
    assert_eq!(report.kpis.overattempted, 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_leads_csv(&temp_dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_schema_error_message_names_column() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        temp_dir.path(),
        "bad.csv",
        indoc! {"
            disposition,state,attempted_calls,connected_calls,spend
            PTP,active,3,1,twelve
        "},
    );

    let err = load_leads_csv(&path).unwrap_err();
    assert!(err.is_input_error());
    assert!(err.to_string().contains("'Total_Spend_INR'"));
    assert!(err.to_string().contains("'twelve'"));
}

#[test]
fn test_exported_demo_table_reloads_identically() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export").join("demo.csv");
    let table = generate_demo_leads(120, 42).unwrap();

    export_leads_csv(&path, &table).unwrap();
    let reloaded = load_leads_csv(&path).unwrap();

    assert_eq!(reloaded, table);
    let config = RecoverIqConfig::default();
    assert_eq!(
        build_report(&reloaded, &config).unwrap(),
        build_report(&table, &config).unwrap()
    );
}

#[test]
fn test_config_discovered_from_ancestor_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(
        temp_dir.path(),
        CONFIG_FILE_NAME,
        indoc! {"
            [risk]
            min_ptp_pct = 20.0

            [levers]
            max_levers = 2
        "},
    );
    let nested = temp_dir.path().join("campaigns").join("march");
    fs::create_dir_all(&nested).unwrap();

    let config = discover_config(nested);
    assert_eq!(config.risk.min_ptp_pct, 20.0);
    assert_eq!(config.levers.max_levers, 2);
    assert_eq!(config.scoring, RecoverIqConfig::default().scoring);
}

#[test]
fn test_explicit_config_with_bad_benchmarks_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        temp_dir.path(),
        "custom.toml",
        indoc! {"
            [scoring.benchmarks]
            ptp_pct = 0.0
        "},
    );

    let err = load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_config_thresholds_change_the_report() {
    let table = generate_demo_leads(500, 42).unwrap();
    let strict = RecoverIqConfig {
        risk: recoveriq::RiskThresholds {
            max_findings: 1,
            ..Default::default()
        },
        levers: recoveriq::LeverThresholds {
            max_levers: 1,
            ..Default::default()
        },
        ..Default::default()
    };

    let report = build_report(&table, &strict).unwrap();
    assert_eq!(report.risks.len(), 1);
    assert_eq!(report.levers.len(), 1);
}
