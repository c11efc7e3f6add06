use super::ReportSource;
use crate::report::DashboardReport;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    pub version: &'static str,
    /// RFC 3339 timestamp
    pub generated_at: String,
    pub source: String,
    pub rows: usize,
}

impl ReportMetadata {
    pub fn new(source: &ReportSource, rows: usize) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            generated_at: chrono::Utc::now().to_rfc3339(),
            source: source.to_string(),
            rows,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metadata: ReportMetadata,
    #[serde(flatten)]
    report: &'a DashboardReport,
}

pub fn format_json(report: &DashboardReport, source: &ReportSource) -> Result<String> {
    let wrapped = JsonReport {
        metadata: ReportMetadata::new(source, report.kpis.total),
        report,
    };
    Ok(serde_json::to_string_pretty(&wrapped)?)
}

pub fn output_json(
    report: &DashboardReport,
    source: &ReportSource,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let json = format_json(report, source)?;
    super::emit(&json, output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RecoverIqConfig;
    use crate::io::generate_demo_leads;
    use crate::report::build_report;
    use std::fs;
    use tempfile::TempDir;

    fn demo_report() -> DashboardReport {
        let table = generate_demo_leads(50, 3).unwrap();
        build_report(&table, &RecoverIqConfig::default()).unwrap()
    }

    #[test]
    fn test_json_carries_metadata_and_groups() {
        let report = demo_report();
        let source = ReportSource::Demo { rows: 50, seed: 3 };
        let value: serde_json::Value =
            serde_json::from_str(&format_json(&report, &source).unwrap()).unwrap();
        assert_eq!(value["metadata"]["rows"], 50);
        assert_eq!(value["metadata"]["source"], "demo (50 rows, seed 3)");
        assert!(value["metadata"]["generated_at"].as_str().unwrap().contains('T'));
        for key in ["kpis", "score", "funnel", "risks", "levers", "health"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_output_json_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("nested").join("report.json");
        let source = ReportSource::Demo { rows: 50, seed: 3 };

        output_json(&demo_report(), &source, Some(nested_path.clone())).unwrap();

        let content = fs::read_to_string(&nested_path).unwrap();
        assert!(content.contains("\"score\""));
    }
}
