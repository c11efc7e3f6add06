pub mod json;
pub mod markdown;
pub mod terminal;

use crate::cli::OutputFormat;
use crate::formatting::FormattingConfig;
use crate::report::DashboardReport;
use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

pub use json::{format_json, output_json, ReportMetadata};
pub use markdown::{format_markdown, output_markdown};
pub use terminal::{format_terminal, output_terminal};

/// Where the analysed table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    File(PathBuf),
    Demo { rows: usize, seed: u64 },
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Demo { rows, seed } => write!(f, "demo ({rows} rows, seed {seed})"),
        }
    }
}

pub fn output_report(
    report: &DashboardReport,
    source: &ReportSource,
    format: OutputFormat,
    output_file: Option<PathBuf>,
    formatting_config: FormattingConfig,
) -> Result<()> {
    match format {
        OutputFormat::Json => output_json(report, source, output_file),
        OutputFormat::Markdown => output_markdown(report, source, output_file),
        OutputFormat::Terminal => {
            if is_markdown_file(&output_file) {
                output_markdown(report, source, output_file)
            } else {
                output_terminal(report, source, output_file, formatting_config)
            }
        }
    }
}

/// Write rendered output to `output_file`, or stdout when absent
fn emit(content: &str, output_file: Option<PathBuf>) -> Result<()> {
    match output_file {
        Some(path) => {
            crate::io::write_file(&path, content)?;
            log::info!("Report written to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn is_markdown_file(output_file: &Option<PathBuf>) -> bool {
    output_file
        .as_deref()
        .and_then(Path::extension)
        .map(|ext| ext == "md")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_extension_detection() {
        assert!(is_markdown_file(&Some(PathBuf::from("out/report.md"))));
        assert!(!is_markdown_file(&Some(PathBuf::from("report.txt"))));
        assert!(!is_markdown_file(&None));
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(
            ReportSource::File(PathBuf::from("leads.csv")).to_string(),
            "leads.csv"
        );
        assert_eq!(
            ReportSource::Demo { rows: 500, seed: 42 }.to_string(),
            "demo (500 rows, seed 42)"
        );
    }
}
