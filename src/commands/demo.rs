use super::ReportSettings;
use crate::cli::ReportArgs;
use crate::output::{self, ReportSource};
use crate::{io, report};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct DemoConfig {
    pub rows: usize,
    pub seed: u64,
    pub export_csv: Option<PathBuf>,
    pub report: ReportArgs,
}

pub fn handle_demo(config: DemoConfig) -> Result<()> {
    let settings = ReportSettings::resolve(&config.report)?;

    let table = io::generate_demo_leads(config.rows, config.seed)?;
    if let Some(path) = &config.export_csv {
        io::export_leads_csv(path, &table)
            .with_context(|| format!("Failed to export demo leads to {}", path.display()))?;
    }

    let report = report::build_report(&table, &settings.config)
        .context("Failed to analyze demo leads")?;

    output::output_report(
        &report,
        &ReportSource::Demo {
            rows: config.rows,
            seed: config.seed,
        },
        settings.format,
        config.report.output,
        settings.formatting,
    )
}
