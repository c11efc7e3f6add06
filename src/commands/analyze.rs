use super::ReportSettings;
use crate::cli::ReportArgs;
use crate::output::{self, ReportSource};
use crate::{io, report};
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_analyze(input: &Path, args: ReportArgs) -> Result<()> {
    let settings = ReportSettings::resolve(&args)?;

    let table = io::load_leads_csv(input).map_err(|e| load_error(input, e))?;
    let report = report::build_report(&table, &settings.config)
        .with_context(|| format!("Failed to analyze {}", input.display()))?;

    output::output_report(
        &report,
        &ReportSource::File(input.to_path_buf()),
        settings.format,
        args.output,
        settings.formatting,
    )
}

/// Input-table problems and read failures get different context lines
fn load_error(input: &Path, err: crate::Error) -> anyhow::Error {
    let context = if err.is_input_error() {
        format!("Invalid lead table {}", input.display())
    } else {
        format!("Failed to load leads from {}", input.display())
    };
    anyhow::Error::new(err).context(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_load_error_context_depends_on_error_kind() {
        let input = Path::new("leads.csv");

        let err = load_error(input, Error::missing_columns(["Lead_State"]));
        assert_eq!(
            format!("{err:#}"),
            "Invalid lead table leads.csv: Missing columns: Lead_State"
        );

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = load_error(input, Error::from(io));
        assert_eq!(
            format!("{err:#}"),
            "Failed to load leads from leads.csv: not found"
        );
    }
}
