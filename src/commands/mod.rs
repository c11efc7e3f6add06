//! CLI command implementations for recoveriq.
//!
//! Available commands:
//! - **analyze**: Build a report from a lead table CSV
//! - **demo**: Build a report from a seeded synthetic lead table
//! - **init**: Write a commented default `.recoveriq.toml`

pub mod analyze;
pub mod demo;
pub mod init;

pub use analyze::handle_analyze;
pub use demo::handle_demo;
pub use init::init_config;

use crate::cli::{OutputFormat, ReportArgs};
use crate::config::{self, RecoverIqConfig};
use crate::formatting::FormattingConfig;
use anyhow::{Context, Result};

/// Config, format and formatting resolved from shared report options
pub struct ReportSettings {
    pub config: RecoverIqConfig,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

impl ReportSettings {
    pub fn resolve(args: &ReportArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => config::load_config_from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => config::load_config(),
        };
        let format = resolve_format(args.format, &config);
        let formatting = if args.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env()
        };

        Ok(Self {
            config,
            format,
            formatting,
        })
    }
}

/// CLI flag first, then the config's default_format, then terminal
fn resolve_format(cli_format: Option<OutputFormat>, config: &RecoverIqConfig) -> OutputFormat {
    if let Some(format) = cli_format {
        return format;
    }
    let configured = config
        .output
        .as_ref()
        .and_then(|output| output.default_format.as_deref());
    match configured {
        Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
            log::warn!("Unknown default_format '{}' in config. Using terminal.", name);
            OutputFormat::Terminal
        }),
        None => OutputFormat::Terminal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    fn with_default_format(name: &str) -> RecoverIqConfig {
        RecoverIqConfig {
            output: Some(OutputConfig {
                default_format: Some(name.to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_cli_format_wins() {
        let config = with_default_format("markdown");
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), &config),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_config_format_used_when_flag_absent() {
        assert_eq!(
            resolve_format(None, &with_default_format("markdown")),
            OutputFormat::Markdown
        );
        assert_eq!(
            resolve_format(None, &with_default_format("xml")),
            OutputFormat::Terminal
        );
        assert_eq!(
            resolve_format(None, &RecoverIqConfig::default()),
            OutputFormat::Terminal
        );
    }
}
