use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recoveriq")]
#[command(about = "Collections campaign analytics: KPIs, health score, funnel, risks and levers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a lead table exported as CSV
    Analyze {
        /// CSV file with one row per lead
        input: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Analyze a seeded synthetic lead table
    Demo {
        /// Number of synthetic leads
        #[arg(long, default_value_t = crate::io::DEFAULT_DEMO_ROWS)]
        rows: usize,

        /// Random seed; the same seed always produces the same table
        #[arg(long, default_value_t = crate::io::DEFAULT_DEMO_SEED)]
        seed: u64,

        /// Also write the generated table to this CSV file
        #[arg(long = "export-csv")]
        export_csv: Option<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Options shared by every command that renders a report
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Output format (defaults to the config's default_format, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to the nearest .recoveriq.toml)
    #[arg(short, long, env = "RECOVERIQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Plain output: ASCII only, no colors
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    /// -v: info
    /// -vv: debug, including each rule that fires
    /// -vvv: trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse a config-file format name
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::Analyze { report, .. } | Self::Demo { report, .. } => report.verbosity,
            Self::Init { .. } => 0,
        }
    }
}
