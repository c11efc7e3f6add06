use anyhow::Result;
use clap::Parser;
use recoveriq::cli::{Cli, Commands};
use recoveriq::commands::{self, demo::DemoConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // One line: context chain joined with ": "
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze { input, report } => commands::handle_analyze(&input, report),
        Commands::Demo {
            rows,
            seed,
            export_csv,
            report,
        } => commands::handle_demo(DemoConfig {
            rows,
            seed,
            export_csv,
            report,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

/// Warn by default; each -v raises the level. RUST_LOG still takes precedence.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
