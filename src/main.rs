mod check;
mod cli;
mod config;
mod error;
mod lint;
mod report;
mod types;

use crate::check::CheckClient;
use crate::config::{GithubContext, RunSettings};
use crate::error::Result;
use crate::types::report::{CheckReport, Verdict};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    // Neutral exit used by workflow runners for a completed-but-failed check.
    pub const LINT_FAILURE: i32 = 78;
    pub const RUNTIME_FAILURE: i32 = 1;
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn lint_target(linter_bin: &str, target: &str) -> Result<CheckReport> {
    let raw = lint::runner::capture_output(linter_bin, target)?;
    let results = lint::parse_results(&raw)?;
    Ok(report::build(&results))
}

fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Success => exit_code::SUCCESS,
        Verdict::Failure => exit_code::LINT_FAILURE,
    }
}

fn execute_run(
    client: &CheckClient,
    check_id: u64,
    settings: &RunSettings,
    target: &str,
) -> Result<i32> {
    let report = lint_target(&settings.linter_bin, target)?;
    println!("{}", report.summary);
    client.complete(check_id, &settings.check_name, &report)?;
    Ok(verdict_exit_code(report.verdict))
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Run(cmd) => {
            let cwd = std::env::current_dir()?;
            let file_cfg = config::load_file_config(&cwd)?;
            let settings = RunSettings::resolve(cmd.linter_bin.as_deref(), file_cfg.as_ref());
            let target = config::resolve_target(cmd.target)?;

            let ctx = GithubContext::from_env()?;
            let client = CheckClient::new(ctx);
            let check_id = client.create(&settings.check_name)?;

            match execute_run(&client, check_id, &settings, &target) {
                Ok(code) => Ok(code),
                Err(e) => {
                    // Best effort: never leave the check stuck in_progress.
                    if let Err(update_err) = client.complete_as_failed(check_id) {
                        warn!("could not mark check run {check_id} as failed: {update_err}");
                    }
                    Err(e)
                }
            }
        }
        cli::Commands::Preview(cmd) => {
            let cwd = std::env::current_dir()?;
            let file_cfg = config::load_file_config(&cwd)?;
            let settings = RunSettings::resolve(cmd.linter_bin.as_deref(), file_cfg.as_ref());

            let raw = match cmd.results_file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let target = config::resolve_target(cmd.target)?;
                    lint::runner::capture_output(&settings.linter_bin, &target)?
                }
            };
            let results = lint::parse_results(&raw)?;
            let built = report::build(&results);

            let output_format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            let rendered = report::render(&built, output_format)?;
            print!("{rendered}");

            Ok(verdict_exit_code(built.verdict))
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
