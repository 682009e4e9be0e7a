use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docklint-check",
    version,
    about = "Dockerfile lint check-run reporter"
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Run(RunCommand),
    Preview(PreviewCommand),
}

/// Lint the target and publish the result as a GitHub check run.
#[derive(Args)]
pub struct RunCommand {
    /// Lint target path; falls back to the INPUT_TARGET environment variable
    pub target: Option<String>,

    /// Linter binary to invoke instead of `dockerfilelint`
    #[arg(long)]
    pub linter_bin: Option<String>,
}

/// Lint the target and print the report locally, without GitHub.
#[derive(Args)]
pub struct PreviewCommand {
    /// Lint target path; falls back to the INPUT_TARGET environment variable
    pub target: Option<String>,

    /// Read captured linter JSON from a file instead of running the linter
    #[arg(long, conflicts_with = "target")]
    pub results_file: Option<PathBuf>,

    /// Linter binary to invoke instead of `dockerfilelint`
    #[arg(long)]
    pub linter_bin: Option<String>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
