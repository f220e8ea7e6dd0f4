use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "llm-readability",
    version,
    about = "Score documents for how easily LLMs can process their text"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
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
    /// Score files, directories, or standard input
    Score(ScoreCommand),
    /// Describe the tier a score falls into
    Explain(ExplainCommand),
    /// List improvement suggestions for a score
    Suggest(SuggestCommand),
    /// Write a default readability.toml
    Init(InitCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Files or directories to score; `-` or nothing reads standard input
    pub paths: Vec<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 1 when any document scores below this value
    #[arg(long)]
    pub warn_below: Option<f64>,
    /// Exit with code 2 when any document scores below this value
    #[arg(long)]
    pub fail_below: Option<f64>,
}

#[derive(Args)]
pub struct ExplainCommand {
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

#[derive(Args)]
pub struct SuggestCommand {
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

#[derive(Args)]
pub struct InitCommand {
    #[arg(default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub force: bool,
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}
