mod cli;

use clap::Parser;
use llm_readability::batch;
use llm_readability::config;
use llm_readability::engine::{self, Score};
use llm_readability::error::ReadabilityError;
use llm_readability::extract;
use llm_readability::report::{self, OutputFormat};
use llm_readability::types::config::Thresholds;
use llm_readability::types::report::BatchReport;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

impl From<cli::ReportFormat> for OutputFormat {
    fn from(format: cli::ReportFormat) -> Self {
        match format {
            cli::ReportFormat::Json => OutputFormat::Json,
            cli::ReportFormat::Md => OutputFormat::Md,
            cli::ReportFormat::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("llm_readability={level}")));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(filter)
        .init();
}

fn checked_score(score: Score) -> Result<Score, ReadabilityError> {
    if score.is_finite() && (0.0..=100.0).contains(&score) {
        Ok(score)
    } else {
        Err(ReadabilityError::InvalidScore(score.to_string()))
    }
}

fn exit_code_for(report: &BatchReport, thresholds: Thresholds) -> i32 {
    let Some(lowest) = report.lowest_score() else {
        return exit_code::SUCCESS;
    };
    if thresholds.fail_below.is_some_and(|min| lowest < min) {
        exit_code::BLOCKING
    } else if thresholds.warn_below.is_some_and(|min| lowest < min) {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run(cli: cli::Cli) -> Result<i32, ReadabilityError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let root = std::env::current_dir()?;
            let loaded = config::load_config(&root)?;
            if loaded.is_none() {
                tracing::info!("no {} found; using defaults", config::DEFAULT_CONFIG_FILE);
            }
            let cfg = loaded.unwrap_or_default();

            let configured = cfg.thresholds();
            let thresholds = Thresholds {
                warn_below: cmd.warn_below.or(configured.warn_below),
                fail_below: cmd.fail_below.or(configured.fail_below),
            };
            thresholds.validate()?;

            let inputs = if cmd.paths.is_empty() {
                vec![PathBuf::from("-")]
            } else {
                cmd.paths
            };
            let documents = extract::collect_documents(&inputs, &cfg)?;
            let batch_report = batch::aggregate(&documents);

            let output_format = cmd
                .format
                .map(OutputFormat::from)
                .or(cfg.report_format())
                .unwrap_or(OutputFormat::Md);
            let rendered = report::render(&batch_report, output_format)?;
            println!("{rendered}");

            Ok(exit_code_for(&batch_report, thresholds))
        }
        cli::Commands::Explain(cmd) => {
            let score = checked_score(cmd.score)?;
            let explanation = engine::explain(score);
            println!("{} ({:.1})", explanation.level, score);
            println!("training value: {}", explanation.training_value);
            println!("{}", explanation.description);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Suggest(cmd) => {
            let score = checked_score(cmd.score)?;
            println!("suggestions:");
            for suggestion in engine::suggest(score) {
                println!("- {}", suggestion.text);
                println!("  Example: {}", suggestion.example);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            if cmd.dry_run {
                print!("{}", config::DEFAULT_CONFIG_TEMPLATE);
                return Ok(exit_code::SUCCESS);
            }
            let path = config::write_default_config(&cmd.path, cmd.force)?;
            println!("config file: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
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
