use std::path::PathBuf;

use clap::{Parser, Subcommand};

use article_quality::config::Config;
use article_quality::logging::init_logging;
use article_quality::pipeline;
use article_quality::pipeline::processing::quality_gate::{QualityGate, RuleSet};

#[derive(Parser)]
#[command(name = "article-quality")]
#[command(about = "Normalization and quality validation for scraped article batches")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a raw article batch into cleaned output
    Clean {
        /// Raw batch file to read
        #[arg(long)]
        input: Option<PathBuf>,
        /// Cleaned batch file to write
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Score a cleaned batch, write the quality report, then keep only
    /// valid records
    Validate {
        /// Cleaned batch file to score (overwritten with valid records)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Quality report file to write
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Run clean and validate end to end
    Pipeline {
        /// Raw batch file to read
        #[arg(long)]
        input: Option<PathBuf>,
        /// Cleaned batch file to write
        #[arg(long)]
        output: Option<PathBuf>,
        /// Quality report file to write
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging();

    let config = Config::load()?;
    let gate = QualityGate::with_rules(RuleSet {
        min_content_length: config.rules.min_content_length,
    });

    match cli.command {
        Commands::Clean { input, output } => {
            let input = input.unwrap_or_else(|| config.paths.input.clone());
            let output = output.unwrap_or_else(|| config.paths.cleaned.clone());
            pipeline::run_clean(&input, &output)?;
        }
        Commands::Validate { input, report } => {
            let input = input.unwrap_or_else(|| config.paths.cleaned.clone());
            let report = report.unwrap_or_else(|| config.paths.report.clone());
            pipeline::run_validate(&gate, &input, &report)?;
        }
        Commands::Pipeline {
            input,
            output,
            report,
        } => {
            let input = input.unwrap_or_else(|| config.paths.input.clone());
            let output = output.unwrap_or_else(|| config.paths.cleaned.clone());
            let report = report.unwrap_or_else(|| config.paths.report.clone());
            pipeline::run_pipeline(&gate, &input, &output, &report)?;
        }
    }

    Ok(())
}
