//! relnotes - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use relnotes::classify::analyze_commits_or_empty;
use relnotes::git::branch_range;
use relnotes::notes::{
    generate_release_notes, generate_summary, write_release_notes, DEFAULT_OUTPUT_FILE,
};
use relnotes::summary::{HttpSummarizer, SummarizerConfig, API_KEY_ENV_VAR, API_URL_ENV_VAR};

/// Generate release notes from the commits between two branches.
#[derive(Parser, Debug)]
#[command(name = "relnotes")]
#[command(about = "Generate release notes from the commits between two branches")]
#[command(version)]
struct Cli {
    /// Branch whose new commits are described
    source_branch: String,

    /// Branch the source branch is compared against
    target_branch: String,

    /// Path to the git repository
    #[arg(default_value = ".")]
    repo_path: PathBuf,

    /// Path to the release notes file
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Print the release notes without writing the file
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    let cli = parse_args();

    // Variables already set in the environment take precedence
    dotenv::dotenv().ok();

    init_tracing();

    if let Err(e) = run(cli).await {
        error!("An error occurred: {:#}", e);
    }
}

/// Parse arguments. Usage errors exit with code 1; help and version exit 0.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}

/// Log to stderr so stdout carries only the release notes.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = SummarizerConfig::from_env();
    if !config.is_enabled() {
        warn!(
            "{} or {} not set. Skipping LLM summarization.",
            API_URL_ENV_VAR, API_KEY_ENV_VAR
        );
    }
    let summarizer = HttpSummarizer::new(config);

    let range = branch_range(&cli.source_branch, &cli.target_branch);
    info!(range = %range, repo = %cli.repo_path.display(), "Analyzing commits");

    let classification = analyze_commits_or_empty(&cli.repo_path, &range);
    let release_notes = generate_release_notes(&classification, &summarizer).await;

    println!("{}", release_notes);

    if cli.dry_run {
        return Ok(());
    }

    write_release_notes(&cli.output, &release_notes)
        .context("Failed to write release notes")?;

    info!("{}", generate_summary(&classification, &cli.output));

    Ok(())
}
