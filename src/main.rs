use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use papercheck::config::Config;
use papercheck::files::{read_txt_file, write_result_file};
use papercheck::output::terminal::display_breakdown;
use papercheck::text::stopwords::StopWordList;
use papercheck::text::tokenizer::Tokenizer;
use papercheck::text::traits::SegmentMode;

/// Papercheck: repeat-rate scoring for plain-text papers.
///
/// Compares a candidate paper against the original and writes the repeat
/// rate (0.00 to 1.00) to the result file.
#[derive(Parser)]
#[command(name = "papercheck", version, about)]
struct Cli {
    /// Original paper (UTF-8 .txt)
    orig_txt: PathBuf,

    /// Candidate paper to check against the original (UTF-8 .txt)
    copy_txt: PathBuf,

    /// Where to write the repeat rate (.txt)
    result_txt: PathBuf,

    /// Segmentation mode: precise or search (overrides PAPERCHECK_SEGMENT_MODE)
    #[arg(long)]
    mode: Option<SegmentMode>,

    /// Also filter the published Chinese and English stop-word lists
    #[arg(long)]
    extended_stop_words: bool,

    /// Print the score breakdown as JSON instead of the terminal summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("papercheck=warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(mode) = cli.mode {
        config.segment_mode = mode;
    }
    if cli.extended_stop_words {
        config.stop_words = StopWordList::Extended;
    }

    let original = read_txt_file(&cli.orig_txt).context("Failed to load original paper")?;
    let candidate = read_txt_file(&cli.copy_txt).context("Failed to load candidate paper")?;

    let tokenizer = Tokenizer::new(config.segment_mode, config.stop_words);
    let original_words = tokenizer.tokenize(&original);
    let candidate_words = tokenizer.tokenize(&candidate);

    info!(
        mode = %config.segment_mode,
        stop_words = %config.stop_words,
        original_tokens = original_words.len(),
        candidate_tokens = candidate_words.len(),
        "Tokenized both papers"
    );

    let breakdown = config.rate.combine(&original_words, &candidate_words);

    write_result_file(&cli.result_txt, breakdown.rate).context("Failed to save result")?;
    info!(rate = breakdown.rate, path = %cli.result_txt.display(), "Result written");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        display_breakdown(&breakdown, &cli.result_txt);
    }

    Ok(())
}
