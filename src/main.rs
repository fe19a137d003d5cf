//! Infordle - CLI
//!
//! Entropy-maximizing Wordle solver: solve single words, benchmark a whole
//! vocabulary, or precompute table caches for faster startup.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use infordle::{
    commands::{run_benchmark, run_precompute, solve_word},
    core::Word,
    output::{print_benchmark_report, print_solve_result},
    puzzle::AssessmentCache,
    solver::Solver,
    storage,
    wordlists::load_from_file,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "infordle",
    about = "Wordle solver maximizing expected information per guess",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Scoring vocabulary file, one word per line
    #[arg(short = 'v', long, global = true, default_value = "data/official_words.txt")]
    vocabulary: PathBuf,

    /// Possible hidden words file, one word per line
    #[arg(short = 'p', long, global = true, default_value = "data/hidden_words.txt")]
    possible: PathBuf,

    /// Precomputed pattern-frequency cache (requires --information)
    #[arg(long, global = true)]
    frequencies: Option<PathBuf>,

    /// Precomputed information cache (requires --frequencies)
    #[arg(long, global = true)]
    information: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific hidden word
    Solve {
        /// The hidden word to solve
        word: String,

        /// Show per-guess information values
        #[arg(long)]
        verbose: bool,
    },

    /// Run the solver over every possible hidden word and report statistics
    Benchmark {
        /// Limit the number of hidden words tested
        #[arg(short, long)]
        limit: Option<usize>,

        /// Share one synchronized assessment memo across sessions
        #[arg(long)]
        shared_cache: bool,
    },

    /// Compute the table pair and write it to the cache paths
    Precompute,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocabulary = load_from_file(&cli.vocabulary)
        .with_context(|| format!("failed to read vocabulary {}", cli.vocabulary.display()))?;
    let possible = load_from_file(&cli.possible)
        .with_context(|| format!("failed to read possible words {}", cli.possible.display()))?;

    match cli.command {
        Commands::Solve { ref word, verbose } => {
            let solver = build_solver(&cli, vocabulary, possible)?;
            let target = Word::new(word).context("invalid target word")?;
            let result = solve_word(&target, &solver)?;
            print_solve_result(&result, verbose);
        }
        Commands::Benchmark {
            limit,
            shared_cache,
        } => {
            let hidden_words: Vec<Word> = match limit {
                Some(n) => possible.iter().take(n).cloned().collect(),
                None => possible.clone(),
            };
            let solver = build_solver(&cli, vocabulary, possible)?;

            println!("Benchmarking {} hidden words...", hidden_words.len());
            let cache = shared_cache.then(|| Arc::new(AssessmentCache::new()));
            let report = run_benchmark(&solver, &hidden_words, cache.as_ref())?;
            print_benchmark_report(&report);
        }
        Commands::Precompute => {
            let (Some(frequencies), Some(information)) = (&cli.frequencies, &cli.information)
            else {
                bail!("precompute requires both --frequencies and --information output paths");
            };
            run_precompute(&vocabulary, &possible, frequencies, information)?;
        }
    }

    Ok(())
}

fn build_solver(cli: &Cli, vocabulary: Vec<Word>, possible: Vec<Word>) -> Result<Solver> {
    let tables = storage::load_table_source(
        cli.frequencies.as_deref(),
        cli.information.as_deref(),
    )?;
    Ok(Solver::new(vocabulary, possible, tables)?)
}
