//! Benchmark command
//!
//! Runs the solver over a list of hidden words and aggregates guess-count
//! statistics. Sessions are independent, so each hidden word gets its own
//! puzzle on its own rayon worker; an optional shared assessment memo is the
//! only state crossing session boundaries.

use crate::core::Word;
use crate::error::Result;
use crate::puzzle::{AssessmentCache, Puzzle};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of one solve session
pub struct WordOutcome {
    pub word: Word,
    pub guesses: Vec<Word>,
    pub guess_count: u32,
}

/// Aggregated result of a benchmark run
pub struct BenchmarkReport {
    pub outcomes: Vec<WordOutcome>,
    pub total_words: usize,
    pub total_guesses: u64,
    pub average_guesses: f64,
    pub max_guesses: u32,
    pub distribution: HashMap<u32, usize>,
    pub over_six: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver over every word in `hidden_words`
///
/// When `shared_cache` is set, all sessions memoize assessments through the
/// same synchronized cache; otherwise each session computes patterns
/// directly.
///
/// # Errors
/// Fails on the first session that errors; a benchmark over a vocabulary
/// that triggers an invariant violation is not a valid measurement.
pub fn run_benchmark(
    solver: &Solver,
    hidden_words: &[Word],
    shared_cache: Option<&Arc<AssessmentCache>>,
) -> Result<BenchmarkReport> {
    let progress = ProgressBar::new(hidden_words.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes = hidden_words
        .par_iter()
        .map(|word| {
            let mut puzzle = match shared_cache {
                Some(cache) => Puzzle::new(word.clone()).with_cache(Arc::clone(cache)),
                None => Puzzle::new(word.clone()),
            };
            let guesses = solver.solve(&mut puzzle)?;
            progress.inc(1);
            Ok(WordOutcome {
                word: word.clone(),
                guess_count: puzzle.guess_count(),
                guesses,
            })
        })
        .collect::<Result<Vec<WordOutcome>>>()?;

    progress.finish_and_clear();
    let duration = start.elapsed();

    let total_words = outcomes.len();
    let total_guesses: u64 = outcomes.iter().map(|o| u64::from(o.guess_count)).sum();
    let max_guesses = outcomes.iter().map(|o| o.guess_count).max().unwrap_or(0);

    let mut distribution: HashMap<u32, usize> = HashMap::new();
    let mut over_six = Vec::new();
    for outcome in &outcomes {
        *distribution.entry(outcome.guess_count).or_insert(0) += 1;
        if outcome.guess_count > 6 {
            over_six.push(outcome.word.clone());
        }
    }

    let average_guesses = if total_words == 0 {
        0.0
    } else {
        total_guesses as f64 / total_words as f64
    };

    Ok(BenchmarkReport {
        outcomes,
        total_words,
        total_guesses,
        average_guesses,
        max_guesses,
        distribution,
        over_six,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::MIN_POSITIVE),
    })
}
