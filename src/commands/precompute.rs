//! Table precompute command
//!
//! Builds the pattern frequency and information tables for a vocabulary
//! pair and writes both cache files, so later runs can skip the expensive
//! full-vocabulary computation.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{InformationTable, PatternFrequencyTable};
use crate::storage;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Build both tables over (vocabulary × possible) and write them to disk
///
/// The information table's probabilities are taken over the possible set
/// the frequencies were built against, so the pair is self-consistent.
///
/// # Errors
/// Propagates table-construction failures (mixed lengths, empty possible
/// set) and cache-write I/O errors.
pub fn run_precompute(
    vocabulary: &[Word],
    possible_words: &[Word],
    frequencies_path: &Path,
    information_path: &Path,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner.set_message(format!(
        "Computing pattern frequencies ({} x {} words)...",
        vocabulary.len(),
        possible_words.len()
    ));
    let frequencies = PatternFrequencyTable::build(vocabulary, possible_words)?;

    spinner.set_message("Computing expected information...");
    let information = InformationTable::build(&frequencies, possible_words.len())?;

    spinner.set_message(format!("Writing {}...", frequencies_path.display()));
    storage::save_frequencies(frequencies_path, &frequencies)?;

    spinner.set_message(format!("Writing {}...", information_path.display()));
    storage::save_information(information_path, &information)?;

    spinner.finish_with_message(format!(
        "Cached tables for {} scoring words",
        frequencies.len()
    ));
    Ok(())
}
