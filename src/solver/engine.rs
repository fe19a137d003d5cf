//! The solve loop
//!
//! Each iteration guesses the word with the most expected information,
//! narrows the possible-solution set by the bucket matching the observed
//! feedback, and rebuilds the tables over the survivors. The loop ends when
//! the feedback is all-correct, or early when a single candidate remains.

use super::{InformationTable, PatternFrequencyTable};
use crate::core::Word;
use crate::error::{Error, Result};
use crate::puzzle::Puzzle;
use rustc_hash::FxHashSet;
use std::borrow::Cow;

/// Where the solver's initial table pair comes from
///
/// Computing the pair over a full vocabulary is expensive, so callers may
/// substitute deserialized tables from a [`crate::storage`] cache. The
/// solver does not validate that prebuilt tables match the vocabularies in
/// use; that correspondence is the caller's responsibility.
pub enum TableSource {
    /// Compute the tables from the vocabulary at construction time
    Compute,
    /// Use an already-deserialized table pair
    Prebuilt {
        frequencies: PatternFrequencyTable,
        information: InformationTable,
    },
}

/// Information-theoretic Wordle solver
///
/// Holds the full scoring vocabulary (immutable for the solver's lifetime),
/// the initial possible-solution set, and the table pair used for the first
/// guess. The same solver can solve any number of puzzles; per-session
/// narrowing state lives on the [`Solver::solve`] stack.
pub struct Solver {
    vocabulary: Vec<Word>,
    possible_solutions: Vec<Word>,
    frequencies: PatternFrequencyTable,
    information: InformationTable,
}

impl Solver {
    /// Create a solver for `vocabulary`, narrowing within `possible_solutions`
    ///
    /// # Errors
    /// Propagates table-construction failures: mixed word lengths in the
    /// vocabulary, or an empty vocabulary (information over zero words is
    /// undefined).
    pub fn new(
        vocabulary: Vec<Word>,
        possible_solutions: Vec<Word>,
        tables: TableSource,
    ) -> Result<Self> {
        let (frequencies, information) = match tables {
            TableSource::Compute => {
                let frequencies = PatternFrequencyTable::build(&vocabulary, &vocabulary)?;
                let information = InformationTable::build(&frequencies, vocabulary.len())?;
                (frequencies, information)
            }
            TableSource::Prebuilt {
                frequencies,
                information,
            } => (frequencies, information),
        };

        Ok(Self {
            vocabulary,
            possible_solutions,
            frequencies,
            information,
        })
    }

    /// The full scoring vocabulary
    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    /// The initial possible-solution set
    #[must_use]
    pub fn possible_solutions(&self) -> &[Word] {
        &self.possible_solutions
    }

    /// The information table used for the first guess
    #[must_use]
    pub const fn information(&self) -> &InformationTable {
        &self.information
    }

    /// Solve `puzzle`, returning the guesses made in order
    ///
    /// The last guess in the returned sequence is the hidden word. The
    /// puzzle's guess counter reflects every assessment made, including the
    /// registering assessment for a candidate deduced by elimination.
    ///
    /// # Errors
    /// - [`Error::InvariantViolation`] if the possible-solution set empties
    ///   before an all-correct assessment (the hidden word was excluded by a
    ///   bucketing bug, or was never in the possible set), or if the guess
    ///   count exceeds the vocabulary size
    /// - [`Error::LengthMismatch`] if the puzzle's hidden word has a
    ///   different length than the vocabulary
    pub fn solve(&self, puzzle: &mut Puzzle) -> Result<Vec<Word>> {
        let mut guesses: Vec<Word> = Vec::new();
        let mut possible: FxHashSet<Word> = self.possible_solutions.iter().cloned().collect();
        let mut frequencies = Cow::Borrowed(&self.frequencies);
        let mut information = self.information.clone();

        loop {
            let guess = information
                .best_guess()
                .map(|(word, _)| word.clone())
                .ok_or_else(|| {
                    Error::InvariantViolation("no scoring words left to guess".to_string())
                })?;

            guesses.push(guess.clone());
            let pattern = puzzle.assess(&guess)?;

            // Narrow to the bucket matching the observed feedback, then drop
            // words already tried and rejected so they cannot recur
            let bucket = frequencies.bucket(&guess, &pattern).ok_or_else(|| {
                Error::InvariantViolation(format!(
                    "no bucket for guess '{guess}' under pattern '{pattern}'"
                ))
            })?;
            possible.retain(|word| bucket.contains(word));
            for guessed in &guesses {
                possible.remove(guessed);
            }

            if pattern.is_all_correct() {
                return Ok(guesses);
            }

            // A lone survivor is guaranteed correct: register it with one
            // more assessment instead of recomputing the tables
            if possible.len() == 1 {
                if let Some(last) = possible.iter().next().cloned() {
                    puzzle.assess(&last)?;
                    guesses.push(last);
                }
                return Ok(guesses);
            }

            if possible.is_empty() {
                return Err(Error::InvariantViolation(
                    "possible-solution set emptied without an all-correct assessment".to_string(),
                ));
            }

            if guesses.len() > self.vocabulary.len() {
                return Err(Error::InvariantViolation(format!(
                    "guess count exceeded vocabulary size ({})",
                    self.vocabulary.len()
                )));
            }

            // Full recomputation over the survivors each round; guessed
            // words are stripped so selection never repeats one
            let survivors: Vec<Word> = possible.iter().cloned().collect();
            let rebuilt = PatternFrequencyTable::build(&self.vocabulary, &survivors)?;
            information = InformationTable::build(&rebuilt, survivors.len())?;
            frequencies = Cow::Owned(rebuilt);
            for guessed in &guesses {
                information.remove(guessed);
            }
        }
    }
}
