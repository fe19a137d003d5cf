//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::puzzle::Puzzle;
use crate::solver::Solver;

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub guesses: Vec<GuessStep>,
    pub guess_count: u32,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub information: Option<f64>,
}

/// Solve a specific hidden word and record each step's feedback
///
/// # Errors
/// Propagates solver failures (length mismatch against the vocabulary, or a
/// narrowing invariant violation).
pub fn solve_word(target: &Word, solver: &Solver) -> Result<SolveResult> {
    let mut puzzle = Puzzle::new(target.clone());
    let guesses = solver.solve(&mut puzzle)?;

    let steps = guesses
        .into_iter()
        .map(|word| {
            let pattern = Pattern::assess(&word, target)?;
            let information = solver.information().score(&word);
            Ok(GuessStep {
                word,
                pattern,
                information,
            })
        })
        .collect::<Result<Vec<GuessStep>>>()?;

    Ok(SolveResult {
        target: target.clone(),
        guesses: steps,
        guess_count: puzzle.guess_count(),
    })
}
