//! Infordle
//!
//! An entropy-maximizing Wordle solver: each turn it guesses the word with
//! the highest expected information (Shannon entropy) over the remaining
//! candidates, narrows the candidate set by the feedback received, and
//! repeats until the hidden word is found.
//!
//! # Quick Start
//!
//! ```rust
//! use infordle::puzzle::Puzzle;
//! use infordle::solver::{Solver, TableSource};
//! use infordle::wordlists::words_from_slice;
//!
//! let vocab = words_from_slice(&["chimp", "catch", "patch", "match", "hatch"]);
//! let solver = Solver::new(vocab.clone(), vocab, TableSource::Compute).unwrap();
//!
//! let mut puzzle = Puzzle::new(infordle::core::Word::new("catch").unwrap());
//! let guesses = solver.solve(&mut puzzle).unwrap();
//! assert_eq!(guesses.last().unwrap().text(), "catch");
//! ```

// Core domain types
pub mod core;

// Crate-level error type
pub mod error;

// Puzzle state and assessment memoization
pub mod puzzle;

// Solving algorithm and tables
pub mod solver;

// Precomputed table cache I/O
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
