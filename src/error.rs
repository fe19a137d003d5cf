//! Crate-level error type
//!
//! Correctness bugs are signaled, not masked: every variant here is fatal to
//! the operation that produced it and is surfaced to the caller immediately.

use std::fmt;
use std::io;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by assessment, table building, and solving
#[derive(Debug)]
pub enum Error {
    /// Candidate and hidden word lengths differ
    LengthMismatch { candidate: usize, hidden: usize },
    /// Puzzle construction was given no word to sample from
    EmptyVocabulary,
    /// Information requested over an empty possible-word set
    DivisionUndefined,
    /// The possible-candidate set was corrupted during narrowing, which
    /// indicates a bucketing bug rather than a recoverable condition
    InvariantViolation(String),
    /// Only one of the paired precomputed tables was provided
    PartialCacheMismatch,
    /// A cached table file failed structural validation
    InvalidCache(String),
    /// Underlying I/O failure while reading or writing a cache file
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { candidate, hidden } => write!(
                f,
                "candidate length {candidate} does not match hidden word length {hidden}"
            ),
            Self::EmptyVocabulary => {
                write!(f, "cannot sample a hidden word from an empty vocabulary")
            }
            Self::DivisionUndefined => {
                write!(f, "information is undefined for an empty possible-word set")
            }
            Self::InvariantViolation(detail) => write!(f, "solver invariant violated: {detail}"),
            Self::PartialCacheMismatch => write!(
                f,
                "precomputed frequency and information tables must be provided together"
            ),
            Self::InvalidCache(detail) => write!(f, "invalid table cache: {detail}"),
            Self::Io(err) => write!(f, "table cache I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
