//! Puzzle state and shared assessment memoization
//!
//! A [`Puzzle`] wraps one hidden word and counts every assessment made
//! against it; the counter is the authoritative metric when benchmarking a
//! solver. An optional [`AssessmentCache`] memoizes (candidate, hidden)
//! pairs behind a lock so that independent puzzle sessions running on
//! separate workers can share previously computed patterns.

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// Shared memo of previously computed assessments
///
/// Keyed by (candidate, hidden). Safe to share across concurrently running
/// puzzle sessions; reads take a shared lock, misses take an exclusive one.
#[derive(Debug, Default)]
pub struct AssessmentCache {
    memo: RwLock<FxHashMap<(Word, Word), Pattern>>,
}

impl AssessmentCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assess with memoization, computing and storing on a miss
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the words differ in length.
    pub fn assess(&self, candidate: &Word, hidden: &Word) -> Result<Pattern> {
        let key = (candidate.clone(), hidden.clone());

        {
            let memo = self.memo.read().unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(pattern) = memo.get(&key) {
                return Ok(pattern.clone());
            }
        }

        let pattern = Pattern::assess(candidate, hidden)?;
        let mut memo = self
            .memo
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        memo.insert(key, pattern.clone());
        Ok(pattern)
    }

    /// Number of memoized assessments
    #[must_use]
    pub fn len(&self) -> usize {
        self.memo
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// True if nothing has been memoized yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One Wordle puzzle: a hidden word that can be queried for feedback
///
/// Every call to [`Puzzle::assess`] increments the guess counter, whether or
/// not the guess was correct.
#[derive(Debug)]
pub struct Puzzle {
    hidden: Word,
    guess_count: u32,
    cache: Option<Arc<AssessmentCache>>,
}

impl Puzzle {
    /// Create a puzzle with an explicit hidden word
    #[must_use]
    pub fn new(hidden: Word) -> Self {
        Self {
            hidden,
            guess_count: 0,
            cache: None,
        }
    }

    /// Create a puzzle with a hidden word sampled uniformly from `vocabulary`
    ///
    /// # Errors
    /// Returns [`Error::EmptyVocabulary`] if there is no word to sample.
    pub fn from_vocabulary(vocabulary: &[Word]) -> Result<Self> {
        let hidden = vocabulary
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(Error::EmptyVocabulary)?;
        Ok(Self::new(hidden))
    }

    /// Attach a shared assessment memo
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<AssessmentCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Assess a candidate against the hidden word
    ///
    /// Increments the guess counter as a side effect, then delegates to the
    /// assessor (through the shared memo when one is attached).
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the candidate has the wrong
    /// length; well-formed candidates of the correct length always succeed.
    pub fn assess(&mut self, candidate: &Word) -> Result<Pattern> {
        self.guess_count += 1;
        match &self.cache {
            Some(cache) => cache.assess(candidate, &self.hidden),
            None => Pattern::assess(candidate, &self.hidden),
        }
    }

    /// Cumulative number of assessments made against this puzzle
    #[must_use]
    pub const fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// The hidden word (useful when reporting benchmark results)
    #[must_use]
    pub const fn hidden(&self) -> &Word {
        &self.hidden
    }
}
