//! Feedback pattern calculation and representation
//!
//! A pattern is the ordered per-position feedback for one guess. Two guesses
//! of the same length can produce equal-looking patterns, but a pattern is
//! only meaningful paired with the guess that produced it.

use super::{Color, Word};
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback pattern for a guess: one [`Color`] per letter position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    colors: Box<[Color]>,
}

impl Pattern {
    /// Assess `candidate` against `hidden`, producing per-position feedback
    ///
    /// Implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters. Deterministic and pure.
    ///
    /// # Algorithm
    /// 1. Count the letters of `hidden` into a multiset.
    /// 2. First pass, left to right: mark exact matches `Correct` and
    ///    decrement their letter count. Exact matches must consume letter
    ///    budget before elsewhere-matches are evaluated.
    /// 3. Second pass, left to right: for positions not yet `Correct`, mark
    ///    `Present` while the letter's remaining count is positive,
    ///    otherwise leave `Absent`.
    ///
    /// A letter appearing once in `hidden` but twice in `candidate` is
    /// credited at most once across both passes; the surplus occurrence
    /// stays `Absent`.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use infordle::core::{Color, Pattern, Word};
    ///
    /// let candidate = Word::new("spark").unwrap();
    /// let hidden = Word::new("panda").unwrap();
    /// let pattern = Pattern::assess(&candidate, &hidden).unwrap();
    ///
    /// use Color::{Absent, Present};
    /// assert_eq!(
    ///     pattern.colors(),
    ///     &[Absent, Present, Present, Absent, Absent]
    /// );
    /// ```
    pub fn assess(candidate: &Word, hidden: &Word) -> Result<Self> {
        if candidate.len() != hidden.len() {
            return Err(Error::LengthMismatch {
                candidate: candidate.len(),
                hidden: hidden.len(),
            });
        }

        let guess = candidate.bytes();
        let answer = hidden.bytes();

        let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();
        for &letter in answer {
            *remaining.entry(letter).or_insert(0) += 1;
        }

        let mut colors = vec![Color::Absent; guess.len()];

        // First pass: exact matches consume the letter budget
        for (i, &letter) in guess.iter().enumerate() {
            if letter == answer[i] {
                colors[i] = Color::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-elsewhere against the remaining budget
        for (i, &letter) in guess.iter().enumerate() {
            if colors[i] != Color::Correct
                && let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                colors[i] = Color::Present;
                *count -= 1;
            }
        }

        Ok(Self {
            colors: colors.into_boxed_slice(),
        })
    }

    /// The all-`Correct` pattern of the given length
    #[must_use]
    pub fn all_correct(len: usize) -> Self {
        Self {
            colors: vec![Color::Correct; len].into_boxed_slice(),
        }
    }

    /// The per-position colors, in guess order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True for the (degenerate) zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Check whether every position is `Correct` (puzzle solved)
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.colors.iter().all(|&c| c == Color::Correct)
    }

    /// Build a pattern directly from colors
    #[must_use]
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Self {
            colors: colors.into_boxed_slice(),
        }
    }

    /// Render the pattern as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.colors
            .iter()
            .map(|color| match color {
                Color::Correct => '🟩',
                Color::Present => '🟨',
                Color::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    /// Compact form: 'g' correct, 'y' present, '-' absent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            let ch = match color {
                Color::Correct => 'g',
                Color::Present => 'y',
                Color::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    /// Parse "gy-gy" style strings ('G'/'g' correct, 'Y'/'y' present,
    /// '-'/'_' absent)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let colors = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' => Ok(Color::Correct),
                'Y' | 'y' => Ok(Color::Present),
                '-' | '_' => Ok(Color::Absent),
                _ => Err(format!("invalid pattern character: {ch}")),
            })
            .collect::<std::result::Result<Vec<Color>, String>>()?;
        Ok(Self::from_colors(colors))
    }
}
