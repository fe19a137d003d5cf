//! Per-position feedback colors
//!
//! Wordle reports one color per letter position of a guess:
//! - `Absent`: the letter does not occur in the hidden word (beyond what is
//!   already accounted for by other positions)
//! - `Present`: the letter occurs in the hidden word, but elsewhere
//! - `Correct`: the letter occurs at exactly this position

/// Feedback color for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Letter not in the hidden word
    Absent,
    /// Letter in the hidden word, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl Color {
    /// Encode as a single byte for on-disk table caches
    #[inline]
    #[must_use]
    pub(crate) const fn to_byte(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Decode a byte written by [`Color::to_byte`]
    #[inline]
    pub(crate) const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }
}
