//! Core domain types: words, feedback colors, and patterns

mod color;
mod pattern;
mod word;

pub use color::Color;
pub use pattern::Pattern;
pub use word::{Word, WordError};
