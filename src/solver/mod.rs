//! Information-theoretic solving
//!
//! The solver repeatedly picks the guess with the highest expected
//! information, narrows the possible-solution set by the observed feedback,
//! and recomputes the tables over the survivors.

mod engine;
mod frequencies;
mod information;

pub use engine::{Solver, TableSource};
pub use frequencies::PatternFrequencyTable;
pub use information::InformationTable;
