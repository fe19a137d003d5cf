//! Command implementations

pub mod benchmark;
pub mod precompute;
pub mod solve;

pub use benchmark::{BenchmarkReport, WordOutcome, run_benchmark};
pub use precompute::run_precompute;
pub use solve::{GuessStep, SolveResult, solve_word};
