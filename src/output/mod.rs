//! Terminal output formatting

mod display;

pub use display::{print_benchmark_report, print_solve_result};
