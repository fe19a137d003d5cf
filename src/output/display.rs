//! Display functions for command results

use crate::commands::{BenchmarkReport, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text().to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose && let Some(bits) = step.information {
            println!("  Information: {bits:.3} bits");
        }
    }

    println!();
    println!(
        "{}",
        format!("Solved in {} guesses", result.guess_count)
            .green()
            .bold()
    );
}

/// Print the aggregated result of a benchmark run
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", report.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.4}", report.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", report.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", report.words_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=report.max_guesses {
        if let Some(&count) = report.distribution.get(&guess_count) {
            let pct = (count as f64 / report.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if report.over_six.is_empty() {
        println!("\n{}", "No words needed more than six guesses".green());
    } else {
        println!(
            "\n{} ({}):",
            "Words over six guesses".red().bold(),
            report.over_six.len()
        );
        for word in &report.over_six {
            println!("   {}", word.text().to_uppercase().red());
        }
    }
}
