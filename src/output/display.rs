//! Display functions for command results

use super::formatters::{code_to_pegs, create_progress_bar, key_to_pegs, key_to_words};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::MAX_TURNS;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Cracking: {}  (strategy: {}, seed: {})",
        code_to_pegs(&result.code),
        result.strategy,
        result.seed
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {turn:2}: {}   {}   {}",
            code_to_pegs(&step.guess),
            key_to_pegs(step.key),
            key_to_words(step.key).bright_black()
        );

        if verbose {
            println!(
                "  Consistent codes: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained:      {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Cracked in {} turns!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to crack in {} turns", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for turns in 1..=MAX_TURNS {
        if let Some(&count) = result.distribution.get(&turns) {
            let pct = (count as f64 / result.total_codes as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {turns:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
