//! Test all codes - exhaustive solver evaluation
//!
//! Runs the solver against every possible secret code and generates statistics.

use super::solve::play_game;
use crate::core::{Code, MAX_TURNS};
use crate::game::{GameState, GameStatus};
use crate::solver::StrategyType;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single code
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub code: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
    pub repeated_guess: bool,
    pub error: Option<String>,
}

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub repeated_guesses: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    pub worst_codes: Vec<(Code, usize)>,
    pub errors: Vec<(Code, String)>,
}

/// Play one game against `code` and record what happened
fn test_code(strategy_name: &str, code: Code, seed: u64) -> CodeTestResult {
    let mut strategy = StrategyType::from_name(strategy_name, seed);
    let mut game = GameState::new(code);
    let outcome = play_game(&mut strategy, &mut game);

    let guesses: Vec<Code> = game.history().iter().map(|&(guess, _)| guess).collect();
    let repeated_guess = guesses
        .iter()
        .enumerate()
        .any(|(i, guess)| guesses[..i].contains(guess));

    CodeTestResult {
        code,
        guesses,
        success: matches!(outcome, Ok(GameStatus::Won)),
        repeated_guess,
        error: outcome.err(),
    }
}

/// Run solver on every code (or the first `limit` in lexicographic order)
///
/// Games run in parallel; game `i` seeds its strategy with `seed + i`, so the
/// statistics do not depend on scheduling.
#[must_use]
pub fn run_test_all(strategy_name: &str, limit: Option<usize>, seed: u64) -> TestAllStatistics {
    let test_codes: Vec<Code> = Code::all().take(limit.unwrap_or(usize::MAX)).collect();

    println!("🎯 Testing {} codes...", test_codes.len());

    // Progress bar
    let pb = ProgressBar::new(test_codes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = test_codes
        .par_iter()
        .enumerate()
        .map(|(index, &code)| {
            let result = test_code(strategy_name, code, seed.wrapping_add(index as u64));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();
    summarize(&results, total_time)
}

fn summarize(results: &[CodeTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
    }

    let solved_turns: Vec<usize> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses.len())
        .collect();
    let solved = solved_turns.len();

    let average_turns = if solved > 0 {
        solved_turns.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let mut worst_codes: Vec<(Code, usize)> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| (r.code, r.guesses.len()))
        .collect();
    worst_codes.sort_by_key(|&(code, turns)| (std::cmp::Reverse(turns), code));
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved,
        failed: results.len() - solved,
        repeated_guesses: results.iter().filter(|r| r.repeated_guess).count(),
        guess_distribution,
        total_time,
        average_turns,
        max_turns: solved_turns.iter().copied().max().unwrap_or(0),
        min_turns: solved_turns.iter().copied().min().unwrap_or(0),
        worst_codes,
        errors: results
            .iter()
            .filter_map(|r| r.error.clone().map(|e| (r.code, e)))
            .collect(),
    }
}

/// Print test-all statistics with beautiful formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", percent(stats.solved, stats.total_codes)).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", percent(stats.failed, stats.total_codes)).red()
        );
    }
    if stats.repeated_guesses > 0 {
        println!(
            "  Repeated a guess:    {}",
            stats.repeated_guesses.to_string().red().bold()
        );
    }
    println!(
        "  Average turns:       {}",
        format!("{:.3}", stats.average_turns).bright_yellow().bold()
    );
    println!("  Turn range:          {}-{}", stats.min_turns, stats.max_turns);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    // Turn distribution
    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for turns in 1..=MAX_TURNS {
        let count = stats.guess_distribution.get(&turns).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        let bar_len = (count * 40 / max_count).max(1);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        let pct = percent(count, stats.solved);
        println!("  {turns:2} turns: {bar} {count:4} ({pct:5.1}%)");
    }

    if !stats.worst_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, turns) in stats.worst_codes.iter().take(5) {
            println!("  {} ({turns} turns)", code.to_string().yellow());
        }
    }

    if !stats.errors.is_empty() {
        println!("\n❌ {}", "Solver Errors".red().bold());
        for (code, error) in stats.errors.iter().take(5) {
            println!("  {}: {error}", code.to_string().red());
        }
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_records_game() {
        let code = Code::new([2, 4, 4, 1]).unwrap();
        let result = test_code("probe", code, 0);

        assert!(result.success);
        assert!(!result.repeated_guess);
        assert!(result.error.is_none());
        assert_eq!(result.guesses.last(), Some(&code));
    }

    #[test]
    fn run_test_all_with_limit() {
        let stats = run_test_all("probe", Some(60), 0);

        assert_eq!(stats.total_codes, 60);
        assert_eq!(stats.solved, 60);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.repeated_guesses, 0);
        assert!(stats.max_turns <= MAX_TURNS);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 60);
    }

    #[test]
    fn run_test_all_is_deterministic() {
        let first = run_test_all("probe", Some(40), 17);
        let second = run_test_all("probe", Some(40), 17);

        assert_eq!(first.guess_distribution, second.guess_distribution);
        assert_eq!(first.worst_codes, second.worst_codes);
    }

    #[test]
    fn summarize_counts_failures() {
        let code = Code::new([1, 2, 3, 4]).unwrap();
        let results = vec![
            CodeTestResult {
                code,
                guesses: vec![code],
                success: true,
                repeated_guess: false,
                error: None,
            },
            CodeTestResult {
                code,
                guesses: Vec::new(),
                success: false,
                repeated_guess: false,
                error: Some("boom".to_string()),
            },
        ];

        let stats = summarize(&results, Duration::ZERO);
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.errors, vec![(code, "boom".to_string())]);
        assert!((stats.average_turns - 1.0).abs() < f64::EPSILON);
    }
}
