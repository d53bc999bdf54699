//! Benchmark command
//!
//! Tests solver performance across random secret codes.

use super::solve::play_game;
use crate::core::Code;
use crate::game::{GameState, GameStatus};
use crate::solver::StrategyType;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Draw `count` secret codes, reproducibly from `seed`
#[must_use]
pub fn random_codes(count: usize, seed: u64) -> Vec<Code> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Code::random(&mut rng)).collect()
}

/// Run benchmark on a set of secret codes
///
/// Game `i` seeds its strategy with `seed + i`. Games that are lost or where
/// the strategy fails count as unsolved and are left out of the turn
/// statistics.
#[must_use]
pub fn run_benchmark(strategy_name: &str, codes: &[Code], seed: u64) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for (index, &code) in codes.iter().enumerate() {
        let mut strategy = StrategyType::from_name(strategy_name, seed.wrapping_add(index as u64));
        let mut game = GameState::new(code);

        match play_game(&mut strategy, &mut game) {
            Ok(GameStatus::Won) => {
                let turns = game.turn();
                solved += 1;
                total_turns += turns;
                min_turns = min_turns.min(turns);
                max_turns = max_turns.max(turns);
                *distribution.entry(turns).or_insert(0) += 1;
            }
            Ok(_) => warn!("{code} not cracked within {} turns", game.max_turns()),
            Err(e) => warn!("{code}: {e}"),
        }
    }

    let duration = start.elapsed();
    let total_codes = codes.len();

    BenchmarkResult {
        total_codes,
        solved,
        total_turns,
        average_turns: if solved > 0 {
            total_turns as f64 / solved as f64
        } else {
            0.0
        },
        min_turns: if solved > 0 { min_turns } else { 0 },
        max_turns,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_TURNS;

    #[test]
    fn benchmark_runs() {
        let codes = random_codes(40, 1);
        let result = run_benchmark("probe", &codes, 1);

        assert_eq!(result.total_codes, 40);
        assert_eq!(result.solved, 40);
        assert!(result.average_turns >= 1.0);
        assert!(result.min_turns >= 1);
        assert!(result.max_turns <= MAX_TURNS);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let codes = random_codes(25, 2);
        let result = run_benchmark("probe", &codes, 2);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_empty_code_list() {
        let result = run_benchmark("probe", &[], 0);

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_turns, 0);
        assert_eq!(result.min_turns, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let codes = random_codes(30, 3);
        let result = run_benchmark("random", &codes, 3);

        assert!(result.average_turns >= result.min_turns as f64);
        assert!(result.average_turns <= result.max_turns as f64);
        for &turns in result.distribution.keys() {
            assert!((1..=MAX_TURNS).contains(&turns));
        }
    }

    #[test]
    fn random_codes_are_reproducible() {
        assert_eq!(random_codes(10, 9), random_codes(10, 9));
        assert_eq!(random_codes(0, 9), Vec::<Code>::new());
    }
}
