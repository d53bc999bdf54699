//! Command implementations

pub mod benchmark;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, random_codes, run_benchmark};
pub use solve::{GuessStep, SolveConfig, SolveResult, play_game, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
