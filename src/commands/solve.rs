//! Code solving command
//!
//! Plays one game against a known secret and records every turn.

use crate::core::{Code, Key, MAX_TURNS};
use crate::game::{GameState, GameStatus, TurnOutcome};
use crate::solver::{Strategy, StrategyType, count_consistent};

/// Configuration for solving a code
pub struct SolveConfig {
    pub code: Code,
    pub seed: u64,
    pub strategy: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub fn new(code: Code, seed: u64) -> Self {
        Self {
            code,
            seed,
            strategy: "probe".to_string(),
            max_turns: MAX_TURNS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub code: Code,
    pub steps: Vec<GuessStep>,
    pub strategy: &'static str,
    pub seed: u64,
}

/// A single turn of the game
pub struct GuessStep {
    pub guess: Code,
    pub key: Key,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play a game to the end with the given strategy
///
/// # Errors
///
/// Returns an error if the strategy fails before the game is decided.
pub fn play_game<S: Strategy>(strategy: &mut S, game: &mut GameState) -> Result<GameStatus, String> {
    while !game.is_over() {
        let guess = strategy
            .next_guess(game.history())
            .map_err(|e| format!("Solver failed on turn {}: {e}", game.turn()))?;
        game.submit(guess).map_err(|e| e.to_string())?;
    }

    Ok(game.status())
}

/// Solve a specific code, tracking how many codes stay consistent each turn
///
/// # Errors
///
/// Returns an error if the strategy fails (for example runs out of
/// permutations) before the game is decided.
pub fn solve_code(config: &SolveConfig) -> Result<SolveResult, String> {
    let mut strategy = StrategyType::from_name(&config.strategy, config.seed);
    let mut game = GameState::with_max_turns(config.code, config.max_turns);
    let mut steps = Vec::new();

    while !game.is_over() {
        let candidates_before = count_consistent(game.history());

        let guess = strategy
            .next_guess(game.history())
            .map_err(|e| format!("Solver failed on turn {}: {e}", game.turn()))?;

        let key = match game.submit(guess).map_err(|e| e.to_string())? {
            TurnOutcome::Won { .. } => Key::PERFECT,
            TurnOutcome::Continue { key } | TurnOutcome::Lost { key } => key,
        };

        steps.push(GuessStep {
            guess,
            key,
            candidates_before,
            candidates_after: count_consistent(game.history()),
        });
    }

    Ok(SolveResult {
        success: game.status() == GameStatus::Won,
        code: config.code,
        steps,
        strategy: strategy.name(),
        seed: config.seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ProbeStrategy;

    fn code(pegs: [u8; 4]) -> Code {
        Code::new(pegs).unwrap()
    }

    #[test]
    fn solve_code_succeeds() {
        let config = SolveConfig::new(code([2, 4, 4, 1]), 1);
        let result = solve_code(&config).unwrap();

        assert!(result.success);
        assert_eq!(result.strategy, "probe");
        assert!(result.steps.len() <= MAX_TURNS);
        assert_eq!(result.steps.last().unwrap().guess, config.code);
        assert!(result.steps.last().unwrap().key.is_perfect());
    }

    #[test]
    fn solve_records_candidate_reduction() {
        let config = SolveConfig::new(code([5, 3, 5, 1]), 2);
        let result = solve_code(&config).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(result.steps.last().unwrap().candidates_after, 1);
    }

    #[test]
    fn solve_respects_turn_limit() {
        let mut config = SolveConfig::new(code([6, 6, 6, 5]), 3);
        config.max_turns = 2;

        let result = solve_code(&config).unwrap();

        assert!(!result.success);
        assert_eq!(result.steps.len(), 2);
    }

    #[test]
    fn solve_with_random_strategy() {
        let mut config = SolveConfig::new(code([1, 2, 3, 4]), 4);
        config.strategy = "random".to_string();

        let result = solve_code(&config).unwrap();

        assert_eq!(result.strategy, "random");
        assert!(result.success);
    }

    #[test]
    fn play_game_reports_status() {
        let mut game = GameState::new(code([3, 6, 3, 6]));
        let status = play_game(&mut ProbeStrategy::new(0), &mut game).unwrap();

        assert_eq!(status, GameStatus::Won);
        assert!(game.history().len() <= MAX_TURNS);
    }
}
