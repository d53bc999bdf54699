//! Codebreaker strategies
//!
//! Defines the Strategy trait and the runtime selector over implementations.

use super::{ConsistentRandomStrategy, ProbeStrategy, SolverError};
use crate::core::{Guess, Key};

/// A codebreaker that turns the feedback so far into the next guess
pub trait Strategy {
    /// Produce the next guess given every `(guess, key)` pair played so far
    ///
    /// The current turn is `history.len() + 1`. Strategies may keep state
    /// between calls, so a fresh strategy is needed for each game.
    ///
    /// # Errors
    /// Returns `SolverError` when the history is contradictory, already ends
    /// in a perfect key, or the strategy has run out of options.
    fn next_guess(&mut self, history: &[(Guess, Key)]) -> Result<Guess, SolverError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Probe peg counts, then permute (default)
    Probe(ProbeStrategy),
    /// Uniform pick among consistent codes
    Random(ConsistentRandomStrategy),
}

impl Strategy for StrategyType {
    fn next_guess(&mut self, history: &[(Guess, Key)]) -> Result<Guess, SolverError> {
        match self {
            Self::Probe(s) => s.next_guess(history),
            Self::Random(s) => s.next_guess(history),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "probe", "random", "consistent".
    /// Defaults to probe if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "random" | "consistent" => Self::Random(ConsistentRandomStrategy::new(seed)),
            _ => Self::Probe(ProbeStrategy::new(seed)),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Probe(_) => "probe",
            Self::Random(_) => "random",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    #[test]
    fn from_name_selects_strategy() {
        assert_eq!(StrategyType::from_name("probe", 0).name(), "probe");
        assert_eq!(StrategyType::from_name("random", 0).name(), "random");
        assert_eq!(StrategyType::from_name("consistent", 0).name(), "random");
    }

    #[test]
    fn unknown_name_defaults_to_probe() {
        assert_eq!(StrategyType::from_name("entropy", 0).name(), "probe");
    }

    #[test]
    fn wrapper_dispatches_to_inner_strategy() {
        let mut strategy = StrategyType::from_name("probe", 0);
        let guess = strategy.next_guess(&[]).unwrap();
        assert_eq!(guess, Code::new([1, 1, 1, 1]).unwrap());
    }
}
