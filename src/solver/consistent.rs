//! Consistency filtering over the full code space
//!
//! A code is consistent with the history when it would have produced every
//! observed key had it been the secret.

use super::{SolverError, Strategy};
use crate::core::{Code, Guess, Key};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Check if `candidate` as the secret reproduces `key` for `guess`
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Code, guess: &Guess, key: Key) -> bool {
    Key::calculate(guess, candidate) == key
}

/// All codes consistent with every `(guess, key)` pair in the history
#[must_use]
pub fn consistent_codes(history: &[(Guess, Key)]) -> Vec<Code> {
    Code::all()
        .filter(|candidate| {
            history
                .iter()
                .all(|(guess, key)| is_consistent(candidate, guess, *key))
        })
        .collect()
}

/// Count how many codes remain consistent with the history
#[must_use]
pub fn count_consistent(history: &[(Guess, Key)]) -> usize {
    consistent_codes(history).len()
}

/// Baseline codebreaker: guess a uniformly random consistent code
///
/// Never repeats a failed guess, since a code is never consistent with the
/// key it scored against itself unless that key was perfect.
pub struct ConsistentRandomStrategy {
    candidates: Vec<Code>,
    folded: usize,
    rng: StdRng,
}

impl ConsistentRandomStrategy {
    /// Create a strategy whose draws are reproducible from `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            candidates: Code::all().collect(),
            folded: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of codes still consistent with the folded history
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

impl Strategy for ConsistentRandomStrategy {
    fn next_guess(&mut self, history: &[(Guess, Key)]) -> Result<Guess, SolverError> {
        if history.last().is_some_and(|(_, key)| key.is_perfect()) {
            return Err(SolverError::AlreadySolved);
        }

        for (guess, key) in history.iter().skip(self.folded) {
            self.candidates
                .retain(|candidate| is_consistent(candidate, guess, *key));
            debug!(
                "{guess} scored {key}: {} consistent codes remain",
                self.candidates.len()
            );
        }
        self.folded = history.len();

        if self.candidates.is_empty() {
            return Err(SolverError::NoConsistentCode);
        }

        let index = self.rng.random_range(0..self.candidates.len());
        Ok(self.candidates.swap_remove(index))
    }
}
