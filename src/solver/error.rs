//! Solver failure modes

use crate::core::{Guess, Key};
use std::fmt;

/// Error type for codebreaker strategies
///
/// None of these are recoverable inside a game; the caller decides whether
/// to abandon it or start over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Discovery ran out of peg values before confirming every hole
    ExhaustedStrategy { confirmed: usize },
    /// Every permutation was tried or pruned without cracking the code
    EmptyPermutationPool,
    /// No code agrees with the history
    NoConsistentCode,
    /// A key contradicts what the solver already knows
    InconsistentKey { guess: Guess, key: Key },
    /// The history already ends with a perfect key
    AlreadySolved,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExhaustedStrategy { confirmed } => write!(
                f,
                "All peg values probed but only {confirmed} code pegs confirmed"
            ),
            Self::EmptyPermutationPool => {
                write!(f, "No untried permutation of the confirmed pegs remains")
            }
            Self::NoConsistentCode => write!(f, "No code is consistent with the feedback so far"),
            Self::InconsistentKey { guess, key } => {
                write!(f, "Key {key} for guess {guess} contradicts earlier feedback")
            }
            Self::AlreadySolved => write!(f, "The code has already been cracked"),
        }
    }
}

impl std::error::Error for SolverError {}
