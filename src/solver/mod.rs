//! Codebreaker strategies
//!
//! This module contains the probing codebreaker and a consistent-random
//! baseline, both driven through the `Strategy` trait.

pub mod consistent;
mod error;
pub mod permutations;
pub mod probe;
pub mod strategy;

pub use consistent::{ConsistentRandomStrategy, consistent_codes, count_consistent, is_consistent};
pub use error::SolverError;
pub use permutations::PermutationPool;
pub use probe::{Phase, ProbeStrategy};
pub use strategy::{Strategy, StrategyType};
