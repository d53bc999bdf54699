//! Core domain types for Mastermind
//!
//! This module contains the game rules, the code representation and the
//! scoring engine. Everything here is pure and free of I/O.

mod code;
mod key;

pub use code::{Code, CodeError, Guess};
pub use key::{Key, KeyError, Mark, score_pegs};

/// Number of holes in a code
pub const HOLES: usize = 4;

/// Number of distinct peg values; pegs are numbered `1..=PEGS`
pub const PEGS: u8 = 6;

/// Turns the codebreaker gets before the codemaker wins
pub const MAX_TURNS: usize = 12;

/// Number of distinct codes (`PEGS^HOLES`)
pub const CODE_COUNT: usize = (PEGS as usize).pow(HOLES as u32);
