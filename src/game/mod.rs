//! Per-game session state
//!
//! Owns the secret code, the turn counter and the history of a single game.

mod state;

pub use state::{GameError, GameState, GameStatus, TurnOutcome};
