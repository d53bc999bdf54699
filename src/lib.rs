//! Mastermind
//!
//! A Mastermind scoring engine and a probing codebreaker that cracks any
//! 4-hole, 6-peg code within the 12-turn budget.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Key};
//!
//! // Create codes
//! let code = Code::new([2, 4, 4, 1]).unwrap();
//! let guess: Code = "1424".parse().unwrap();
//!
//! // Calculate key
//! let key = Key::calculate(&guess, &code);
//! println!("Key: {key}");
//! ```

// Core domain types
pub mod core;

// Codebreaker strategies
pub mod solver;

// Per-game session state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
