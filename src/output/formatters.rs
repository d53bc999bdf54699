//! Formatting utilities for terminal output

use crate::core::{Code, Key, Mark};
use colored::{ColoredString, Colorize};

/// Format a key as words, e.g. `PERFECT EXISTS - -`
#[must_use]
pub fn key_to_words(key: Key) -> String {
    key.marks()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a key as coloured pegs: ● for Perfect, ○ for Exists, · for Miss
#[must_use]
pub fn key_to_pegs(key: Key) -> String {
    key.marks()
        .iter()
        .map(|mark| match mark {
            Mark::Perfect => "●".bright_green().to_string(),
            Mark::Exists => "○".bright_yellow().to_string(),
            Mark::Miss => "·".bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a code with its pegs spaced out
#[must_use]
pub fn code_to_pegs(code: &Code) -> ColoredString {
    code.pegs()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
        .bright_white()
        .bold()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
