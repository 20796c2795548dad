//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterVerdict};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, verdict: LetterVerdict) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase()).bold().white();
    match verdict {
        LetterVerdict::Correct => tile.on_green(),
        LetterVerdict::Present => tile.on_yellow(),
        LetterVerdict::Absent => tile.on_bright_black(),
    }
}

/// Feedback as a row of colored tiles
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .entries()
        .iter()
        .map(|entry| letter_tile(entry.letter(), entry.verdict()).to_string())
        .collect()
}

/// Feedback as upper-case word followed by emoji squares
#[must_use]
pub fn feedback_line(feedback: &Feedback) -> String {
    format!("{} {}", feedback.guess().to_uppercase(), feedback.to_emoji())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix for guess counts
#[must_use]
pub const fn guesses_word(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
