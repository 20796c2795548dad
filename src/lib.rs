//! Wordle Assistant
//!
//! A Wordle game engine with a rule-based solving assistant: feedback
//! evaluation, constraint filtering of candidate words, and two
//! letter-frequency scoring heuristics that rank the next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::{Feedback, Word, filter};
//! use wordle_assistant::scoring::{ScoringPolicy, WordLevelScore};
//! use wordle_assistant::wordlists::words_from_slice;
//!
//! let pool = words_from_slice(&["later", "pause", "cause", "speed"]);
//! let guess = Word::new("later").unwrap();
//! let solution = Word::new("pause").unwrap();
//!
//! // Score the guess and narrow the pool
//! let feedback = Feedback::evaluate(&guess, &solution);
//! assert_eq!(feedback.to_emoji(), "⬜🟩⬜🟨⬜");
//! let remaining = filter(&pool, &feedback);
//! assert_eq!(remaining.len(), 2);
//!
//! // Rank what is left
//! let best = WordLevelScore.best_guess(&remaining).unwrap();
//! assert_eq!(best.text(), "pause");
//! ```

// Core domain types
pub mod core;

// Typed errors
pub mod error;

// Letter-frequency scoring
pub mod scoring;

// Game sessions and automatic play
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
