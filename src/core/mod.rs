//! Core domain types for Wordle
//!
//! Words, feedback and the constraint filter. Everything here is pure:
//! the same inputs always produce the same outputs, with no shared state.

mod feedback;
mod filter;
mod word;

pub use feedback::{Feedback, FeedbackEntry, LetterVerdict};
pub use filter::{Constraint, filter, filter_history};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
