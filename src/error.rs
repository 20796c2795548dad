//! Error types
//!
//! Every core operation is deterministic, so none of these are retryable:
//! they describe bad input or a broken invariant.

use std::path::PathBuf;
use thiserror::Error;

/// A string could not be turned into a [`Word`](crate::core::Word)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("word \"{0}\" must contain only the letters a-z")]
    InvalidCharacters(String),
}

/// Errors raised while playing or solving a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess does not have five letters
    #[error("{}", length_message(.expected, .actual))]
    InvalidGuessLength { expected: usize, actual: usize },

    /// The guess is not in the accepted-guess dictionary
    #[error("not a valid word: \"{0}\"")]
    InvalidGuessWord(String),

    /// Scoring was asked to rank an empty wordlist.
    ///
    /// Feedback eliminated the true solution, which means the evaluator and
    /// the filter disagree.
    #[error("candidate pool is empty; feedback eliminated every word")]
    EmptyCandidatePool,

    /// The session is already won or lost
    #[error("the game is over; no more guesses are accepted")]
    GameFinished,

    /// Auto-solving needs a candidate pool to rank
    #[error("the session was created without a candidate pool")]
    SolverDisabled,

    #[error("solution index {index} is out of range for a list of {len} words")]
    InvalidSolutionIndex { index: usize, len: usize },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn length_message(expected: &usize, actual: &usize) -> String {
    if actual < expected {
        format!("too few letters: expected {expected}, got {actual}")
    } else {
        format!("too many letters: expected {expected}, got {actual}")
    }
}

/// Errors raised while loading a wordlist
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("could not read wordlist {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("wordlist {} contains no valid words", .0.display())]
    Empty(PathBuf),
}

/// A feedback pattern typed by a user could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("pattern must have 5 marks, got {0}")]
    InvalidLength(usize),

    #[error("unrecognised mark '{0}'; use G/Y/- or 🟩/🟨/⬜")]
    InvalidMark(char),

    #[error("feedback letter '{0}' must be one of a-z")]
    InvalidLetter(char),

    #[error("expected WORD:PATTERN, got \"{0}\"")]
    MissingSeparator(String),

    #[error(transparent)]
    Word(#[from] WordError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_errors_say_which_way() {
        let short = GameError::InvalidGuessLength {
            expected: 5,
            actual: 3,
        };
        let long = GameError::InvalidGuessLength {
            expected: 5,
            actual: 7,
        };
        assert!(short.to_string().starts_with("too few letters"));
        assert!(long.to_string().starts_with("too many letters"));
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidLength(4).to_string(),
            "word must be exactly 5 letters, got 4"
        );
        assert!(
            WordError::InvalidCharacters("ab1de".into())
                .to_string()
                .contains("ab1de")
        );
    }
}
