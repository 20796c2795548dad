//! Command implementations

pub mod assist;
pub mod evaluate;
pub mod openers;
pub mod play;
pub mod solve;
pub mod stats;
pub mod suggest;

pub use assist::run_assist;
pub use evaluate::{
    EvaluationConfig, EvaluationStatistics, evaluate, run_evaluation, save_records, summarize,
};
pub use openers::{OpenerStats, run_opener_study, write_opener_csv};
pub use play::{PlayConfig, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use stats::{WordlistReport, build_report};
pub use suggest::{SuggestResult, parse_feedback, suggest};

use crate::core::Word;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};

/// The word lists every command works from
#[derive(Debug, Clone)]
pub struct Wordlists {
    /// Reference solution list; also the solver's starting pool
    pub solutions: Vec<Word>,
    /// Extra accepted guesses (may be empty)
    pub guesses: Vec<Word>,
    /// Union of both lists
    pub dictionary: Dictionary,
}

impl Wordlists {
    #[must_use]
    pub fn new(solutions: Vec<Word>, guesses: Vec<Word>) -> Self {
        let dictionary = Dictionary::new([solutions.as_slice(), guesses.as_slice()]);
        Self {
            solutions,
            guesses,
            dictionary,
        }
    }

    /// Parse a user-supplied word that must be an accepted guess
    ///
    /// # Errors
    /// Fails if the word is malformed or not in the dictionary.
    pub fn accepted_word(&self, text: &str) -> Result<Word> {
        let word = Word::new(text).with_context(|| format!("invalid word '{text}'"))?;
        if !self.dictionary.contains(word.text()) {
            bail!("'{word}' is not in the accepted-guess dictionary");
        }
        Ok(word)
    }

    /// Parse a user-supplied word that must be in the solution list
    ///
    /// # Errors
    /// Fails if the word is malformed or not a possible solution.
    pub fn solution_word(&self, text: &str) -> Result<Word> {
        let word = Word::new(text).with_context(|| format!("invalid word '{text}'"))?;
        if !self.solutions.contains(&word) {
            bail!("'{word}' is not in the solution list");
        }
        Ok(word)
    }

    /// Resolve an optional opening guess
    ///
    /// An opener missing from the dictionary is dropped with a warning and
    /// the solver ranks its own first guess instead.
    ///
    /// # Errors
    /// Fails if the opener is not a well-formed word.
    pub fn opener(&self, text: Option<&str>) -> Result<Option<Word>> {
        let Some(text) = text else {
            return Ok(None);
        };
        let word = Word::new(text).with_context(|| format!("invalid opener '{text}'"))?;
        if self.dictionary.contains(word.text()) {
            Ok(Some(word))
        } else {
            log::warn!("opener '{word}' is not an accepted guess; ignoring it");
            Ok(None)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::wordlists;

    #[test]
    fn word_lookups() {
        let lists = wordlists();
        assert!(lists.accepted_word("sulci").is_ok());
        assert!(lists.accepted_word("zzzzz").is_err());
        assert!(lists.accepted_word("toolong").is_err());
        assert!(lists.solution_word("pause").is_ok());
        assert!(lists.solution_word("sulci").is_err());
    }

    #[test]
    fn opener_resolution() {
        let lists = wordlists();
        assert_eq!(lists.opener(None).unwrap(), None);
        assert_eq!(lists.opener(Some("SULCI")).unwrap().unwrap().text(), "sulci");
        assert_eq!(lists.opener(Some("zzzzz")).unwrap(), None);
        assert!(lists.opener(Some("zz")).is_err());
    }
}
