//! Guess scoring policies
//!
//! Defines the `ScoringPolicy` trait and its two frequency heuristics.

use super::frequency::{LetterScores, PositionalLetterScores, alphabet};
use crate::core::Word;
use crate::error::GameError;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A word paired with its score under some policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// A way of ranking candidate words by how informative they are as guesses
///
/// Implementations must be pure: scores depend only on the wordlist passed
/// in, which is never modified.
pub trait ScoringPolicy: Sync {
    /// Name recorded alongside results produced with this policy
    fn name(&self) -> &'static str;

    /// Score every word of `wordlist`, in wordlist order
    ///
    /// # Errors
    /// Returns [`GameError::EmptyCandidatePool`] if `wordlist` is empty.
    fn score_words(&self, wordlist: &[Word]) -> Result<Vec<f64>, GameError>;

    /// Rank `wordlist` by score, highest first
    ///
    /// Ties keep their wordlist order.
    ///
    /// # Errors
    /// Returns [`GameError::EmptyCandidatePool`] if `wordlist` is empty.
    fn rank<'a>(&self, wordlist: &'a [Word]) -> Result<Vec<ScoredWord<'a>>, GameError> {
        let scores = self.score_words(wordlist)?;
        let mut ranked: Vec<ScoredWord<'a>> = wordlist
            .iter()
            .zip(scores)
            .map(|(word, score)| ScoredWord { word, score })
            .collect();
        // Stable sort, so equal scores stay in insertion order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        log::trace!(
            "{} ranked {} words, best {:?}",
            self.name(),
            ranked.len(),
            ranked.first().map(|s| s.word.text())
        );
        Ok(ranked)
    }

    /// The top-ranked word of `wordlist`
    ///
    /// Same as the first entry of [`rank`](ScoringPolicy::rank), without
    /// sorting the whole list.
    ///
    /// # Errors
    /// Returns [`GameError::EmptyCandidatePool`] if `wordlist` is empty.
    fn best_guess<'a>(&self, wordlist: &'a [Word]) -> Result<&'a Word, GameError> {
        let scores = self.score_words(wordlist)?;
        let mut best: Option<(&'a Word, f64)> = None;
        for (word, score) in wordlist.iter().zip(scores) {
            match best {
                Some((_, top)) if score.total_cmp(&top).is_le() => {}
                _ => best = Some((word, score)),
            }
        }
        best.map(|(word, _)| word)
            .ok_or(GameError::EmptyCandidatePool)
    }
}

/// Word-level frequency score
///
/// Each distinct letter of a word adds the fraction of the wordlist that
/// contains that letter. Repeated letters count once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordLevelScore;

impl WordLevelScore {
    /// Score one word against precomputed letter scores
    #[must_use]
    pub fn score(word: &Word, letters: &LetterScores) -> f64 {
        // Summed in alphabet order so anagrams score identically
        alphabet()
            .map(|c| c as u8)
            .filter(|&letter| word.has_letter(letter))
            .map(|letter| letters.get(letter))
            .sum()
    }
}

impl ScoringPolicy for WordLevelScore {
    fn name(&self) -> &'static str {
        "word_level_score"
    }

    fn score_words(&self, wordlist: &[Word]) -> Result<Vec<f64>, GameError> {
        let letters = LetterScores::from_wordlist(wordlist)?;
        Ok(wordlist
            .par_iter()
            .map(|word| Self::score(word, &letters))
            .collect())
    }
}

/// Position-level frequency score
///
/// Each position adds the fraction of the wordlist having the same letter at
/// that position. Repeated letters count once per position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionLevelScore;

impl PositionLevelScore {
    /// Score one word against precomputed positional scores
    #[must_use]
    pub fn score(word: &Word, positional: &PositionalLetterScores) -> f64 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| positional.get(letter, position))
            .sum()
    }
}

impl ScoringPolicy for PositionLevelScore {
    fn name(&self) -> &'static str {
        "position_level_score"
    }

    fn score_words(&self, wordlist: &[Word]) -> Result<Vec<f64>, GameError> {
        let positional = PositionalLetterScores::from_wordlist(wordlist)?;
        Ok(wordlist
            .par_iter()
            .map(|word| Self::score(word, &positional))
            .collect())
    }
}

/// Runtime choice between the scoring policies
///
/// Keeps static dispatch inside each arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMethod {
    /// Distinct-letter inclusion frequency (default)
    WordLevel(WordLevelScore),
    /// Per-position letter frequency
    PositionLevel(PositionLevelScore),
}

impl Default for ScoringMethod {
    fn default() -> Self {
        Self::WordLevel(WordLevelScore)
    }
}

impl ScoringPolicy for ScoringMethod {
    fn name(&self) -> &'static str {
        match self {
            Self::WordLevel(s) => s.name(),
            Self::PositionLevel(s) => s.name(),
        }
    }

    fn score_words(&self, wordlist: &[Word]) -> Result<Vec<f64>, GameError> {
        match self {
            Self::WordLevel(s) => s.score_words(wordlist),
            Self::PositionLevel(s) => s.score_words(wordlist),
        }
    }
}

impl ScoringMethod {
    /// Both policies, word-level first
    pub const ALL: [Self; 2] = [
        Self::WordLevel(WordLevelScore),
        Self::PositionLevel(PositionLevelScore),
    ];

    /// Create a method from its name
    ///
    /// Supported names: "word", "word-level", "`word_level_score`", "position",
    /// "position-level", "`position_level_score`".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "word" | "word-level" | "word_level_score" => Some(Self::WordLevel(WordLevelScore)),
            "position" | "position-level" | "position_level_score" => {
                Some(Self::PositionLevel(PositionLevelScore))
            }
            _ => None,
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("unknown scoring method '{s}' (expected 'word' or 'position')"))
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
