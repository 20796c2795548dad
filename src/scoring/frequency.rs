//! Letter frequency statistics over a wordlist
//!
//! Scores are fractions of the wordlist and are always computed fresh from
//! the list they are given; nothing is cached between calls.

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use crate::error::GameError;

/// Fraction of words containing each letter at least once
///
/// Indexed by letter; every value is in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterScores([f64; ALPHABET_SIZE]);

impl LetterScores {
    /// Compute inclusion fractions over `wordlist`
    ///
    /// # Errors
    /// Returns [`GameError::EmptyCandidatePool`] for an empty wordlist.
    pub fn from_wordlist(wordlist: &[Word]) -> Result<Self, GameError> {
        if wordlist.is_empty() {
            return Err(GameError::EmptyCandidatePool);
        }

        let total = wordlist.len() as f64;
        let counts = inclusion_counts(wordlist);
        Ok(Self(counts.map(|count| count as f64 / total)))
    }

    /// Score for one letter (0.0 for anything outside a-z)
    #[must_use]
    pub fn get(&self, letter: u8) -> f64 {
        if letter.is_ascii_lowercase() {
            self.0[letter_index(letter)]
        } else {
            0.0
        }
    }

    /// All letters with their scores, highest first
    ///
    /// Letters with equal scores stay in alphabetical order.
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, f64)> {
        let mut letters: Vec<(char, f64)> = alphabet().zip(self.0).collect();
        letters.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        letters
    }
}

/// Fraction of words having each letter at each position
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalLetterScores([[f64; WORD_LENGTH]; ALPHABET_SIZE]);

impl PositionalLetterScores {
    /// Compute positional fractions over `wordlist`
    ///
    /// # Errors
    /// Returns [`GameError::EmptyCandidatePool`] for an empty wordlist.
    pub fn from_wordlist(wordlist: &[Word]) -> Result<Self, GameError> {
        if wordlist.is_empty() {
            return Err(GameError::EmptyCandidatePool);
        }

        let total = wordlist.len() as f64;
        let by_position = letter_counts_by_position(wordlist);

        let mut scores = [[0.0; WORD_LENGTH]; ALPHABET_SIZE];
        for (letter, row) in scores.iter_mut().enumerate() {
            for (position, score) in row.iter_mut().enumerate() {
                *score = by_position[position][letter] as f64 / total;
            }
        }
        Ok(Self(scores))
    }

    /// Score for `letter` at `position`
    #[must_use]
    pub fn get(&self, letter: u8, position: usize) -> f64 {
        if letter.is_ascii_lowercase() && position < WORD_LENGTH {
            self.0[letter_index(letter)][position]
        } else {
            0.0
        }
    }
}

/// The letters a-z in order
pub fn alphabet() -> impl Iterator<Item = char> {
    'a'..='z'
}

/// Number of words containing each letter at least once
#[must_use]
pub fn inclusion_counts(wordlist: &[Word]) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0usize; ALPHABET_SIZE];
    for word in wordlist {
        for letter in word.distinct_letters() {
            counts[letter_index(letter)] += 1;
        }
    }
    counts
}

/// Total occurrences of each letter, repeats included
#[must_use]
pub fn letter_counts(wordlist: &[Word]) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0usize; ALPHABET_SIZE];
    for word in wordlist {
        for &letter in word.chars() {
            counts[letter_index(letter)] += 1;
        }
    }
    counts
}

/// Occurrences of each letter at each position: `counts[position][letter]`
#[must_use]
pub fn letter_counts_by_position(wordlist: &[Word]) -> [[usize; ALPHABET_SIZE]; WORD_LENGTH] {
    let mut counts = [[0usize; ALPHABET_SIZE]; WORD_LENGTH];
    for word in wordlist {
        for (position, &letter) in word.chars().iter().enumerate() {
            counts[position][letter_index(letter)] += 1;
        }
    }
    counts
}

/// Words in which some letter occurs more than `repeats` times
#[must_use]
pub fn repeated_letter_words(wordlist: &[Word], repeats: u8) -> Vec<&Word> {
    wordlist
        .iter()
        .filter(|word| word.has_repeats_over(repeats))
        .collect()
}

/// Score how easy each word in `words` is to hit
///
/// Each letter is weighted by its share of all letter occurrences in
/// `reference`; a word's score is the sum over its five letters, repeats
/// included. Lower scores mean rarer letters, i.e. a harder word.
///
/// # Errors
/// Returns [`GameError::EmptyCandidatePool`] if `reference` is empty.
pub fn difficulty_scores(words: &[Word], reference: &[Word]) -> Result<Vec<f64>, GameError> {
    let counts = letter_counts(reference);
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Err(GameError::EmptyCandidatePool);
    }

    let shares = counts.map(|count| count as f64 / total as f64);
    Ok(words
        .iter()
        .map(|word| {
            word.chars()
                .iter()
                .map(|&letter| shares[letter_index(letter)])
                .sum()
        })
        .collect())
}
