//! Accepted-guess dictionary

use crate::core::Word;
use rustc_hash::FxHashSet;

/// The set of words a player may guess
///
/// Usually larger than the solution list; built from both lists so every
/// solution is also a legal guess.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any number of wordlists
    pub fn new<'a, I>(lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [Word]>,
    {
        let words = lists
            .into_iter()
            .flatten()
            .map(|word| word.text().to_string())
            .collect();
        Self { words }
    }

    /// True if `guess` is an accepted word (case-insensitive)
    #[must_use]
    pub fn contains(&self, guess: &str) -> bool {
        if guess.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&guess.to_ascii_lowercase())
        } else {
            self.words.contains(guess)
        }
    }

    /// Number of distinct accepted words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a Word> for Dictionary {
    fn from_iter<T: IntoIterator<Item = &'a Word>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.text().to_string()).collect(),
        }
    }
}
