//! Word list loading utilities
//!
//! Reads newline-delimited word lists from files or string slices.

use crate::core::Word;
use crate::error::WordlistError;
use std::fs;
use std::path::Path;

/// Load a wordlist from a file
///
/// One word per line. Blank lines are ignored, invalid entries are skipped
/// with a warning, and duplicates are kept in file order.
///
/// # Errors
///
/// Returns `WordlistError::Io` if the file cannot be read and
/// `WordlistError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::load_wordlist;
///
/// let words = load_wordlist("wordlist_solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordlistError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordlistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_wordlist(&content);
    if words.is_empty() {
        return Err(WordlistError::Empty(path.to_path_buf()));
    }

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited words
#[must_use]
pub fn parse_wordlist(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("skipping line {}: {e}", line_number + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, dropping invalid entries
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["later", "orate", "toolong"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
