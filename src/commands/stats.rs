//! Wordlist analytics
//!
//! Letter frequencies, repeated-letter counts and word difficulty for the
//! loaded lists.

use super::Wordlists;
use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word};
use crate::scoring::LetterScores;
use crate::scoring::frequency::{
    alphabet, difficulty_scores, letter_counts, letter_counts_by_position, repeated_letter_words,
};
use anyhow::{Context, Result};

/// Highest repeat threshold reported
pub const MAX_REPEATS: u8 = 3;

/// Words in each list where some letter occurs more than `repeats` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatCount {
    pub repeats: u8,
    pub solutions: usize,
    pub guesses: usize,
}

/// Summary of the loaded word lists
#[derive(Debug, Clone)]
pub struct WordlistReport {
    pub solution_count: usize,
    pub guess_count: usize,
    pub dictionary_size: usize,
    /// Letter occurrences over the solution list, most common first
    pub letter_counts: Vec<(char, usize)>,
    /// Fraction of solutions containing each letter, highest first
    pub inclusion: Vec<(char, f64)>,
    /// `positional_counts[position][letter]` over the solution list
    pub positional_counts: [[usize; ALPHABET_SIZE]; WORD_LENGTH],
    pub repeats: Vec<RepeatCount>,
    /// Solution with the most common letters
    pub easiest: (String, f64),
    /// Solution with the rarest letters
    pub hardest: (String, f64),
}

/// Build the report for `lists`
///
/// # Errors
///
/// Fails if the solution list is empty.
pub fn build_report(lists: &Wordlists) -> Result<WordlistReport> {
    let solutions = &lists.solutions;
    let inclusion = LetterScores::from_wordlist(solutions)
        .context("cannot analyse an empty solution list")?
        .sorted();

    let mut counts: Vec<(char, usize)> = alphabet().zip(letter_counts(solutions)).collect();
    counts.sort_by(|(_, a), (_, b)| b.cmp(a));

    let repeats = (0..=MAX_REPEATS)
        .map(|repeats| RepeatCount {
            repeats,
            solutions: repeated_letter_words(solutions, repeats).len(),
            guesses: repeated_letter_words(&lists.guesses, repeats).len(),
        })
        .collect();

    let difficulty = difficulty_scores(solutions, solutions)?;
    let (easiest, hardest) = extremes(solutions, &difficulty)
        .context("cannot analyse an empty solution list")?;

    Ok(WordlistReport {
        solution_count: solutions.len(),
        guess_count: lists.guesses.len(),
        dictionary_size: lists.dictionary.len(),
        letter_counts: counts,
        inclusion,
        positional_counts: letter_counts_by_position(solutions),
        repeats,
        easiest,
        hardest,
    })
}

/// Highest and lowest scoring words; the first wins a tie
fn extremes(words: &[Word], scores: &[f64]) -> Option<((String, f64), (String, f64))> {
    let mut scored = words.iter().zip(scores.iter().copied());
    let first = scored.next()?;
    let (mut high, mut low) = (first, first);
    for (word, score) in scored {
        if score > high.1 {
            high = (word, score);
        }
        if score < low.1 {
            low = (word, score);
        }
    }
    Some((
        (high.0.text().to_string(), high.1),
        (low.0.text().to_string(), low.1),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::wordlists;
    use crate::core::letter_index;

    #[test]
    fn report_on_fixture_lists() {
        let lists = wordlists();
        let report = build_report(&lists).unwrap();

        assert_eq!(report.solution_count, 20);
        assert_eq!(report.guess_count, 4);
        assert_eq!(report.dictionary_size, 24);

        assert_eq!(&report.letter_counts[..4], &[('e', 26), ('a', 13), ('r', 11), ('s', 10)]);
        assert_eq!(report.inclusion[0].0, 'e');
        assert!((report.inclusion[0].1 - 0.85).abs() < 1e-12);
        assert_eq!(report.positional_counts[0][letter_index(b's')], 4);
    }

    #[test]
    fn repeated_letter_counts() {
        let report = build_report(&wordlists()).unwrap();
        let rows: Vec<(u8, usize, usize)> = report
            .repeats
            .iter()
            .map(|r| (r.repeats, r.solutions, r.guesses))
            .collect();
        assert_eq!(rows, vec![(0, 20, 4), (1, 11, 2), (2, 2, 0), (3, 0, 0)]);
    }

    #[test]
    fn easiest_and_hardest_words() {
        let report = build_report(&wordlists()).unwrap();
        assert_eq!(report.easiest.0, "eerie");
        assert!((report.easiest.1 - 0.93).abs() < 1e-9);
        assert_eq!(report.hardest.0, "floor");
        assert!((report.hardest.1 - 0.28).abs() < 1e-9);
    }

    #[test]
    fn empty_solution_list_is_an_error() {
        let lists = Wordlists::new(Vec::new(), Vec::new());
        assert!(build_report(&lists).is_err());
    }
}
