//! Constraint filtering of candidate pools
//!
//! Turns one [`Feedback`] into a set of position rules plus per-letter count
//! bounds, then keeps the words that satisfy all of them.
//!
//! Position rules:
//! - correct at `i`: the word has the letter at `i`
//! - present at `i`: the word has the letter somewhere, but not at `i`
//! - absent at `i`: if the letter is marked present/correct elsewhere in the
//!   same guess, the word only lacks it at `i`; otherwise the word does not
//!   contain the letter at all
//!
//! Count bounds: a guessed letter with `k` present/correct marks occurs at
//! least `k` times, and exactly `k` times if one of its copies was marked
//! absent.

use super::feedback::{Feedback, LetterVerdict};
use super::word::{WORD_LENGTH, Word};

/// What a single guess position says about candidate words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PositionRule {
    /// Letter must be at this position
    Is(u8),
    /// Letter must be in the word, but not at this position
    Elsewhere(u8),
    /// Letter must not be at this position (it recurs elsewhere in the guess)
    NotHere(u8),
    /// Letter must not be in the word at all
    Nowhere(u8),
}

impl PositionRule {
    fn allows(self, word: &Word, position: usize) -> bool {
        match self {
            Self::Is(letter) => word.char_at(position) == letter,
            Self::Elsewhere(letter) => {
                word.char_at(position) != letter && word.has_letter(letter)
            }
            Self::NotHere(letter) => word.char_at(position) != letter,
            Self::Nowhere(letter) => !word.has_letter(letter),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterBound {
    letter: u8,
    min: usize,
    exact: bool,
}

impl LetterBound {
    fn allows(self, word: &Word) -> bool {
        let count = word.count_of(self.letter);
        if self.exact {
            count == self.min
        } else {
            count >= self.min
        }
    }
}

/// Everything one feedback round says about the hidden word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    rules: [PositionRule; WORD_LENGTH],
    bounds: Vec<LetterBound>,
}

impl Constraint {
    /// Compile a feedback into position rules and count bounds
    #[must_use]
    pub fn from_feedback(feedback: &Feedback) -> Self {
        let entries = feedback.entries();

        let rules = std::array::from_fn(|i| {
            let entry = entries[i];
            let letter = entry.byte();
            match entry.verdict() {
                LetterVerdict::Correct => PositionRule::Is(letter),
                LetterVerdict::Present => PositionRule::Elsewhere(letter),
                LetterVerdict::Absent => {
                    let hit_elsewhere = entries.iter().enumerate().any(|(j, other)| {
                        j != i && other.byte() == letter && other.verdict().is_hit()
                    });
                    if hit_elsewhere {
                        PositionRule::NotHere(letter)
                    } else {
                        PositionRule::Nowhere(letter)
                    }
                }
            }
        });

        let mut bounds: Vec<LetterBound> = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            let letter = entry.byte();
            if entries[..i].iter().any(|seen| seen.byte() == letter) {
                continue;
            }
            let same: Vec<LetterVerdict> = entries
                .iter()
                .filter(|other| other.byte() == letter)
                .map(|e| e.verdict())
                .collect();
            let min = same.iter().filter(|verdict| verdict.is_hit()).count();
            if min > 0 {
                bounds.push(LetterBound {
                    letter,
                    min,
                    exact: same.contains(&LetterVerdict::Absent),
                });
            }
        }

        Self { rules, bounds }
    }

    /// True if `word` could be the hidden word given this feedback
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.rules
            .iter()
            .enumerate()
            .all(|(position, rule)| rule.allows(word, position))
            && self.bounds.iter().all(|bound| bound.allows(word))
    }
}

/// Keep the words of `pool` that are consistent with `feedback`
///
/// Pure: the input is untouched and the result preserves the pool's order
/// (duplicates included).
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Feedback, Word, filter};
///
/// let pool: Vec<Word> = ["raise", "arise", "later"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("raise").unwrap();
/// let feedback = Feedback::evaluate(&guess, &guess);
///
/// let remaining = filter(&pool, &feedback);
/// assert_eq!(remaining, vec![Word::new("raise").unwrap()]);
/// ```
#[must_use]
pub fn filter(pool: &[Word], feedback: &Feedback) -> Vec<Word> {
    let constraint = Constraint::from_feedback(feedback);
    pool.iter()
        .filter(|word| constraint.matches(word))
        .cloned()
        .collect()
}

/// Apply a whole feedback history to `pool`
#[must_use]
pub fn filter_history(pool: &[Word], history: &[Feedback]) -> Vec<Word> {
    let constraints: Vec<Constraint> = history.iter().map(Constraint::from_feedback).collect();
    pool.iter()
        .filter(|word| constraints.iter().all(|c| c.matches(word)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Present};
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn evaluate(guess: &str, solution: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(solution).unwrap())
    }

    fn texts(pool: &[Word]) -> Vec<&str> {
        pool.iter().map(Word::text).collect()
    }

    const POOL: &[&str] = &[
        "raise", "arise", "later", "alter", "alert", "pause", "speed", "spree", "sheep", "creep",
        "abide", "eerie", "geese", "robot", "floor", "orate", "sulci", "llama", "mamma", "steed",
    ];

    #[test]
    fn all_correct_keeps_only_the_word() {
        let pool = words(POOL);
        let remaining = filter(&pool, &evaluate("raise", "raise"));
        assert_eq!(texts(&remaining), vec!["raise"]);
    }

    #[test]
    fn correct_requires_letter_at_position() {
        let guess = Word::new("zzzzs").unwrap();
        let fb = Feedback::from_verdicts(&guess, [Absent, Absent, Absent, Absent, Correct]);
        let remaining = filter(&words(&["pause", "flows", "skies", "basin"]), &fb);
        assert_eq!(texts(&remaining), vec!["flows", "skies"]);
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let guess = Word::new("szzzz").unwrap();
        let fb = Feedback::from_verdicts(&guess, [Present, Absent, Absent, Absent, Absent]);
        let remaining = filter(&words(&["pause", "speed", "later", "basin"]), &fb);
        assert_eq!(texts(&remaining), vec!["pause", "basin"]);
    }

    #[test]
    fn unique_absent_letter_excludes_word_everywhere() {
        let guess = Word::new("tzzzz").unwrap();
        let fb = Feedback::from_verdicts(&guess, [Absent; 5]);
        let remaining = filter(&words(&["later", "pause", "steed", "robin"]), &fb);
        assert_eq!(texts(&remaining), vec!["pause", "robin"]);
    }

    #[test]
    fn duplicate_absent_letter_only_excludes_position() {
        // "speed" against "abide": the second e is absent but the first is
        // present, so words with an e are kept as long as it is not at 3
        let fb = evaluate("speed", "abide");
        assert_eq!(fb.verdicts(), [Absent, Absent, Present, Absent, Present]);

        let pool = words(&["abide", "oxide", "elder", "ended", "ruled"]);
        let remaining = filter(&pool, &fb);
        // "elder": e at 0 and 3; count 2 exceeds the single hit
        // "ended": two e's
        // "ruled": e at 3 is excluded by position
        assert_eq!(texts(&remaining), vec!["abide", "oxide"]);
    }

    #[test]
    fn naive_absent_rule_would_drop_the_solution() {
        // A naive "absent means nowhere" reading of the second e would
        // remove "abide" itself
        let fb = evaluate("speed", "abide");
        let remaining = filter(&words(&["abide"]), &fb);
        assert_eq!(texts(&remaining), vec!["abide"]);
    }

    #[test]
    fn repeated_yellows_require_repeated_letters() {
        let fb = evaluate("eerie", "speed");
        assert_eq!(fb.verdicts(), [Present, Present, Absent, Absent, Absent]);
        let remaining = filter(&words(&["speed", "steed", "pause", "sheep", "abide"]), &fb);
        assert_eq!(texts(&remaining), vec!["speed", "steed", "sheep"]);
    }

    #[test]
    fn filter_preserves_order_and_duplicates() {
        let pool = words(&["pause", "later", "pause", "alter"]);
        let guess = Word::new("zzzzz").unwrap();
        let fb = Feedback::from_verdicts(&guess, [Absent; 5]);
        assert_eq!(filter(&pool, &fb), pool);
    }

    #[test]
    fn filter_history_intersects_rounds() {
        let pool = words(POOL);
        let history = [evaluate("orate", "later"), evaluate("sulci", "later")];
        let stepwise = filter(&filter(&pool, &history[0]), &history[1]);
        assert_eq!(filter_history(&pool, &history), stepwise);
        assert!(stepwise.iter().any(|w| w.text() == "later"));
    }

    #[test]
    fn filter_matches_direct_reevaluation_on_pool() {
        let pool = words(POOL);
        for guess in &pool {
            for solution in &pool {
                let fb = Feedback::evaluate(guess, solution);
                let expected: Vec<Word> = pool
                    .iter()
                    .filter(|w| Feedback::evaluate(guess, w) == fb)
                    .cloned()
                    .collect();
                assert_eq!(filter(&pool, &fb), expected, "guess {guess} solution {solution}");
            }
        }
    }

    fn arb_word() -> impl Strategy<Value = Word> {
        // A small alphabet makes repeated letters common
        "[aeslrt]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn never_marks_more_than_solution_has(guess in arb_word(), solution in arb_word()) {
            let fb = Feedback::evaluate(&guess, &solution);
            for letter in b'a'..=b'z' {
                let hits = fb
                    .entries()
                    .iter()
                    .filter(|e| e.byte() == letter && e.verdict().is_hit())
                    .count();
                prop_assert!(hits <= solution.count_of(letter));
            }
        }

        #[test]
        fn solution_always_survives(guess in arb_word(), solution in arb_word()) {
            let fb = Feedback::evaluate(&guess, &solution);
            prop_assert!(Constraint::from_feedback(&fb).matches(&solution));
        }

        #[test]
        fn filter_equals_reevaluation(
            guess in arb_word(),
            solution in arb_word(),
            pool in proptest::collection::vec(arb_word(), 0..40),
        ) {
            let fb = Feedback::evaluate(&guess, &solution);
            let expected: Vec<Word> = pool
                .iter()
                .filter(|w| Feedback::evaluate(&guess, w) == fb)
                .cloned()
                .collect();
            prop_assert_eq!(filter(&pool, &fb), expected);
        }

        #[test]
        fn filter_is_idempotent_and_monotone(
            guess in arb_word(),
            solution in arb_word(),
            pool in proptest::collection::vec(arb_word(), 0..40),
        ) {
            let fb = Feedback::evaluate(&guess, &solution);
            let once = filter(&pool, &fb);
            prop_assert!(once.len() <= pool.len());
            prop_assert_eq!(filter(&once, &fb), once);
        }
    }
}
