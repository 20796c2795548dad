//! Wordle feedback calculation and representation
//!
//! Each guessed letter receives one of three verdicts:
//! - 0 = Absent (letter not in the word, or all its copies already claimed)
//! - 1 = Present elsewhere (letter in the word, wrong position)
//! - 2 = Correct position
//!
//! A [`Feedback`] keeps the guessed letter next to its verdict, so it can be
//! rendered and filtered on without the original guess.

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use crate::error::FeedbackParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterVerdict {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl LetterVerdict {
    /// Numeric value of the verdict (0, 1 or 2)
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// True for anything but [`LetterVerdict::Absent`]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Parse a single feedback mark
    ///
    /// Accepts `G`/`2`/🟩 for correct, `Y`/`1`/🟨 for present and
    /// `-`/`_`/`.`/`X`/`0`/⬜/⬛ for absent (letters case-insensitive).
    ///
    /// # Errors
    /// Returns [`FeedbackParseError::InvalidMark`] for any other character.
    pub fn from_mark(mark: char) -> Result<Self, FeedbackParseError> {
        match mark {
            'G' | 'g' | '2' | '🟩' => Ok(Self::Correct),
            'Y' | 'y' | '1' | '🟨' => Ok(Self::Present),
            '-' | '_' | '.' | 'X' | 'x' | '0' | '⬜' | '⬛' => Ok(Self::Absent),
            other => Err(FeedbackParseError::InvalidMark(other)),
        }
    }

    /// Emoji square for the verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// A guessed letter paired with its verdict
///
/// The letter is always one of `a..=z`: [`FeedbackEntry::new`] and
/// deserialization both reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub struct FeedbackEntry {
    letter: u8,
    verdict: LetterVerdict,
}

/// Serialized form of a [`FeedbackEntry`]
#[derive(Serialize, Deserialize)]
struct RawEntry {
    letter: char,
    verdict: LetterVerdict,
}

impl FeedbackEntry {
    /// Pair `letter` with `verdict`
    ///
    /// # Errors
    /// Returns [`FeedbackParseError::InvalidLetter`] unless `letter` is in `a..=z`.
    pub const fn new(letter: char, verdict: LetterVerdict) -> Result<Self, FeedbackParseError> {
        if letter.is_ascii_lowercase() {
            Ok(Self {
                letter: letter as u8,
                verdict,
            })
        } else {
            Err(FeedbackParseError::InvalidLetter(letter))
        }
    }

    /// The guessed letter
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter as char
    }

    #[inline]
    #[must_use]
    pub const fn verdict(self) -> LetterVerdict {
        self.verdict
    }

    /// The letter as an ASCII byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.letter
    }
}

impl TryFrom<RawEntry> for FeedbackEntry {
    type Error = FeedbackParseError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        Self::new(raw.letter, raw.verdict)
    }
}

impl From<FeedbackEntry> for RawEntry {
    fn from(entry: FeedbackEntry) -> Self {
        Self {
            letter: entry.letter(),
            verdict: entry.verdict,
        }
    }
}

/// Feedback for one guess: exactly five entries, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([FeedbackEntry; WORD_LENGTH]);

impl Feedback {
    /// Build feedback from explicit entries
    #[must_use]
    pub const fn new(entries: [FeedbackEntry; WORD_LENGTH]) -> Self {
        Self(entries)
    }

    /// Compute the feedback for `guess` when `solution` is the hidden word
    ///
    /// Follows Wordle's duplicate-letter rules: exact matches claim their
    /// letter first, then remaining copies are handed out left to right as
    /// present-elsewhere marks. A letter is never marked present or correct
    /// more times than it occurs in `solution`.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, LetterVerdict, Word};
    ///
    /// let guess = Word::new("sheep").unwrap();
    /// let solution = Word::new("speed").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &solution);
    ///
    /// assert_eq!(feedback.verdicts(), [
    ///     LetterVerdict::Correct,
    ///     LetterVerdict::Absent,
    ///     LetterVerdict::Correct,
    ///     LetterVerdict::Correct,
    ///     LetterVerdict::Present,
    /// ]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
        let mut remaining: [u8; ALPHABET_SIZE] = solution.letter_counts();

        // First pass: exact matches consume supply before anything else
        for (i, verdict) in verdicts.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == solution.char_at(i) {
                *verdict = LetterVerdict::Correct;
                remaining[letter_index(letter)] -= 1;
            }
        }

        // Second pass: hand out what is left, left to right
        for (i, verdict) in verdicts.iter_mut().enumerate() {
            if *verdict == LetterVerdict::Correct {
                continue;
            }
            let count = &mut remaining[letter_index(guess.char_at(i))];
            if *count > 0 {
                *verdict = LetterVerdict::Present;
                *count -= 1;
            }
        }

        Self::from_verdicts(guess, verdicts)
    }

    /// Pair each letter of `guess` with the verdict at the same position
    #[must_use]
    pub fn from_verdicts(guess: &Word, verdicts: [LetterVerdict; WORD_LENGTH]) -> Self {
        // Word letters are already validated
        Self(std::array::from_fn(|i| FeedbackEntry {
            letter: guess.char_at(i),
            verdict: verdicts[i],
        }))
    }

    /// Parse a user-typed pattern such as `"GY-G-"` or `"🟩🟨⬜🟩⬜"` for `guess`
    ///
    /// # Errors
    /// Returns an error if the pattern does not have five valid marks.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, Word};
    ///
    /// let guess = Word::new("orate").unwrap();
    /// let typed = Feedback::parse(&guess, "--y--").unwrap();
    /// let emoji = Feedback::parse(&guess, "⬜⬜🟨⬜⬜").unwrap();
    /// assert_eq!(typed, emoji);
    /// ```
    pub fn parse(guess: &Word, pattern: &str) -> Result<Self, FeedbackParseError> {
        let marks: Vec<char> = pattern.trim().chars().collect();
        if marks.len() != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(marks.len()));
        }

        let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
        for (verdict, &mark) in verdicts.iter_mut().zip(&marks) {
            *verdict = LetterVerdict::from_mark(mark)?;
        }

        Ok(Self::from_verdicts(guess, verdicts))
    }

    /// Parse a `WORD:PATTERN` pair, e.g. `"orate:--y--"`
    ///
    /// # Errors
    /// Returns an error if the separator is missing, the word is not a valid
    /// Wordle word, or the pattern is malformed.
    pub fn parse_pair(pair: &str) -> Result<Self, FeedbackParseError> {
        let (word, pattern) = pair
            .split_once([':', '='])
            .ok_or_else(|| FeedbackParseError::MissingSeparator(pair.to_string()))?;
        let guess = Word::new(word.trim())?;
        Self::parse(&guess, pattern)
    }

    /// The five entries in position order
    #[inline]
    #[must_use]
    pub const fn entries(&self) -> &[FeedbackEntry; WORD_LENGTH] {
        &self.0
    }

    /// The five verdicts in position order
    #[must_use]
    pub fn verdicts(&self) -> [LetterVerdict; WORD_LENGTH] {
        self.0.map(|entry| entry.verdict)
    }

    /// The guessed word this feedback describes
    #[must_use]
    pub fn guess(&self) -> String {
        self.0.iter().map(|entry| entry.letter()).collect()
    }

    /// True if every letter is in its correct position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0
            .iter()
            .all(|entry| entry.verdict == LetterVerdict::Correct)
    }

    /// Number of entries with the given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|entry| entry.verdict == verdict).count()
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|entry| entry.verdict.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    /// Formats as `GUESS PATTERN`, e.g. `later G-Y--`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks: String = self
            .0
            .iter()
            .map(|entry| match entry.verdict {
                LetterVerdict::Correct => 'G',
                LetterVerdict::Present => 'Y',
                LetterVerdict::Absent => '-',
            })
            .collect();
        write!(f, "{} {marks}", self.guess())
    }
}
