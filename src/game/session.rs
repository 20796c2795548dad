//! Turn-by-turn game state
//!
//! A session owns its solution, its guess history and (when the solver is
//! enabled) its own candidate pool. Nothing is shared between sessions, so
//! any number of them can run in parallel.

use crate::core::{Feedback, WORD_LENGTH, Word, filter};
use crate::error::GameError;
use crate::wordlists::Dictionary;
use rand::Rng;

/// Maximum number of guesses in one game
pub const MAX_GUESSES: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One Wordle game
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    solution: Word,
    solution_index: Option<usize>,
    dictionary: &'a Dictionary,
    guesses_made: Vec<Feedback>,
    candidates: Option<Vec<Word>>,
    solved: bool,
    ended: bool,
}

impl<'a> GameSession<'a> {
    /// Start a game with an explicit solution
    #[must_use]
    pub fn new(solution: Word, dictionary: &'a Dictionary) -> Self {
        Self {
            solution,
            solution_index: None,
            dictionary,
            guesses_made: Vec::with_capacity(MAX_GUESSES),
            candidates: None,
            solved: false,
            ended: false,
        }
    }

    /// Start a game with the solution at `index` of `solutions`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidSolutionIndex`] if `index` is out of range.
    pub fn from_index(
        solutions: &[Word],
        index: usize,
        dictionary: &'a Dictionary,
    ) -> Result<Self, GameError> {
        let solution = solutions
            .get(index)
            .cloned()
            .ok_or(GameError::InvalidSolutionIndex {
                index,
                len: solutions.len(),
            })?;
        let mut session = Self::new(solution, dictionary);
        session.solution_index = Some(index);
        Ok(session)
    }

    /// Start a game with a solution drawn at random from `solutions`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidSolutionIndex`] if `solutions` is empty.
    pub fn random<R: Rng + ?Sized>(
        solutions: &[Word],
        dictionary: &'a Dictionary,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if solutions.is_empty() {
            return Err(GameError::InvalidSolutionIndex { index: 0, len: 0 });
        }
        let index = rng.random_range(0..solutions.len());
        Self::from_index(solutions, index, dictionary)
    }

    /// Enable the solver: narrow `pool` after every guess
    ///
    /// The session takes its own copy of the pool.
    #[must_use]
    pub fn with_solver(mut self, pool: Vec<Word>) -> Self {
        self.candidates = Some(pool);
        self
    }

    /// Submit a guess
    ///
    /// Validates the guess, computes its feedback against the solution,
    /// records it, narrows the candidate pool (if enabled) and updates the
    /// win/loss state.
    ///
    /// # Errors
    /// - [`GameError::GameFinished`] if the game is already won or lost
    /// - [`GameError::InvalidGuessLength`] if the guess is not 5 letters
    /// - [`GameError::InvalidGuessWord`] if it is not in the dictionary
    pub fn evaluate_guess(&mut self, guess: &str) -> Result<Feedback, GameError> {
        if self.state().is_terminal() {
            return Err(GameError::GameFinished);
        }

        let guess = self.validate(guess)?;
        let feedback = Feedback::evaluate(&guess, &self.solution);
        self.guesses_made.push(feedback);

        if let Some(pool) = self.candidates.as_mut() {
            let before = pool.len();
            let narrowed = filter(pool, &feedback);
            *pool = narrowed;
            log::debug!(
                "guess {} '{guess}' -> {}: pool {before} -> {}",
                self.guesses_made.len(),
                feedback.to_emoji(),
                pool.len()
            );
        } else {
            log::debug!(
                "guess {} '{guess}' -> {}",
                self.guesses_made.len(),
                feedback.to_emoji()
            );
        }

        if guess == self.solution {
            self.solved = true;
        }

        Ok(feedback)
    }

    fn validate(&self, guess: &str) -> Result<Word, GameError> {
        let guess = guess.trim();
        let length = guess.chars().count();
        if length != WORD_LENGTH {
            return Err(GameError::InvalidGuessLength {
                expected: WORD_LENGTH,
                actual: length,
            });
        }
        if !self.dictionary.contains(guess) {
            return Err(GameError::InvalidGuessWord(guess.to_string()));
        }
        Word::new(guess).map_err(|_| GameError::InvalidGuessWord(guess.to_string()))
    }

    /// End the game early; it counts as lost unless already solved
    pub fn end(&mut self) {
        self.ended = true;
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.solved {
            GameState::Won
        } else if self.ended || self.guesses_made.len() >= MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// True once the game is won, lost, or ended explicitly
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state().is_terminal()
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn solution_index(&self) -> Option<usize> {
        self.solution_index
    }

    /// Feedback for every guess so far, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Feedback] {
        &self.guesses_made
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses_made.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses_made.len())
    }

    /// The remaining candidates, or `None` if the solver is disabled
    #[must_use]
    pub fn candidates(&self) -> Option<&[Word]> {
        self.candidates.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter_history;
    use crate::wordlists::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SOLUTIONS: &[&str] = &[
        "later", "alter", "alert", "pause", "speed", "sheep", "abide", "raise", "arise", "orate",
    ];
    const EXTRA_GUESSES: &[&str] = &["sulci", "aahed", "zymic", "qajaq", "fuzzy", "crwth"];

    fn setup() -> (Vec<Word>, Dictionary) {
        let solutions = words_from_slice(SOLUTIONS);
        let extra = words_from_slice(EXTRA_GUESSES);
        let dictionary = Dictionary::new([solutions.as_slice(), extra.as_slice()]);
        (solutions, dictionary)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_session_is_in_progress() {
        let (_, dictionary) = setup();
        let session = GameSession::new(word("later"), &dictionary);
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.guess_count(), 0);
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
        assert!(session.candidates().is_none());
    }

    #[test]
    fn guess_validation() {
        let (_, dictionary) = setup();
        let mut session = GameSession::new(word("later"), &dictionary);

        assert_eq!(
            session.evaluate_guess("late"),
            Err(GameError::InvalidGuessLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            session.evaluate_guess("latest"),
            Err(GameError::InvalidGuessLength {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            session.evaluate_guess("zzzzz"),
            Err(GameError::InvalidGuessWord("zzzzz".into()))
        );
        // Rejected guesses are not recorded
        assert_eq!(session.guess_count(), 0);
    }

    #[test]
    fn correct_guess_wins() {
        let (_, dictionary) = setup();
        let mut session = GameSession::new(word("pause"), &dictionary);

        let feedback = session.evaluate_guess("later").unwrap();
        assert!(!feedback.is_solved());
        assert_eq!(session.state(), GameState::InProgress);

        let feedback = session.evaluate_guess("PAUSE").unwrap();
        assert!(feedback.is_solved());
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.guess_count(), 2);
    }

    #[test]
    fn six_misses_lose() {
        let (_, dictionary) = setup();
        let mut session = GameSession::new(word("pause"), &dictionary);

        for guess in ["later", "alter", "alert", "speed", "sheep", "abide"] {
            assert!(!session.is_over());
            session.evaluate_guess(guess).unwrap();
        }
        assert_eq!(session.state(), GameState::Lost);
        assert!(!session.is_solved());
        assert_eq!(
            session.evaluate_guess("pause"),
            Err(GameError::GameFinished)
        );
        assert_eq!(session.guess_count(), MAX_GUESSES);
    }

    #[test]
    fn winning_on_sixth_guess_is_a_win() {
        let (_, dictionary) = setup();
        let mut session = GameSession::new(word("pause"), &dictionary);
        for guess in ["later", "alter", "alert", "speed", "sheep", "pause"] {
            session.evaluate_guess(guess).unwrap();
        }
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn no_guesses_after_win() {
        let (_, dictionary) = setup();
        let mut session = GameSession::new(word("raise"), &dictionary);
        session.evaluate_guess("raise").unwrap();
        assert_eq!(session.evaluate_guess("arise"), Err(GameError::GameFinished));
        assert_eq!(session.guess_count(), 1);
    }

    #[test]
    fn explicit_end_is_terminal() {
        let (_, dictionary) = setup();
        let mut session = GameSession::new(word("raise"), &dictionary);
        session.evaluate_guess("later").unwrap();
        session.end();
        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.evaluate_guess("raise"), Err(GameError::GameFinished));
    }

    #[test]
    fn solver_pool_matches_history() {
        let (solutions, dictionary) = setup();
        let mut session =
            GameSession::new(word("later"), &dictionary).with_solver(solutions.clone());

        session.evaluate_guess("orate").unwrap();
        session.evaluate_guess("sulci").unwrap();

        let expected = filter_history(&solutions, session.guesses());
        assert_eq!(session.candidates().unwrap(), expected.as_slice());
        assert!(session.candidates().unwrap().contains(&word("later")));
        // The shared list is untouched
        assert_eq!(solutions.len(), SOLUTIONS.len());
    }

    #[test]
    fn pool_only_shrinks() {
        let (solutions, dictionary) = setup();
        let mut session =
            GameSession::new(word("abide"), &dictionary).with_solver(solutions.clone());
        let mut previous = solutions.len();
        for guess in ["fuzzy", "speed", "raise"] {
            session.evaluate_guess(guess).unwrap();
            let now = session.candidates().unwrap().len();
            assert!(now <= previous);
            previous = now;
        }
        assert!(session.candidates().unwrap().contains(&word("abide")));
    }

    #[test]
    fn from_index_and_random() {
        let (solutions, dictionary) = setup();

        let session = GameSession::from_index(&solutions, 3, &dictionary).unwrap();
        assert_eq!(session.solution().text(), "pause");
        assert_eq!(session.solution_index(), Some(3));

        assert_eq!(
            GameSession::from_index(&solutions, 99, &dictionary).unwrap_err(),
            GameError::InvalidSolutionIndex { index: 99, len: 10 }
        );

        let mut rng = StdRng::seed_from_u64(7);
        let session = GameSession::random(&solutions, &dictionary, &mut rng).unwrap();
        let index = session.solution_index().unwrap();
        assert_eq!(session.solution(), &solutions[index]);

        assert!(GameSession::random(&[], &dictionary, &mut rng).is_err());
    }

    #[test]
    fn replay_is_deterministic() {
        let (solutions, dictionary) = setup();
        let play = || {
            let mut session =
                GameSession::new(word("alert"), &dictionary).with_solver(solutions.clone());
            for guess in ["orate", "later", "alter"] {
                session.evaluate_guess(guess).unwrap();
            }
            (session.guesses().to_vec(), session.candidates().unwrap().to_vec())
        };
        assert_eq!(play(), play());
    }
}
