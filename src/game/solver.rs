//! Automatic play
//!
//! Drives a [`GameSession`] to the end by always guessing the top-ranked
//! candidate, optionally starting from a fixed opener.

use super::record::GameRecord;
use super::session::GameSession;
use crate::core::{Feedback, Word};
use crate::error::GameError;
use crate::scoring::ScoringPolicy;
use crate::wordlists::Dictionary;

/// Outcome of an automatic solve
///
/// A lost game is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub feedback: Vec<Feedback>,
    pub solved: bool,
}

impl SolveOutcome {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.feedback.len()
    }
}

/// Plays games using a scoring policy
pub struct AutoSolver<'p, P: ScoringPolicy + ?Sized> {
    policy: &'p P,
    opener: Option<Word>,
}

impl<'p, P: ScoringPolicy + ?Sized> AutoSolver<'p, P> {
    /// Create a solver that ranks every guess with `policy`
    #[must_use]
    pub const fn new(policy: &'p P) -> Self {
        Self {
            policy,
            opener: None,
        }
    }

    /// Always open with `opener` instead of ranking the full pool
    ///
    /// The first ranking over the full solution list is the same for every
    /// game, so a fixed opener skips that work.
    #[must_use]
    pub fn with_opener(mut self, opener: Option<Word>) -> Self {
        self.opener = opener;
        self
    }

    /// Play `session` until it is won or lost
    ///
    /// # Errors
    /// - [`GameError::SolverDisabled`] if the session has no candidate pool
    /// - [`GameError::EmptyCandidatePool`] if feedback ever eliminated every
    ///   candidate
    /// - [`GameError::InvalidGuessWord`] if the opener is not in the
    ///   session's dictionary
    pub fn solve(&self, session: &mut GameSession<'_>) -> Result<SolveOutcome, GameError> {
        if session.candidates().is_none() {
            return Err(GameError::SolverDisabled);
        }

        while !session.is_over() {
            let guess = match (&self.opener, session.guess_count()) {
                (Some(opener), 0) => opener.clone(),
                _ => {
                    let pool = session.candidates().ok_or(GameError::SolverDisabled)?;
                    self.policy.best_guess(pool)?.clone()
                }
            };
            session.evaluate_guess(guess.text())?;
        }

        Ok(SolveOutcome {
            feedback: session.guesses().to_vec(),
            solved: session.is_solved(),
        })
    }

    /// Play one full game for `solution`, starting from `pool`
    ///
    /// # Errors
    /// Same as [`solve`](AutoSolver::solve).
    pub fn play(
        &self,
        solution: &Word,
        dictionary: &Dictionary,
        pool: &[Word],
    ) -> Result<GameRecord, GameError> {
        let mut session = GameSession::new(solution.clone(), dictionary).with_solver(pool.to_vec());
        let outcome = self.solve(&mut session)?;
        Ok(GameRecord::new(solution, self.policy.name(), outcome))
    }
}

/// Solve `session` with `policy`, optionally opening with `opening_guess`
///
/// # Errors
/// See [`AutoSolver::solve`].
pub fn solve<P: ScoringPolicy + ?Sized>(
    session: &mut GameSession<'_>,
    policy: &P,
    opening_guess: Option<&Word>,
) -> Result<SolveOutcome, GameError> {
    AutoSolver::new(policy)
        .with_opener(opening_guess.cloned())
        .solve(session)
}
