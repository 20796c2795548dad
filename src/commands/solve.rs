//! Word solving command
//!
//! Solves a specific solution word and returns the path taken.

use super::Wordlists;
use crate::core::{Feedback, Word, filter};
use crate::game::{AutoSolver, GameSession};
use crate::scoring::ScoringPolicy;
use anyhow::{Context, Result};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub opener: Option<Word>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            opener: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: String,
    pub method: &'static str,
}

/// A single guess in the solution path
pub struct GuessStep {
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl GuessStep {
    #[must_use]
    pub fn word(&self) -> String {
        self.feedback.guess()
    }
}

/// Solve `config.target` with `policy`, starting from the full solution list
///
/// # Errors
///
/// Returns an error if:
/// - The target is malformed or not in the solution list
/// - The opener is not an accepted guess
pub fn solve_word<P: ScoringPolicy + ?Sized>(
    config: SolveConfig,
    policy: &P,
    lists: &Wordlists,
) -> Result<SolveResult> {
    let target = lists.solution_word(&config.target)?;

    let mut session =
        GameSession::new(target.clone(), &lists.dictionary).with_solver(lists.solutions.clone());
    let outcome = AutoSolver::new(policy)
        .with_opener(config.opener)
        .solve(&mut session)
        .with_context(|| format!("failed to solve '{target}'"))?;

    // Replay the feedback to report how far each guess narrowed the pool
    let mut pool = lists.solutions.clone();
    let steps = outcome
        .feedback
        .iter()
        .map(|feedback| {
            let candidates_before = pool.len();
            pool = filter(&pool, feedback);
            GuessStep {
                feedback: *feedback,
                candidates_before,
                candidates_after: pool.len(),
            }
        })
        .collect();

    Ok(SolveResult {
        success: outcome.solved,
        steps,
        target: target.text().to_string(),
        method: policy.name(),
    })
}
