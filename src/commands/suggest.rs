//! One-shot suggestions from a list of observed feedback

use super::Wordlists;
use crate::core::{Feedback, Word, filter_history};
use crate::error::GameError;
use crate::scoring::ScoringPolicy;
use anyhow::{Context, Result};

/// Surviving candidates and the best next guesses among them
#[derive(Debug, Clone)]
pub struct SuggestResult {
    pub remaining: Vec<Word>,
    /// Top-ranked candidates, best first
    pub suggestions: Vec<(String, f64)>,
}

/// Parse `WORD:PATTERN` arguments into feedback
///
/// # Errors
///
/// Returns an error naming the first argument that does not parse.
pub fn parse_feedback<S: AsRef<str>>(pairs: &[S]) -> Result<Vec<Feedback>> {
    pairs
        .iter()
        .map(|pair| {
            let pair = pair.as_ref();
            Feedback::parse_pair(pair).with_context(|| format!("invalid feedback '{pair}'"))
        })
        .collect()
}

/// Narrow the solution list by `history` and rank what is left
///
/// # Errors
///
/// Fails when the feedback rules out every solution word.
pub fn suggest<P: ScoringPolicy + ?Sized>(
    policy: &P,
    lists: &Wordlists,
    history: &[Feedback],
    top: usize,
) -> Result<SuggestResult> {
    for feedback in history {
        if !lists.dictionary.contains(&feedback.guess()) {
            log::warn!("'{}' is not in the dictionary", feedback.guess());
        }
    }

    let remaining = filter_history(&lists.solutions, history);
    if remaining.is_empty() {
        return Err(GameError::EmptyCandidatePool)
            .context("no solution matches that feedback; check the patterns");
    }

    let suggestions = policy
        .rank(&remaining)?
        .into_iter()
        .take(top)
        .map(|scored| (scored.word.text().to_string(), scored.score))
        .collect();

    Ok(SuggestResult {
        remaining,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::wordlists;
    use crate::scoring::{PositionLevelScore, WordLevelScore};

    #[test]
    fn narrows_and_ranks() {
        let lists = wordlists();
        let history = parse_feedback(&["orate:-YYYY", "sulci:--Y--"]).unwrap();
        let result = suggest(&WordLevelScore, &lists, &history, 5).unwrap();

        let remaining: Vec<&str> = result.remaining.iter().map(Word::text).collect();
        assert_eq!(remaining, vec!["later", "alter", "alert"]);

        let words: Vec<&str> = result.suggestions.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["later", "alter", "alert"]);
        assert!(result.suggestions.iter().all(|(_, s)| (s - 5.0).abs() < 1e-12));
    }

    #[test]
    fn top_limits_suggestions() {
        let lists = wordlists();
        let result = suggest(&PositionLevelScore, &lists, &[], 3).unwrap();
        assert_eq!(result.remaining.len(), 20);
        assert_eq!(result.suggestions.len(), 3);
        assert_eq!(result.suggestions[0].0, "arise");
    }

    #[test]
    fn emoji_patterns_are_accepted() {
        let lists = wordlists();
        let history = parse_feedback(&["later:⬜🟩⬜🟨⬜"]).unwrap();
        let result = suggest(&WordLevelScore, &lists, &history, 5).unwrap();
        let remaining: Vec<&str> = result.remaining.iter().map(Word::text).collect();
        assert_eq!(remaining, vec!["pause", "cause"]);
    }

    #[test]
    fn contradictory_feedback_is_an_error() {
        let lists = wordlists();
        let history = parse_feedback(&["later:GGGGG", "pause:GGGGG"]).unwrap();
        assert!(suggest(&WordLevelScore, &lists, &history, 5).is_err());
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        assert!(parse_feedback(&["later"]).is_err());
        assert!(parse_feedback(&["later:GG"]).is_err());
        assert!(parse_feedback(&["later:GGGGZ"]).is_err());
    }
}
