//! Per-game result records
//!
//! The shape handed to storage and reporting: which solution, which scoring
//! method, the raw feedback sequence, the guess count, and whether it was
//! solved.

use super::solver::SolveOutcome;
use crate::core::{Feedback, Word};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Result of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub solution: String,
    pub method: String,
    pub guesses: Vec<Feedback>,
    pub guess_count: usize,
    pub solved: bool,
}

impl GameRecord {
    #[must_use]
    pub fn new(solution: &Word, method: &str, outcome: SolveOutcome) -> Self {
        Self {
            solution: solution.text().to_string(),
            method: method.to_string(),
            guess_count: outcome.guess_count(),
            guesses: outcome.feedback,
            solved: outcome.solved,
        }
    }

    /// The guessed words, in order
    #[must_use]
    pub fn guess_words(&self) -> Vec<String> {
        self.guesses.iter().map(Feedback::guess).collect()
    }
}

/// Write records as JSON lines, one object per game
///
/// # Errors
/// Returns any serialization or I/O error from the writer.
pub fn write_json_lines<W: Write>(mut writer: W, records: &[GameRecord]) -> serde_json::Result<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    }
    writer.flush().map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameRecord {
        let solution = Word::new("pause").unwrap();
        let guesses = ["later", "pause"]
            .iter()
            .map(|g| Feedback::evaluate(&Word::new(*g).unwrap(), &solution))
            .collect();
        GameRecord::new(
            &solution,
            "word_level_score",
            SolveOutcome {
                feedback: guesses,
                solved: true,
            },
        )
    }

    #[test]
    fn record_counts_guesses() {
        let record = sample();
        assert_eq!(record.guess_count, 2);
        assert_eq!(record.guess_words(), vec!["later", "pause"]);
        assert!(record.solved);
    }

    #[test]
    fn json_lines_round_trip() {
        let records = vec![sample(), sample()];
        let mut buffer = Vec::new();
        write_json_lines(&mut buffer, &records).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: GameRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, records[0]);
        assert!(lines[0].contains("\"solution\":\"pause\""));
        assert!(lines[0].contains("\"verdict\":\"correct\""));
    }
}
