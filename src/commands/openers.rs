//! Opening-word study
//!
//! Evaluates the whole solution list once per candidate opener and reports
//! how each opener performs.

use super::Wordlists;
use super::evaluate::{EvaluationConfig, run_evaluation, summarize};
use crate::scoring::ScoringPolicy;
use anyhow::Result;
use indicatif::ProgressBar;
use std::io::{self, Write};
use std::time::Instant;

/// Performance of one fixed opener across the solution list
#[derive(Debug, Clone, PartialEq)]
pub struct OpenerStats {
    pub opener: String,
    /// Mean guesses over solved games
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub failed: usize,
}

/// Try each of the first `candidates` solution words as a fixed opener
///
/// Results are sorted by average guesses, best first; ties keep list order.
///
/// # Errors
///
/// Returns an error if any batch fails (see [`run_evaluation`]).
pub fn run_opener_study<P: ScoringPolicy + ?Sized>(
    policy: &P,
    lists: &Wordlists,
    candidates: usize,
    show_progress: bool,
) -> Result<Vec<OpenerStats>> {
    let openers = &lists.solutions[..candidates.min(lists.solutions.len())];
    let progress = if show_progress {
        ProgressBar::new(openers.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let mut study = Vec::with_capacity(openers.len());
    for opener in openers {
        let start = Instant::now();
        let config = EvaluationConfig {
            opener: Some(opener.clone()),
            ..EvaluationConfig::default()
        };
        let records = run_evaluation(policy, lists, &config)?;
        let stats = summarize(policy.name(), &records, start.elapsed());
        log::debug!(
            "opener '{opener}': avg {:.3}, max {}, failed {}",
            stats.average_guesses,
            stats.max_guesses,
            stats.failed
        );

        study.push(OpenerStats {
            opener: opener.text().to_string(),
            average_guesses: stats.average_guesses,
            max_guesses: stats.max_guesses,
            failed: stats.failed,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    study.sort_by(|a, b| a.average_guesses.total_cmp(&b.average_guesses));
    Ok(study)
}

/// Write the study as CSV
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_opener_csv<W: Write>(mut writer: W, study: &[OpenerStats]) -> io::Result<()> {
    writeln!(writer, "opener,average_guesses,max_guesses,failed")?;
    for row in study {
        writeln!(
            writer,
            "{},{:.4},{},{}",
            row.opener, row.average_guesses, row.max_guesses, row.failed
        )?;
    }
    writer.flush()
}
