//! Batch evaluation
//!
//! Runs the auto-solver against every solution word (or a prefix of the list)
//! and summarizes the results.

use super::Wordlists;
use crate::core::Word;
use crate::error::GameError;
use crate::game::{AutoSolver, GameRecord, write_json_lines};
use crate::scoring::ScoringPolicy;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};

/// How many of the hardest words a summary keeps
pub const HARDEST_WORDS: usize = 10;

/// Options for a batch run
#[derive(Debug, Clone, Default)]
pub struct EvaluationConfig {
    /// Fixed first guess for every game
    pub opener: Option<Word>,
    /// Only evaluate the first `limit` solutions
    pub limit: Option<usize>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

/// Statistics from a batch run
#[derive(Debug, Clone)]
pub struct EvaluationStatistics {
    pub method: String,
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Solved games per guess count
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    /// Mean guesses over solved games
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Words that took the most guesses, failures first
    pub hardest_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

/// Solve every selected solution word with `policy`
///
/// Games run in parallel; records come back in solution-list order.
///
/// # Errors
///
/// Returns an error if a game cannot be played, e.g. the opener is not an
/// accepted guess or a solution is missing from its own pool.
pub fn run_evaluation<P: ScoringPolicy + ?Sized>(
    policy: &P,
    lists: &Wordlists,
    config: &EvaluationConfig,
) -> Result<Vec<GameRecord>> {
    let targets = &lists.solutions[..config.limit.unwrap_or(usize::MAX).min(lists.solutions.len())];
    let solver = AutoSolver::new(policy).with_opener(config.opener.clone());

    log::info!(
        "evaluating {} words with {}{}",
        targets.len(),
        policy.name(),
        config
            .opener
            .as_ref()
            .map(|w| format!(" (opener '{w}')"))
            .unwrap_or_default()
    );

    let progress = progress_bar(targets.len(), config.show_progress)?;

    let records = targets
        .par_iter()
        .map(|target| {
            let record = solver.play(target, &lists.dictionary, &lists.solutions);
            progress.inc(1);
            record
        })
        .collect::<Result<Vec<_>, GameError>>()
        .context("batch evaluation failed")?;

    progress.finish_and_clear();
    Ok(records)
}

fn progress_bar(len: usize, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {eta}")
            .context("invalid progress template")?
            .progress_chars("█▓▒░"),
    );
    Ok(bar)
}

/// Summarize a batch of records
#[must_use]
pub fn summarize(
    method: &str,
    records: &[GameRecord],
    total_time: Duration,
) -> EvaluationStatistics {
    let solved: Vec<&GameRecord> = records.iter().filter(|r| r.solved).collect();

    let mut guess_distribution = BTreeMap::new();
    for record in &solved {
        *guess_distribution.entry(record.guess_count).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.guess_count).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut hardest: Vec<&GameRecord> = records.iter().collect();
    // Stable, so equally hard words stay in list order
    hardest.sort_by_key(|r| (r.solved, std::cmp::Reverse(r.guess_count)));
    let hardest_words = hardest
        .into_iter()
        .take(HARDEST_WORDS)
        .map(|r| (r.solution.clone(), r.guess_count))
        .collect();

    EvaluationStatistics {
        method: method.to_string(),
        total_words: records.len(),
        solved: solved.len(),
        failed: records.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.guess_count).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.guess_count).min().unwrap_or(0),
        hardest_words,
        failed_words: records
            .iter()
            .filter(|r| !r.solved)
            .map(|r| r.solution.clone())
            .collect(),
    }
}

/// Run a batch and summarize it, timing the whole run
///
/// # Errors
///
/// See [`run_evaluation`].
pub fn evaluate<P: ScoringPolicy + ?Sized>(
    policy: &P,
    lists: &Wordlists,
    config: &EvaluationConfig,
) -> Result<(Vec<GameRecord>, EvaluationStatistics)> {
    let start = Instant::now();
    let records = run_evaluation(policy, lists, config)?;
    let stats = summarize(policy.name(), &records, start.elapsed());
    Ok((records, stats))
}

/// Write records to `path` as JSON lines
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_records(path: &Path, records: &[GameRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    write_json_lines(BufWriter::new(file), records)
        .with_context(|| format!("cannot write records to {}", path.display()))?;
    log::info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}
