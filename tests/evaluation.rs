//! Batch evaluation over the fixture solution list

use std::collections::BTreeMap;
use wordle_assistant::commands::{EvaluationConfig, Wordlists, evaluate};
use wordle_assistant::game::MAX_GUESSES;
use wordle_assistant::scoring::{PositionLevelScore, WordLevelScore};
use wordle_assistant::wordlists::load_wordlist;

fn fixture() -> Wordlists {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");
    Wordlists::new(
        load_wordlist(format!("{dir}/solutions.txt")).unwrap(),
        load_wordlist(format!("{dir}/guesses.txt")).unwrap(),
    )
}

#[test]
fn word_level_batch() {
    let lists = fixture();
    let (records, stats) = evaluate(&WordLevelScore, &lists, &EvaluationConfig::default()).unwrap();

    assert_eq!(records.len(), 861);
    assert!(records.iter().all(|r| r.guess_count <= MAX_GUESSES));
    assert!(records.iter().all(|r| r.method == "word_level_score"));

    assert_eq!(stats.solved, 857);
    assert_eq!(stats.failed_words, vec!["hatch", "sound", "tight", "wound"]);
    assert_eq!(stats.max_guesses, 6);
    assert!((stats.average_guesses - 2773.0 / 857.0).abs() < 1e-12);

    let expected: BTreeMap<usize, usize> =
        [(1, 1), (2, 108), (3, 479), (4, 232), (5, 31), (6, 6)].into_iter().collect();
    assert_eq!(stats.guess_distribution, expected);
}

#[test]
fn position_level_batch() {
    let lists = fixture();
    let (_, stats) = evaluate(&PositionLevelScore, &lists, &EvaluationConfig::default()).unwrap();

    assert_eq!(stats.solved, 860);
    assert_eq!(stats.failed_words, vec!["wound"]);
    assert!((stats.average_guesses - 2782.0 / 860.0).abs() < 1e-12);
    assert_eq!(stats.guess_distribution.get(&2), Some(&118));
}

#[test]
fn batch_with_guess_only_opener() {
    let lists = fixture();
    let config = EvaluationConfig {
        opener: lists.opener(Some("salet")).unwrap(),
        ..EvaluationConfig::default()
    };

    let (records, stats) = evaluate(&WordLevelScore, &lists, &config).unwrap();
    assert!(records.iter().all(|r| r.guess_words()[0] == "salet"));
    assert_eq!(stats.solved, 859);
    assert_eq!(stats.failed_words, vec!["hatch", "wound"]);
    assert!((stats.average_guesses - 2785.0 / 859.0).abs() < 1e-12);
}
