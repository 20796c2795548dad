//! Interactive solving assistant
//!
//! Helps with a game played elsewhere: the user types each guess with the
//! feedback it received, and the assistant narrows the solution list and
//! suggests what to play next under both scoring methods.

use super::Wordlists;
use crate::core::{Feedback, Word, filter_history};
use crate::output::formatters::{feedback_line, guesses_word};
use crate::scoring::{ScoringMethod, ScoringPolicy};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the assistant until the user quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_assist<R: BufRead, W: Write>(
    lists: &Wordlists,
    top: usize,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "\n{}", "Wordle Assistant".bright_cyan().bold())?;
    writeln!(output, "Enter each guess with its feedback, e.g. 'later -G-Y-'.")?;
    writeln!(output, "  G/🟩 correct, Y/🟨 elsewhere, -/⬜ absent")?;
    writeln!(output, "Commands: 'undo', 'new', 'quit'\n")?;

    let mut history: Vec<Feedback> = Vec::new();
    let mut show_pool = true;

    loop {
        let pool = filter_history(&lists.solutions, &history);
        if show_pool {
            describe_pool(&pool, top, &mut output)?;
        }
        show_pool = true;

        write!(output, "Guess {}: ", history.len() + 1)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "" => show_pool = false,
            "quit" | "q" | "exit" => return Ok(()),
            "new" | "n" => {
                history.clear();
                writeln!(output, "New game!\n")?;
            }
            "undo" | "u" => {
                if let Some(undone) = history.pop() {
                    writeln!(output, "Undid {}\n", feedback_line(&undone))?;
                } else {
                    writeln!(output, "Nothing to undo\n")?;
                    show_pool = false;
                }
            }
            _ => match parse_entry(line) {
                Ok(feedback) => {
                    if !lists.dictionary.contains(&feedback.guess()) {
                        log::warn!("'{}' is not in the dictionary", feedback.guess());
                    }
                    writeln!(output, "  {}", feedback_line(&feedback))?;
                    history.push(feedback);

                    if feedback.is_solved() {
                        let count = history.len();
                        writeln!(
                            output,
                            "\n{} Solved in {count} {}. New game!\n",
                            "🎉".bold(),
                            guesses_word(count)
                        )?;
                        history.clear();
                    }
                }
                Err(message) => {
                    writeln!(output, "  {message}")?;
                    show_pool = false;
                }
            },
        }
    }
}

/// Accepts `WORD PATTERN` or `WORD:PATTERN`
fn parse_entry(line: &str) -> Result<Feedback, String> {
    let parsed = match line.split_once(char::is_whitespace) {
        Some((word, pattern)) => Word::new(word)
            .map_err(|e| e.to_string())
            .and_then(|guess| Feedback::parse(&guess, pattern).map_err(|e| e.to_string())),
        None => Feedback::parse_pair(line).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| format!("{e} (expected e.g. 'later -G-Y-')"))
}

fn describe_pool<W: Write>(pool: &[Word], top: usize, output: &mut W) -> Result<()> {
    if pool.is_empty() {
        writeln!(
            output,
            "{}",
            "No candidates remain! Check the feedback, then 'undo' or 'new'.".red()
        )?;
        return Ok(());
    }

    writeln!(
        output,
        "{} candidates remaining",
        pool.len().to_string().bright_cyan().bold()
    )?;
    if pool.len() == 1 {
        writeln!(output, "The answer is {}", pool[0].text().to_uppercase().green().bold())?;
        return Ok(());
    }

    for method in ScoringMethod::ALL {
        let ranked = method.rank(pool)?;
        let words: Vec<String> = ranked
            .iter()
            .take(top.max(1))
            .map(|scored| scored.word.text().to_uppercase())
            .collect();
        writeln!(output, "  {:<22} {}", method.name(), words.join(" "))?;
    }
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::wordlists;

    fn assist(script: &str) -> String {
        colored::control::set_override(false);
        let lists = wordlists();
        let mut output = Vec::new();
        run_assist(&lists, 3, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn suggestions_under_both_methods() {
        let out = assist("quit\n");
        assert!(out.contains("20 candidates remaining"));
        assert!(out.contains("word_level_score       RAISE"));
        assert!(out.contains("position_level_score   ARISE"));
    }

    #[test]
    fn feedback_narrows_the_pool() {
        let out = assist("orate -YYYY\nsulci:--Y--\n");
        assert!(out.contains("3 candidates remaining"));
        assert!(out.contains("LATER ALTER ALERT"));
    }

    #[test]
    fn single_candidate_is_announced() {
        let out = assist("later ⬜🟩⬜🟨⬜\ncause -GGGG\n");
        assert!(out.contains("2 candidates remaining"));
        assert!(out.contains("The answer is PAUSE"));
    }

    #[test]
    fn undo_and_new() {
        let out = assist("undo\nlater -G-Y-\nundo\nlater -G-Y-\nnew\n");
        assert!(out.contains("Nothing to undo"));
        assert!(out.contains("Undid LATER ⬜🟩⬜🟨⬜"));
        assert!(out.contains("New game!"));
        assert_eq!(out.matches("20 candidates remaining").count(), 3);
    }

    #[test]
    fn solved_feedback_starts_over() {
        let out = assist("raise GGGGG\n");
        assert!(out.contains("Solved in 1 guess. New game!"));
    }

    #[test]
    fn contradictions_and_typos_are_reported() {
        let out = assist("later ----\nlater -----\n");
        assert!(out.contains("pattern must have 5 marks, got 4"));
        assert!(out.contains("No candidates remain!"));
    }
}
