//! Interactive game
//!
//! The player guesses a hidden solution word in up to six tries. Reads
//! guesses and commands line by line from any reader.

use super::Wordlists;
use crate::core::Word;
use crate::error::GameError;
use crate::game::{GameSession, GameState, MAX_GUESSES};
use crate::output::formatters::{colored_feedback, guesses_word};
use crate::scoring::ScoringPolicy;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

/// How to choose solutions
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Play this word in the first game
    pub solution: Option<Word>,
    /// Play the solution at this index in the first game
    pub index: Option<usize>,
    /// Seed for picking random solutions
    pub seed: Option<u64>,
    /// Number of suggestions shown by `hint`
    pub hints: usize,
}

enum Command {
    Quit,
    NewGame,
    Hint,
    Guess(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "hint" | "h" | "?" => Self::Hint,
            guess => Self::Guess(guess.to_string()),
        }
    }
}

/// Run the interactive game until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if the requested solution is not
/// in the solution list.
pub fn run_play<P, R, W>(
    policy: &P,
    lists: &Wordlists,
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    P: ScoringPolicy + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    writeln!(output, "\n{}", "Wordle".bright_green().bold())?;
    writeln!(
        output,
        "Guess the five-letter word in {MAX_GUESSES} tries. Commands: 'hint', 'new', 'quit'.\n"
    )?;

    let mut first_game = true;
    loop {
        let session = if first_game {
            first_game = false;
            start_session(lists, config, &mut rng)?
        } else {
            GameSession::random(&lists.solutions, &lists.dictionary, &mut rng)?
        };
        let mut session = session.with_solver(lists.solutions.clone());

        if let Some(index) = session.solution_index() {
            log::debug!("Solution is #{index}");
        }

        match play_one(policy, &mut session, config.hints, &mut input, &mut output)? {
            Command::Quit => {
                writeln!(output, "The word was {}.", reveal(&session))?;
                return Ok(());
            }
            Command::NewGame => {
                writeln!(output, "The word was {}. New game!\n", reveal(&session))?;
            }
            Command::Hint | Command::Guess(_) => {
                report_outcome(&session, &mut output)?;
                write!(output, "Play again? (yes/no): ")?;
                output.flush()?;
                match read_line(&mut input)? {
                    Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                        writeln!(output)?;
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}

fn start_session<'a>(
    lists: &'a Wordlists,
    config: &PlayConfig,
    rng: &mut StdRng,
) -> Result<GameSession<'a>> {
    if let Some(solution) = &config.solution {
        let index = lists
            .solutions
            .iter()
            .position(|w| w == solution)
            .with_context(|| format!("'{solution}' is not in the solution list"))?;
        return Ok(GameSession::from_index(&lists.solutions, index, &lists.dictionary)?);
    }
    if let Some(index) = config.index {
        return Ok(GameSession::from_index(&lists.solutions, index, &lists.dictionary)?);
    }
    Ok(GameSession::random(&lists.solutions, &lists.dictionary, rng)?)
}

/// Play until the game ends or the player leaves it; returns the command
/// that ended the loop (a guess or hint when the game finished normally)
fn play_one<P, R, W>(
    policy: &P,
    session: &mut GameSession<'_>,
    hints: usize,
    input: &mut R,
    output: &mut W,
) -> Result<Command>
where
    P: ScoringPolicy + ?Sized,
    R: BufRead,
    W: Write,
{
    while !session.is_over() {
        write!(output, "Guess {}/{MAX_GUESSES}: ", session.guess_count() + 1)?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            session.end();
            return Ok(Command::Quit);
        };
        if line.is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Command::Hint => show_hints(policy, session, hints, output)?,
            Command::Guess(guess) => match session.evaluate_guess(&guess) {
                Ok(feedback) => writeln!(output, "  {}", colored_feedback(&feedback))?,
                Err(
                    err @ (GameError::InvalidGuessLength { .. } | GameError::InvalidGuessWord(_)),
                ) => writeln!(output, "  {err}")?,
                Err(err) => return Err(err.into()),
            },
            command => {
                session.end();
                return Ok(command);
            }
        }
    }
    Ok(Command::Guess(String::new()))
}

fn show_hints<P, W>(
    policy: &P,
    session: &GameSession<'_>,
    hints: usize,
    output: &mut W,
) -> Result<()>
where
    P: ScoringPolicy + ?Sized,
    W: Write,
{
    let Some(pool) = session.candidates() else {
        return Ok(());
    };
    let ranked = policy.rank(pool)?;
    let words: Vec<String> = ranked
        .iter()
        .take(hints.max(1))
        .map(|scored| scored.word.text().to_uppercase())
        .collect();
    writeln!(
        output,
        "  {} possible; try {}",
        pool.len(),
        words.join(", ")
    )?;
    Ok(())
}

fn report_outcome<W: Write>(session: &GameSession<'_>, output: &mut W) -> Result<()> {
    match session.state() {
        GameState::Won => {
            let count = session.guess_count();
            writeln!(
                output,
                "\n{} Solved in {count} {}.",
                "You got it!".bright_green().bold(),
                guesses_word(count)
            )?;
        }
        GameState::Lost | GameState::InProgress => {
            writeln!(
                output,
                "\n{} The word was {}.",
                "Try again!".red().bold(),
                reveal(session)
            )?;
        }
    }
    for feedback in session.guesses() {
        writeln!(output, "  {}", feedback.to_emoji())?;
    }
    Ok(())
}

fn reveal(session: &GameSession<'_>) -> String {
    session.solution().text().to_uppercase()
}

/// Next trimmed line, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
