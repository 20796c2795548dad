//! Wordle Assistant - CLI
//!
//! Play Wordle in the terminal, get help with a game played elsewhere, or
//! measure how well the frequency heuristics solve the reference list.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_assistant::{
    commands::{
        EvaluationConfig, PlayConfig, SolveConfig, Wordlists, build_report, evaluate,
        parse_feedback, run_assist, run_opener_study, run_play, save_records, solve_word, suggest,
        write_opener_csv,
    },
    output::{
        print_evaluation_statistics, print_opener_table, print_report, print_solve_result,
        print_suggestions,
    },
    scoring::{ScoringMethod, ScoringPolicy},
    wordlists::{DEFAULT_GUESSES_PATH, DEFAULT_SOLUTIONS_PATH, load_wordlist},
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Wordle game and rule-based solving assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Reference solution list, one word per line
    #[arg(long, global = true, env = "WORDLE_SOLUTIONS", default_value = DEFAULT_SOLUTIONS_PATH)]
    solutions: PathBuf,

    /// Additional accepted guesses, one word per line
    #[arg(long, global = true, env = "WORDLE_GUESSES", default_value = DEFAULT_GUESSES_PATH)]
    guesses: PathBuf,

    /// Scoring method: word (default) or position
    #[arg(short, long, global = true, default_value = "word")]
    method: ScoringMethod,

    /// More log output (repeat for more); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (default)
    Play {
        /// Play this solution word
        #[arg(long, conflicts_with = "index")]
        solution: Option<String>,

        /// Play the solution at this index of the solution list
        #[arg(long)]
        index: Option<usize>,

        /// Seed for random solutions
        #[arg(long)]
        seed: Option<u64>,

        /// Suggestions shown by the 'hint' command
        #[arg(long, default_value = "5")]
        hints: usize,
    },

    /// Get suggestions for a game played elsewhere
    Assist {
        /// Suggestions per scoring method
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,
    },

    /// Suggest next guesses from WORD:PATTERN feedback (e.g. later:-G-Y-)
    Suggest {
        /// Observed feedback, in the order it was played
        feedback: Vec<String>,

        /// Number of suggestions
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Auto-solve a specific solution word
    Solve {
        /// The solution word
        word: String,

        /// Fixed first guess
        #[arg(short = 'f', long)]
        opener: Option<String>,

        /// Show candidate counts for every step
        #[arg(short, long)]
        detail: bool,
    },

    /// Auto-solve every word of the solution list
    Evaluate {
        /// Fixed first guess
        #[arg(short = 'f', long)]
        opener: Option<String>,

        /// Only the first N solutions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write one JSON record per game to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Compare the first N solution words as fixed openers (CSV on stdout)
    Openers {
        /// Number of openers to try
        #[arg(short = 'n', long, default_value = "20")]
        candidates: usize,

        /// Print a table instead of CSV
        #[arg(long)]
        table: bool,
    },

    /// Letter frequencies and word difficulty for the loaded lists
    Stats,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// Load the solution list and the optional extra guesses
fn load_wordlists(cli: &Cli) -> Result<Wordlists> {
    let solutions = load_wordlist(&cli.solutions).context("cannot load the solution list")?;
    let guesses = load_wordlist(&cli.guesses).unwrap_or_else(|err| {
        log::warn!("{err}; only solution words will be accepted as guesses");
        Vec::new()
    });
    Ok(Wordlists::new(solutions, guesses))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let lists = load_wordlists(&cli)?;
    let method = cli.method;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        solution: None,
        index: None,
        seed: None,
        hints: 5,
    });

    match command {
        Commands::Play {
            solution,
            index,
            seed,
            hints,
        } => {
            let solution = solution
                .map(|text| lists.solution_word(&text))
                .transpose()?;
            let config = PlayConfig {
                solution,
                index,
                seed,
                hints,
            };
            run_play(&method, &lists, &config, io::stdin().lock(), io::stdout().lock())
        }
        Commands::Assist { top } => {
            run_assist(&lists, top, io::stdin().lock(), io::stdout().lock())
        }
        Commands::Suggest { feedback, top } => {
            let history = parse_feedback(&feedback)?;
            let result = suggest(&method, &lists, &history, top)?;
            print_suggestions(&result, method.name());
            Ok(())
        }
        Commands::Solve {
            word,
            opener,
            detail,
        } => {
            let config = SolveConfig {
                target: word,
                opener: lists.opener(opener.as_deref())?,
            };
            let result = solve_word(config, &method, &lists)?;
            print_solve_result(&result, detail);
            Ok(())
        }
        Commands::Evaluate {
            opener,
            limit,
            output,
            no_progress,
        } => run_evaluate_command(
            &method,
            &lists,
            EvaluationConfig {
                opener: lists.opener(opener.as_deref())?,
                limit,
                show_progress: !no_progress,
            },
            output,
        ),
        Commands::Openers { candidates, table } => {
            let study = run_opener_study(&method, &lists, candidates, true)?;
            if table {
                print_opener_table(&study);
            } else {
                write_opener_csv(io::stdout().lock(), &study)?;
            }
            Ok(())
        }
        Commands::Stats => {
            let report = build_report(&lists)?;
            print_report(&report);
            Ok(())
        }
    }
}

fn run_evaluate_command(
    method: &ScoringMethod,
    lists: &Wordlists,
    config: EvaluationConfig,
    output: Option<PathBuf>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Evaluating {} ", method.name());
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} solutions",
        config.limit.map_or(lists.solutions.len(), |limit| limit.min(lists.solutions.len()))
    );
    if let Some(opener) = &config.opener {
        println!("Opener: {opener}");
    }

    let (records, stats) = evaluate(method, lists, &config)?;
    print_evaluation_statistics(&stats);

    if let Some(path) = output {
        save_records(&path, &records)?;
    }
    Ok(())
}
