//! Game play
//!
//! The session state machine, the automatic solver and result records.

pub mod record;
mod session;
pub mod solver;

pub use record::{GameRecord, write_json_lines};
pub use session::{GameSession, GameState, MAX_GUESSES};
pub use solver::{AutoSolver, SolveOutcome, solve};
