//! Word lists for Wordle
//!
//! Loading of solution/guess lists and the accepted-guess dictionary.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
pub use loader::{load_wordlist, parse_wordlist, words_from_slice};

/// Default path of the solution list
pub const DEFAULT_SOLUTIONS_PATH: &str = "wordlist_solutions.txt";

/// Default path of the accepted-guess list
pub const DEFAULT_GUESSES_PATH: &str = "wordlist_guesses.txt";
