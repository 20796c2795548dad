//! Guess scoring
//!
//! Letter-frequency statistics and the two heuristic policies built on them.

pub mod frequency;
pub mod policy;

pub use frequency::{LetterScores, PositionalLetterScores};
pub use policy::{PositionLevelScore, ScoredWord, ScoringMethod, ScoringPolicy, WordLevelScore};
