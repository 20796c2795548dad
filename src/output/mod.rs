//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_evaluation_statistics, print_opener_table, print_report, print_solve_result,
    print_suggestions,
};
pub use formatters::{colored_feedback, feedback_line};
