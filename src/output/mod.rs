//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_congratulations, print_count_result, print_guessed_words, print_reveal};
