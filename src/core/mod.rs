//! Core domain types for Jotto
//!
//! Pure, side-effect-free types: validated words, the duplicate-safe letter
//! match counter, and the guessed-word list.

mod guess;
mod matching;
mod word;

pub use guess::{GuessedWord, GuessedWords};
pub use matching::{MatchError, Role, count_matches};
pub use word::{Word, WordError};
