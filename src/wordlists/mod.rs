//! Word lists for Jotto
//!
//! Provides the embedded secret word list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{SECRET_WORDS, SECRET_WORDS_COUNT};
