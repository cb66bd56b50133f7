//! Session setup from command-line options

use crate::core::Word;
use crate::game::Session;
use crate::wordlists::SECRET_WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use anyhow::{Context, Result};
use tracing::info;

/// Wordlist mode selecting the list compiled into the binary
pub const EMBEDDED_WORDLIST: &str = "embedded";

/// Load the secret word list for a `-w` value
///
/// `"embedded"` selects the built-in list; anything else is a file path.
///
/// # Errors
///
/// Returns an error if the word list file cannot be read.
pub fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        EMBEDDED_WORDLIST => Ok(words_from_slice(SECRET_WORDS)),
        path => {
            load_from_file(path).with_context(|| format!("failed to load word list {path}"))
        }
    }
}

/// Build a session from the wordlist mode and optional fixed first secret
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded, `secret` is not a
/// valid word, or there is no word to start the first round with.
pub fn build_session(wordlist_mode: &str, secret: Option<&str>) -> Result<Session> {
    let words = load_words(wordlist_mode)?;
    let first_secret = secret
        .map(Word::new)
        .transpose()
        .context("invalid --secret")?;

    info!(words = words.len(), "word list ready");
    Ok(Session::new(words, first_secret)?)
}
