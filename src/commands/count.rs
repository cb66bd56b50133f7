//! Letter match counting from the command line

use crate::core::{MatchError, count_matches};
use tracing::debug;

/// Result of counting the letters a guess shares with a secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountResult {
    pub guess: String,
    pub secret: String,
    pub letter_match_count: usize,
}

/// Count matching letters between `guess` and `secret`
///
/// Input is passed through unchanged, so uppercase or non-letter input is
/// reported as an error instead of being scored.
///
/// # Errors
///
/// Returns [`MatchError`] if either word contains anything other than
/// lowercase ASCII letters.
pub fn count_letters(guess: &str, secret: &str) -> Result<CountResult, MatchError> {
    let letter_match_count = count_matches(guess, secret)?;
    debug!(guess, secret, letter_match_count, "counted matching letters");

    Ok(CountResult {
        guess: guess.to_string(),
        secret: secret.to_string(),
        letter_match_count,
    })
}
