//! Formatting utilities for terminal output

use crate::core::GuessedWords;

/// Guidance shown while no guesses have been made
pub const INSTRUCTIONS: &str = "Try to guess the secret word!";

/// Heading of the guessed-words section
pub const GUESSED_WORDS_TITLE: &str = "Guessed Words";

/// Column headings of the guessed-words section
pub const GUESS_HEADING: &str = "Guess";
pub const MATCH_HEADING: &str = "Matching Letters";

/// Plain-text projection of the guessed-word list
///
/// An empty list yields only the instructions line. Otherwise the first line is
/// the section title, the second the column headings, followed by exactly one
/// line per guess in guess order.
#[must_use]
pub fn guessed_words_lines(guessed_words: &GuessedWords) -> Vec<String> {
    if guessed_words.is_empty() {
        return vec![INSTRUCTIONS.to_string()];
    }

    let width = guess_column_width(guessed_words);
    let mut lines = Vec::with_capacity(guessed_words.len() + 2);
    lines.push(GUESSED_WORDS_TITLE.to_string());
    lines.push(format!("{GUESS_HEADING:<width$}  {MATCH_HEADING}"));

    for entry in guessed_words {
        lines.push(format!(
            "{:<width$}  {}",
            entry.guessed_word().text(),
            entry.letter_match_count()
        ));
    }

    lines
}

/// Width of the guess column: the longest guess or the heading
#[must_use]
pub fn guess_column_width(guessed_words: &GuessedWords) -> usize {
    guessed_words
        .iter()
        .map(|entry| entry.guessed_word().len())
        .max()
        .unwrap_or(0)
        .max(GUESS_HEADING.len())
}

/// Message shown when the secret word is found
#[must_use]
pub fn congratulations(guess_count: usize) -> String {
    match guess_count {
        1 => "Congratulations! You guessed the word on the first try!".to_string(),
        n => format!("Congratulations! You guessed the word in {n} guesses!"),
    }
}
