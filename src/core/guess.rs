//! Guessed words and their match counts
//!
//! Entries are created once per guess and appended to an ordered list. Nothing
//! here computes a match count: the producer (the [`Game`](crate::game::Game))
//! supplies it, and display code only reads it back.

use super::Word;

/// One guess and the number of letters it shares with the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessedWord {
    guessed_word: Word,
    letter_match_count: usize,
}

impl GuessedWord {
    #[must_use]
    pub const fn new(guessed_word: Word, letter_match_count: usize) -> Self {
        Self {
            guessed_word,
            letter_match_count,
        }
    }

    /// Score `guess` against `secret` and record the result
    #[must_use]
    pub fn scored(guess: Word, secret: &Word) -> Self {
        let letter_match_count = guess.letter_match_count(secret);
        Self::new(guess, letter_match_count)
    }

    #[inline]
    #[must_use]
    pub const fn guessed_word(&self) -> &Word {
        &self.guessed_word
    }

    #[inline]
    #[must_use]
    pub const fn letter_match_count(&self) -> usize {
        self.letter_match_count
    }
}

/// Append-only list of guesses in the order they were made
///
/// The empty list is the normal "no guesses yet" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedWords {
    entries: Vec<GuessedWord>,
}

impl GuessedWords {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: GuessedWord) {
        self.entries.push(entry);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GuessedWord> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GuessedWord> {
        self.entries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[GuessedWord] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a GuessedWords {
    type Item = &'a GuessedWord;
    type IntoIter = std::slice::Iter<'a, GuessedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<GuessedWord> for GuessedWords {
    fn from_iter<I: IntoIterator<Item = GuessedWord>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
