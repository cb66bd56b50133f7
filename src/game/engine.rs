//! Round state: secret word, guesses so far, and whether the round is over

use crate::core::{GuessedWord, GuessedWords, Word, WordError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    GaveUp,
}

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),
    #[error("the round is already over")]
    RoundOver,
}

/// Result of a single accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub entry: GuessedWord,
    pub won: bool,
}

/// A single Jotto round
///
/// The game is the only producer of [`GuessedWord`] entries, so every stored
/// match count is computed against this round's secret.
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    guessed_words: GuessedWords,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        info!(letters = secret.len(), "new round");
        Self {
            secret,
            guessed_words: GuessedWords::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Score a guess and append it to the guessed-word list
    ///
    /// Input is normalized to lowercase. Guessing the secret itself ends the
    /// round as won; the winning guess is still recorded.
    ///
    /// # Errors
    /// - [`GameError::RoundOver`] if the round was already won or given up
    /// - [`GameError::InvalidWord`] if `input` is not a valid word
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        if self.is_over() {
            warn!(input, "guess after round ended");
            return Err(GameError::RoundOver);
        }

        let word = Word::new(input).inspect_err(|err| warn!(input, %err, "rejected guess"))?;
        let won = word == self.secret;
        let entry = GuessedWord::scored(word, &self.secret);

        debug!(
            guess = %entry.guessed_word(),
            letter_match_count = entry.letter_match_count(),
            "scored guess"
        );

        self.guessed_words.push(entry.clone());

        if won {
            self.status = GameStatus::Won;
            info!(guesses = self.guess_count(), "round won");
        }

        Ok(GuessOutcome { entry, won })
    }

    /// End the round without winning and reveal the secret
    ///
    /// # Errors
    /// Returns [`GameError::RoundOver`] if the round has already ended.
    pub fn give_up(&mut self) -> Result<&Word, GameError> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }

        self.status = GameStatus::GaveUp;
        info!(guesses = self.guess_count(), "round given up");
        Ok(&self.secret)
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn guessed_words(&self) -> &GuessedWords {
        &self.guessed_words
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guessed_words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}
