//! A play session: consecutive rounds drawn from one word list

use super::engine::{Game, GameError, GuessOutcome};
use crate::core::Word;
use crate::wordlists::loader::random_secret;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("word list is empty, no secret word to pick")]
    NoWords,
}

/// Results across the rounds of a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub winning_guesses: usize,
}

impl Statistics {
    /// Average number of guesses over won rounds
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.rounds_won > 0).then(|| self.winning_guesses as f64 / self.rounds_won as f64)
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// Consecutive rounds with secrets drawn at random from `words`
#[derive(Debug, Clone)]
pub struct Session {
    words: Vec<Word>,
    game: Game,
    stats: Statistics,
}

impl Session {
    /// Start a session; the first round uses `first_secret` if given
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoWords`] if `words` is empty and no first
    /// secret was supplied.
    pub fn new(words: Vec<Word>, first_secret: Option<Word>) -> Result<Self, SessionError> {
        let secret = match first_secret {
            Some(secret) => secret,
            None => pick_secret(&words)?,
        };

        Ok(Self {
            words,
            game: Game::new(secret),
            stats: Statistics::default(),
        })
    }

    /// Submit a guess to the current round
    ///
    /// # Errors
    ///
    /// See [`Game::guess`].
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        let outcome = self.game.guess(input)?;
        if outcome.won {
            self.stats.rounds_played += 1;
            self.stats.rounds_won += 1;
            self.stats.winning_guesses += self.game.guess_count();
        }
        Ok(outcome)
    }

    /// Give up the current round and return its secret
    ///
    /// # Errors
    ///
    /// See [`Game::give_up`].
    pub fn give_up(&mut self) -> Result<Word, GameError> {
        let secret = self.game.give_up()?.clone();
        self.stats.rounds_played += 1;
        Ok(secret)
    }

    /// Replace the current round with a fresh one
    ///
    /// An unfinished round is dropped without counting towards the statistics.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoWords`] if the word list is empty.
    pub fn new_round(&mut self) -> Result<(), SessionError> {
        let secret = pick_secret(&self.words)?;
        self.game = Game::new(secret);
        info!(rounds_played = self.stats.rounds_played, "started next round");
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

fn pick_secret(words: &[Word]) -> Result<Word, SessionError> {
    random_secret(words, &mut rand::rng())
        .cloned()
        .ok_or(SessionError::NoWords)
}
