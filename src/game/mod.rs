//! Game state
//!
//! A [`Game`] owns the secret word and the guessed-word list for one round; a
//! [`Session`] chains rounds together and keeps score.

mod engine;
mod session;

pub use engine::{Game, GameError, GameStatus, GuessOutcome};
pub use session::{Session, SessionError, Statistics};
