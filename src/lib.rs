//! Jotto
//!
//! A word-guessing game. After every guess the player learns how many letters
//! the guess shares with the secret word, counting each secret letter at most
//! once.
//!
//! # Quick Start
//!
//! ```rust
//! use jotto::core::count_matches;
//! use jotto::game::Game;
//! use jotto::core::Word;
//!
//! assert_eq!(count_matches("algebra", "party").unwrap(), 2);
//!
//! let mut game = Game::new(Word::new("party").unwrap());
//! let outcome = game.guess("bart").unwrap();
//! assert_eq!(outcome.entry.letter_match_count(), 3);
//! assert!(!outcome.won);
//! ```

// Core domain types
pub mod core;

// Round and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
