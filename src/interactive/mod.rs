//! Interactive TUI interface

mod app;
mod guessed_words;
mod rendering;

pub use app::{App, InputMode, MAX_INPUT_LEN, Message, MessageStyle, run_tui};
pub use guessed_words::GuessedWordsPanel;
pub use rendering::ui;
