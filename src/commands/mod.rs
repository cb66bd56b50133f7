//! Command implementations

pub mod count;
pub mod setup;
pub mod simple;

pub use count::{CountResult, count_letters};
pub use setup::{EMBEDDED_WORDLIST, build_session, load_words};
pub use simple::{Flow, SimpleCommand, handle_command, run_simple};
