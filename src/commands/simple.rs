//! Simple interactive CLI mode
//!
//! Line-based Jotto without the TUI.

use crate::game::{GameError, Session};
use crate::output::{print_congratulations, print_guessed_words, print_reveal};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use tracing::{info, warn};

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand<'a> {
    Guess(&'a str),
    NewRound,
    Reveal,
    Quit,
    Empty,
}

impl<'a> SimpleCommand<'a> {
    /// Commands start with `:`; anything else is a guess
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Self::Empty,
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":new" | ":n" => Self::NewRound,
            ":reveal" | ":give-up" | ":r" => Self::Reveal,
            guess => Self::Guess(guess),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut session: Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Jotto - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word. After each guess you'll see how many");
    println!("letters it shares with the secret (each secret letter counts once).\n");
    println!("Commands: ':new' for a new round, ':reveal' to give up, ':quit' to exit\n");

    print_round_start(&session);

    loop {
        let Some(line) = get_user_input("Guess")? else {
            // EOF
            break;
        };

        if handle_command(&mut session, SimpleCommand::parse(&line)) == Flow::Quit {
            break;
        }
    }

    let stats = session.stats();
    info!(
        rounds_played = stats.rounds_played,
        rounds_won = stats.rounds_won,
        "simple session finished"
    );
    println!(
        "\nRounds played: {} | Won: {}\nThanks for playing!\n",
        stats.rounds_played, stats.rounds_won
    );

    Ok(())
}

/// Whether the input loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command to the session, printing the result
///
/// Errors are printed and play continues; only `:quit` ends the loop.
pub fn handle_command(session: &mut Session, command: SimpleCommand<'_>) -> Flow {
    match command {
        SimpleCommand::Empty => {}
        SimpleCommand::Quit => return Flow::Quit,
        SimpleCommand::NewRound => match session.new_round() {
            Ok(()) => print_round_start(session),
            Err(err) => {
                warn!(%err, "could not start a new round");
                println!("{}\n", err.to_string().red());
            }
        },
        SimpleCommand::Reveal => match session.give_up() {
            Ok(secret) => {
                print_reveal(&secret);
                println!("Type ':new' to play again or ':quit' to exit.\n");
            }
            Err(err) => println!("{}\n", err.to_string().red()),
        },
        SimpleCommand::Guess(guess) => match session.guess(guess) {
            Ok(outcome) => {
                print_guessed_words(session.game().guessed_words());
                if outcome.won {
                    print_congratulations(session.game().guess_count());
                    println!("Type ':new' to play again or ':quit' to exit.\n");
                }
            }
            Err(GameError::RoundOver) => {
                println!("{}\n", "The round is over. Type ':new' to play again.".red());
            }
            Err(err) => println!("{}\n", err.to_string().red()),
        },
    }

    Flow::Continue
}

fn print_round_start(session: &Session) {
    println!(
        "{}",
        format!(
            "New round! The secret word has {} letters.",
            session.game().secret().len()
        )
        .bright_cyan()
    );
    print_guessed_words(session.game().guessed_words());
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameStatus;

    fn party_session(words: &[&str]) -> Session {
        let words = crate::wordlists::loader::words_from_slice(words);
        Session::new(words, Some(Word::new("party").unwrap())).unwrap()
    }

    #[test]
    fn new_round_without_words_keeps_playing() {
        let mut session = party_session(&[]);

        assert_eq!(
            handle_command(&mut session, SimpleCommand::NewRound),
            Flow::Continue
        );
        assert_eq!(session.game().secret().text(), "party");

        // The running round is still playable
        assert_eq!(
            handle_command(&mut session, SimpleCommand::Guess("party")),
            Flow::Continue
        );
        assert_eq!(session.game().status(), GameStatus::Won);
    }

    #[test]
    fn errors_do_not_end_session() {
        let mut session = party_session(&["train"]);

        assert_eq!(
            handle_command(&mut session, SimpleCommand::Guess("b4rt")),
            Flow::Continue
        );
        assert!(session.game().guessed_words().is_empty());

        handle_command(&mut session, SimpleCommand::Reveal);
        assert_eq!(
            handle_command(&mut session, SimpleCommand::Reveal),
            Flow::Continue
        );
        assert_eq!(
            handle_command(&mut session, SimpleCommand::Guess("party")),
            Flow::Continue
        );
        assert_eq!(session.game().status(), GameStatus::GaveUp);
    }

    #[test]
    fn new_round_replaces_finished_round() {
        let mut session = party_session(&["train"]);
        handle_command(&mut session, SimpleCommand::Guess("party"));
        handle_command(&mut session, SimpleCommand::NewRound);

        assert_eq!(session.game().secret().text(), "train");
        assert!(!session.game().is_over());
    }

    #[test]
    fn quit_ends_loop() {
        let mut session = party_session(&[]);
        assert_eq!(handle_command(&mut session, SimpleCommand::Quit), Flow::Quit);
        assert_eq!(handle_command(&mut session, SimpleCommand::Empty), Flow::Continue);
    }

    #[test]
    fn parse_guess() {
        assert_eq!(SimpleCommand::parse("party"), SimpleCommand::Guess("party"));
        assert_eq!(
            SimpleCommand::parse("  Train \n"),
            SimpleCommand::Guess("Train")
        );
    }

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleCommand::parse(":quit"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(":q"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(":new"), SimpleCommand::NewRound);
        assert_eq!(SimpleCommand::parse(":reveal"), SimpleCommand::Reveal);
        assert_eq!(SimpleCommand::parse(":give-up"), SimpleCommand::Reveal);
    }

    #[test]
    fn parse_empty() {
        assert_eq!(SimpleCommand::parse(""), SimpleCommand::Empty);
        assert_eq!(SimpleCommand::parse("   "), SimpleCommand::Empty);
    }

    #[test]
    fn words_named_like_commands_are_guesses() {
        assert_eq!(SimpleCommand::parse("quit"), SimpleCommand::Guess("quit"));
        assert_eq!(SimpleCommand::parse("new"), SimpleCommand::Guess("new"));
    }

    #[test]
    fn unknown_colon_input_is_a_guess() {
        // Rejected later by word validation
        assert_eq!(SimpleCommand::parse(":foo"), SimpleCommand::Guess(":foo"));
    }
}
