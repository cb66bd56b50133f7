//! Jotto - CLI
//!
//! Word-guessing game with TUI and CLI modes. Each guess is scored by how many
//! letters it shares with the secret word.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jotto::{
    commands::{EMBEDDED_WORDLIST, build_session, count_letters, run_simple},
    game::Session,
    logging::{DEFAULT_FILTER, init_tracing},
    output::print_count_result,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jotto",
    about = "Guess the secret word; each guess tells you how many letters match",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "JOTTO_WORDLIST",
        default_value = EMBEDDED_WORDLIST
    )]
    wordlist: String,

    /// Use this secret word for the first round instead of a random one
    #[arg(long, global = true, env = "JOTTO_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Log filter, e.g. 'warn' or 'jotto=debug'
    #[arg(long, global = true, env = "JOTTO_LOG", default_value = DEFAULT_FILTER)]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Count the letters a guess shares with a secret word
    Count {
        /// The guessed word (lowercase letters)
        guess: String,

        /// The secret word (lowercase letters)
        secret: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let session = || build_session(&cli.wordlist, cli.secret.as_deref());

    match &cli.command {
        Some(Commands::Count { guess, secret }) => {
            let result = count_letters(guess, secret)?;
            print_count_result(&result);
            Ok(())
        }
        Some(Commands::Simple) => run_simple(session()?),
        // Default to Play mode if no command given
        Some(Commands::Play) | None => run_play_command(session()?),
    }
}

fn run_play_command(session: Session) -> Result<()> {
    use jotto::interactive::{App, run_tui};

    run_tui(App::new(session))
}
