//! Display functions for command results

use super::formatters::{congratulations, guessed_words_lines};
use crate::commands::CountResult;
use crate::core::{GuessedWords, Word};
use colored::Colorize;

/// Print the guessed-word list, or the instructions if it is empty
pub fn print_guessed_words(guessed_words: &GuessedWords) {
    let lines = guessed_words_lines(guessed_words);

    println!("{}", "─".repeat(40).cyan());
    if guessed_words.is_empty() {
        for line in &lines {
            println!("{}", line.bright_white());
        }
    } else {
        let mut lines = lines.iter();
        if let Some(title) = lines.next() {
            println!("{}", title.bright_cyan().bold());
        }
        if let Some(header) = lines.next() {
            println!("{}", header.bright_black());
        }
        for line in lines {
            println!("{line}");
        }
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print the result of the `count` command
pub fn print_count_result(result: &CountResult) {
    println!(
        "{} vs {}: {} matching {}",
        result.guess.as_str().bright_yellow().bold(),
        result.secret.as_str().bright_yellow().bold(),
        result.letter_match_count.to_string().green().bold(),
        if result.letter_match_count == 1 {
            "letter"
        } else {
            "letters"
        }
    );
}

/// Print the win banner
pub fn print_congratulations(guess_count: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("  {}", congratulations(guess_count).bright_green().bold());
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print the secret after the player gives up
pub fn print_reveal(secret: &Word) {
    println!(
        "\nThe secret word was {}.\n",
        secret.text().to_uppercase().bright_yellow().bold()
    );
}
