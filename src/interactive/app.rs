//! TUI application state and logic

use crate::game::{GameError, Session};
use crate::output::formatters::congratulations;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use tracing::{debug, error};

/// Longest guess the input box accepts
pub const MAX_INPUT_LEN: usize = 15;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let letters = session.game().secret().len();

        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Find the secret word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!("The secret word has {letters} letters."),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Guessing,
            should_quit: false,
        }
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.guess(&input) {
            Ok(outcome) if outcome.won => {
                self.input_mode = InputMode::RoundOver;
                let text = congratulations(self.session.game().guess_count());
                self.add_message(&text, MessageStyle::Success);
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            Ok(outcome) => {
                let count = outcome.entry.letter_match_count();
                self.add_message(
                    &format!(
                        "{}: {count} matching letter{}",
                        outcome.entry.guessed_word().text().to_uppercase(),
                        if count == 1 { "" } else { "s" }
                    ),
                    MessageStyle::Info,
                );
            }
            Err(GameError::RoundOver) => {
                self.input_mode = InputMode::RoundOver;
                self.add_message("The round is over!", MessageStyle::Error);
            }
            Err(err) => {
                // Keep the text so the player can fix it
                self.input_buffer = input;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_round(&mut self) {
        match self.session.new_round() {
            Ok(()) => {
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                let letters = self.session.game().secret().len();
                self.add_message(
                    &format!("New round! The secret word has {letters} letters."),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                error!(%err, "could not start a new round");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn reveal(&mut self) {
        match self.session.give_up() {
            Ok(secret) => {
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("The secret word was {}.", secret.text().to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_round();
                }
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.reveal();
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < MAX_INPUT_LEN {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    if self.input_buffer.is_empty() {
                        self.add_message("Type a word first!", MessageStyle::Error);
                    } else {
                        self.submit_guess();
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);
    if let Err(err) = &res {
        error!(%err, "tui exited with error");
    }

    // Restore terminal before the error reaches the caller
    let restored = restore_terminal(&mut terminal);
    res?;
    restored
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<()>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event().context("failed to read terminal event")? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            debug!(code = ?key.code, "key press");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameStatus;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let words = words_from_slice(&["party", "train", "sunny"]);
        let session = Session::new(words, Some(Word::new("party").unwrap())).unwrap();
        App::new(session)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_input_lowercased() {
        let mut app = app();
        type_word(&mut app, "BaRt");
        assert_eq!(app.input_buffer, "bart");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "bar");
    }

    #[test]
    fn non_letters_ignored() {
        let mut app = app();
        type_word(&mut app, "b4 r!");
        assert_eq!(app.input_buffer, "br");
    }

    #[test]
    fn input_length_capped() {
        let mut app = app();
        type_word(&mut app, &"a".repeat(MAX_INPUT_LEN + 5));
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn enter_submits_guess() {
        let mut app = app();
        type_word(&mut app, "bart");
        press(&mut app, KeyCode::Enter);

        let guessed = app.session.game().guessed_words();
        assert_eq!(guessed.len(), 1);
        assert_eq!(guessed.last().unwrap().letter_match_count(), 3);
        assert!(app.input_buffer.is_empty());
        assert_eq!(
            app.messages.last().unwrap().text,
            "BART: 3 matching letters"
        );
    }

    #[test]
    fn enter_on_empty_input_does_not_guess() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        assert!(app.session.game().guessed_words().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_guess_ends_round() {
        let mut app = app();
        type_word(&mut app, "party");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.session.game().status(), GameStatus::Won);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success && m.text.contains("first try"))
        );

        // Letters no longer go to the input box
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn new_round_after_win() {
        let mut app = app();
        type_word(&mut app, "party");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.session.game().guessed_words().is_empty());
        assert_eq!(app.session.stats().rounds_won, 1);
    }

    #[test]
    fn ctrl_r_reveals_secret() {
        let mut app = app();
        ctrl(&mut app, 'r');

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.session.game().status(), GameStatus::GaveUp);
        assert!(app.messages.iter().any(|m| m.text.contains("PARTY")));
    }

    #[test]
    fn ctrl_n_starts_new_round_mid_game() {
        let mut app = app();
        type_word(&mut app, "bart");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'n');

        assert!(app.session.game().guessed_words().is_empty());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        // 'q' is a letter while guessing
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "q");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }

    fn scripted(events: Vec<Event>) -> impl FnMut() -> io::Result<Event> {
        let mut events = events.into_iter();
        move || {
            events
                .next()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn run_app_stops_on_quit_key() {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let events = vec![
            key(KeyCode::Char('b')),
            key(KeyCode::Char('a')),
            key(KeyCode::Enter),
            key(KeyCode::Esc),
        ];

        assert!(run_app(&mut terminal, app(), scripted(events)).is_ok());
    }

    #[test]
    fn run_app_returns_event_error() {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();

        let err = run_app(&mut terminal, app(), scripted(vec![key(KeyCode::Char('b'))]))
            .unwrap_err();
        assert!(err.to_string().contains("failed to read terminal event"));
        assert_eq!(
            err.downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::UnexpectedEof)
        );
    }

    #[test]
    fn run_app_ignores_key_release() {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        // A released Esc must not quit, so the script runs dry
        let res = run_app(&mut terminal, app(), scripted(vec![Event::Key(release)]));
        assert!(res.is_err());
    }
}
