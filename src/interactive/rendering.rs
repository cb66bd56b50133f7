//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use super::guessed_words::GuessedWordsPanel;
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    f.render_widget(
        GuessedWordsPanel::new(app.session.game().guessed_words()),
        main_chunks[0],
    );
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("JOTTO")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    render_round(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_round(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();

    let (status, color) = match game.status() {
        GameStatus::InProgress => ("In progress".to_string(), Color::Yellow),
        GameStatus::Won => (
            format!("Solved: {}", game.secret().text().to_uppercase()),
            Color::Green,
        ),
        GameStatus::GaveUp => (
            format!("Revealed: {}", game.secret().text().to_uppercase()),
            Color::Red,
        ),
    };

    let content = vec![
        Line::from(format!("Secret word: {} letters", game.secret().len())),
        Line::from(format!("Guesses:     {}", game.guess_count())),
        Line::from(vec![
            Span::raw("Status:      "),
            Span::styled(
                status,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | n: New round  q: Quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess | Enter: Submit  Ctrl+R: Reveal  Ctrl+N: New round ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let average = stats
        .average_guesses()
        .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}"));

    let text = format!(
        "Rounds: {} | Won: {} ({:.0}%) | Avg guesses: {} | Esc: Quit",
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate(),
        average
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Session;
    use crate::output::formatters::{GUESSED_WORDS_TITLE, INSTRUCTIONS};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        let session = Session::new(Vec::new(), Some(Word::new("party").unwrap())).unwrap();
        App::new(session)
    }

    #[test]
    fn fresh_round_shows_instructions() {
        let screen = screen(&app());
        assert!(screen.contains(INSTRUCTIONS));
        assert!(!screen.contains(GUESSED_WORDS_TITLE));
        assert!(screen.contains("Secret word: 5 letters"));
    }

    #[test]
    fn guesses_replace_instructions() {
        let mut app = app();
        app.input_buffer = "bart".to_string();
        app.submit_guess();

        let screen = screen(&app);
        assert!(screen.contains(GUESSED_WORDS_TITLE));
        assert!(!screen.contains(INSTRUCTIONS));
        assert!(screen.contains("bart"));
    }

    #[test]
    fn revealed_secret_shown() {
        let mut app = app();
        app.reveal();

        let screen = screen(&app);
        assert!(screen.contains("Revealed: PARTY"));
        assert!(screen.contains("Round over"));
    }
}
