//! Guessed-words panel
//!
//! Renders the instructions while the list is empty, and the guessed-words
//! table otherwise. Match counts are shown as stored, never recomputed.

use crate::core::GuessedWords;
use crate::output::formatters::{
    GUESS_HEADING, GUESSED_WORDS_TITLE, INSTRUCTIONS, MATCH_HEADING, guess_column_width,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Widget, Wrap},
};

const PANEL_TITLE: &str = " Guesses ";

/// Widget for the list of previous guesses
#[derive(Debug, Clone, Copy)]
pub struct GuessedWordsPanel<'a> {
    guessed_words: &'a GuessedWords,
}

impl<'a> GuessedWordsPanel<'a> {
    #[must_use]
    pub const fn new(guessed_words: &'a GuessedWords) -> Self {
        Self { guessed_words }
    }
}

impl Widget for GuessedWordsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(PANEL_TITLE)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.guessed_words.is_empty() {
            Paragraph::new(INSTRUCTIONS)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let header = Row::new([GUESS_HEADING, MATCH_HEADING]).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let table_block = Block::default()
            .title(format!(" {GUESSED_WORDS_TITLE} "))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan));

        // Newest guesses stay on screen once the list outgrows the panel
        let visible = usize::from(table_block.inner(inner).height.saturating_sub(1));
        let hidden = self.guessed_words.len().saturating_sub(visible);

        let rows = self.guessed_words.iter().skip(hidden).map(|entry| {
            Row::new([
                entry.guessed_word().text().to_string(),
                entry.letter_match_count().to_string(),
            ])
        });

        let widths = [
            Constraint::Length(guess_column_width(self.guessed_words) as u16),
            Constraint::Min(MATCH_HEADING.len() as u16),
        ];

        Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(table_block)
            .render(inner, buf);
    }
}
