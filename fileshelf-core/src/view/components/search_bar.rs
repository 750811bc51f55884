//! src/view/components/search_bar.rs
use crate::view::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub struct SearchBar;

impl SearchBar {
    pub fn render(frame: &mut Frame<'_>, query: &str, area: Rect) {
        let line = if query.is_empty() {
            Line::from(vec![
                Span::styled("│", Style::default().fg(theme::CYAN)),
                Span::styled("Search files...", theme::empty_state_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled(query, Style::default().fg(theme::FOREGROUND)),
                Span::styled("│", Style::default().fg(theme::CYAN)),
            ])
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(theme::CYAN))
            .style(Style::default().bg(theme::BACKGROUND));

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
