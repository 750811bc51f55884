//! src/view/components/status_bar.rs
//!
//! One-line footer: load status, match counts, the selected file's URL and
//! the key hints.

use crate::{
    model::app_state::{AppState, LoadStatus},
    view::{presenters::strip_control, theme},
};
use ratatui::{prelude::*, widgets::Paragraph};

const KEY_HINTS: &str = "Enter copy URL | ^D download | Esc clear | ^C quit";

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let left = match &state.status {
            LoadStatus::Loading => "Loading...".to_string(),
            LoadStatus::Failed(_) => "Load failed".to_string(),
            LoadStatus::Ready { loaded_at } => {
                let total = state.manifest().map_or(0, |m| m.file_count());
                let shown = state.rendered().file_count();
                let selected = state
                    .selected_file()
                    .map(|(_, file)| strip_control(&state.links.resource_url(&file.path)).into_owned())
                    .unwrap_or_default();

                format!(
                    "{shown}/{total} files | loaded {} | {selected}",
                    loaded_at.format("%H:%M:%S")
                )
            }
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(KEY_HINTS.len() as u16 + 1)])
            .split(area);

        frame.render_widget(
            Paragraph::new(left).style(Style::default().fg(theme::FOREGROUND).bg(theme::CURRENT_LINE)),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(KEY_HINTS)
                .alignment(Alignment::Right)
                .style(Style::default().fg(theme::COMMENT).bg(theme::CURRENT_LINE)),
            chunks[1],
        );
    }
}
