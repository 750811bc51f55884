//! src/view/ui.rs
//! ============================================================
//! Frame renderer that draws the whole TUI from `AppState`.
//! The state is only read here; all mutation goes through the
//! dispatcher.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use tracing::warn;

use crate::{
    model::app_state::AppState,
    view::components::{
        file_list::FileList, notification_overlay::NotificationOverlay, search_bar::SearchBar,
        status_bar::StatusBar,
    },
};

const SLOW_FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Default)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
}

#[derive(Debug, Default)]
pub struct UIRenderer {
    stats: RenderStats,
}

impl UIRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, state: &AppState) {
        let start = Instant::now();
        let screen = frame.area();

        let [search, list, status] = layout(screen);

        SearchBar::render(frame, state.query(), search);
        FileList::render(frame, state, list);
        StatusBar::render(frame, state, status);

        if let Some(notification) = &state.notification {
            NotificationOverlay::render(frame, notification, screen);
        }

        let elapsed = start.elapsed();
        self.stats.frames += 1;
        if elapsed > SLOW_FRAME {
            self.stats.slow += 1;
            warn!(
                marker = "UI_RENDER_SLOW",
                render_time_us = elapsed.as_micros() as u64,
                "Slow frame"
            );
        }
    }
}

/// Search box, list, one-line status bar.
fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        app_state::NotificationLevel,
        manifest::{FileEntry, Folder, Manifest},
        resource::ResourceLinks,
    };
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn layout_splits_screen() {
        let [search, list, status] = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(search.height, 3);
        assert_eq!(status.height, 1);
        assert_eq!(list.height, 20);
    }

    #[test]
    fn draws_query_list_and_toast() {
        let mut state = AppState::new(
            ResourceLinks::new("https://files.aspenini.com/"),
            Duration::from_secs(2),
        );
        state.set_manifest(Arc::new(Manifest {
            folders: vec![Folder::new("Docs", vec![FileEntry::new("a.pdf")])],
        }));
        state.set_query("pdf");
        state.notify("URL copied!", NotificationLevel::Success);

        let mut renderer = UIRenderer::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, &state))
            .unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("pdf│"));
        assert!(screen.contains("Docs/"));
        assert!(screen.contains("URL copied!"));
        assert!(screen.contains("1/1 files"));
        assert_eq!(renderer.stats().frames, 1);
    }
}
