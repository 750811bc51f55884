//! src/view/components/file_list.rs
//! ============================================================================
//! # File list
//!
//! Draws the render records as folder headers followed by their files, or one
//! of the three non-list states: loading, load failure, nothing found. The
//! load failure and the empty result use different messages and styles.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    model::{
        app_state::{AppState, LoadStatus},
        render::{RenderedFile, RenderedFolder, RenderedList},
    },
    view::{icons::FOLDER_ICON, presenters::strip_control, theme},
};

pub const LOADING_MESSAGE: &str = "Loading files...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load files";
pub const EMPTY_MESSAGE: &str = "No files found";

pub struct FileList;

impl FileList {
    pub fn render(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Files ({}) ", state.rendered().file_count()))
            .border_style(Style::default().fg(theme::PURPLE))
            .style(Style::default().bg(theme::BACKGROUND));

        match &state.status {
            LoadStatus::Loading => {
                Self::render_message(frame, block, area, LOADING_MESSAGE, theme::empty_state_style());
            }
            LoadStatus::Failed(reason) => {
                let lines = vec![
                    Line::styled(LOAD_FAILED_MESSAGE, theme::error_state_style()),
                    Line::styled(strip_control(reason).into_owned(), theme::empty_state_style()),
                ];
                let paragraph = Paragraph::new(lines)
                    .block(block)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                frame.render_widget(paragraph, area);
            }
            LoadStatus::Ready { .. } if state.rendered().is_empty() => {
                Self::render_message(frame, block, area, EMPTY_MESSAGE, theme::empty_state_style());
            }
            LoadStatus::Ready { .. } => {
                let items = list_items(state.rendered());
                let list = List::new(items)
                    .block(block)
                    .highlight_style(theme::selection_style())
                    .highlight_symbol("▶ ");

                let mut list_state = ListState::default()
                    .with_selected(selected_row(state.rendered(), state.selected_index()));
                frame.render_stateful_widget(list, area, &mut list_state);
            }
        }
    }

    fn render_message(frame: &mut Frame<'_>, block: Block<'_>, area: Rect, text: &str, style: Style) {
        let paragraph = Paragraph::new(Line::styled(text, style))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

fn list_items(list: &RenderedList) -> Vec<ListItem<'static>> {
    let mut items = Vec::with_capacity(list.folders().len() + list.file_count());

    for folder in list.folders() {
        items.push(folder_item(folder));
        items.extend(folder.files.iter().map(file_item));
    }

    items
}

fn folder_item(folder: &RenderedFolder) -> ListItem<'static> {
    ListItem::new(Line::styled(
        format!("{FOLDER_ICON} {}/", strip_control(&folder.name)),
        theme::folder_header_style(),
    ))
}

fn file_item(file: &RenderedFile) -> ListItem<'static> {
    let mut spans = vec![
        Span::raw(format!("  {} ", file.icon)),
        Span::styled(strip_control(&file.base_name).into_owned(), theme::file_name_style()),
    ];

    // Names without a dot render as-is.
    if file.name.len() > file.base_name.len() {
        spans.push(Span::styled(
            format!(".{}", strip_control(&file.extension)),
            theme::file_extension_style(),
        ));
    }

    ListItem::new(Line::from(spans))
}

/// List row of the `selected`-th file, counting folder header rows.
#[must_use]
pub fn selected_row(list: &RenderedList, selected: usize) -> Option<usize> {
    let mut row = 0;
    let mut remaining = selected;

    for folder in list.folders() {
        row += 1;
        if remaining < folder.files.len() {
            return Some(row + remaining);
        }
        remaining -= folder.files.len();
        row += folder.files.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        manifest::{FileEntry, Folder, Manifest},
        render::render,
        resource::ResourceLinks,
    };
    use ratatui::{Terminal, backend::TestBackend};
    use std::{sync::Arc, time::Duration};

    fn sample() -> Manifest {
        Manifest {
            folders: vec![
                Folder::new("Docs", vec![FileEntry::new("a.pdf"), FileEntry::new("b.txt")]),
                Folder::new("Music", vec![FileEntry::new("track.mp3")]),
            ],
        }
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                FileList::render(frame, state, area);
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state() -> AppState {
        AppState::new(ResourceLinks::new("https://x/"), Duration::from_secs(2))
    }

    #[test]
    fn selected_row_skips_folder_headers() {
        let list = render(&sample(), "");
        assert_eq!(selected_row(&list, 0), Some(1));
        assert_eq!(selected_row(&list, 1), Some(2));
        assert_eq!(selected_row(&list, 2), Some(4));
        assert_eq!(selected_row(&list, 3), None);
        assert_eq!(selected_row(&RenderedList::Empty, 0), None);
    }

    #[test]
    fn folder_header_without_files_takes_one_row() {
        let manifest = Manifest {
            folders: vec![
                Folder::new("Empty", Vec::new()),
                Folder::new("Music", vec![FileEntry::new("track.mp3")]),
            ],
        };
        let list = render(&manifest, "");
        assert_eq!(selected_row(&list, 0), Some(2));
        assert_eq!(list_items(&list).len(), 3);

        let mut state = state();
        state.set_manifest(Arc::new(Manifest {
            folders: vec![Folder::new("Empty", Vec::new())],
        }));
        let screen = draw(&state);
        assert!(screen.contains("Empty/"));
        assert!(!screen.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn draws_folders_and_files() {
        let mut state = state();
        state.set_manifest(Arc::new(sample()));

        let screen = draw(&state);
        assert!(screen.contains("Docs/"));
        assert!(screen.contains("Music/"));
        assert!(screen.contains("track"));
        assert!(screen.contains(".mp3"));
        assert!(!screen.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn empty_result_and_load_failure_are_distinct() {
        let mut state = state();
        state.set_manifest(Arc::new(sample()));
        state.set_query("nothing-matches");
        let empty = draw(&state);
        assert!(empty.contains(EMPTY_MESSAGE));
        assert!(!empty.contains(LOAD_FAILED_MESSAGE));

        let mut failed = self::state();
        failed.set_load_failed("HTTP 404");
        let screen = draw(&failed);
        assert!(screen.contains(LOAD_FAILED_MESSAGE));
        assert!(!screen.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn loading_state_has_its_own_message() {
        assert!(draw(&state()).contains(LOADING_MESSAGE));
    }
}
