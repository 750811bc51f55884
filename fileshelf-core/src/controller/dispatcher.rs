//! src/controller/dispatcher.rs
//! ============================================================================
//! # ActionDispatcher
//!
//! Applies [`Action`]s to [`AppState`]. Query edits go straight through the
//! pure renderer; copy is synchronous; downloads are spawned and report back
//! on the task channel as [`Action::DownloadFinished`].

use std::{sync::Arc, time::Instant};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    controller::actions::Action,
    error::ActionError,
    model::app_state::{AppState, NotificationLevel},
    operators::{clipboard::ClipboardSink, download::Downloader},
};

pub const COPY_OK_MESSAGE: &str = "URL copied!";
pub const COPY_FAILED_MESSAGE: &str = "Copy failed";

/// What the loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// State changed, repaint.
    Redraw,
    /// Nothing visible changed.
    Idle,
    Quit,
}

pub struct ActionDispatcher<C: ClipboardSink> {
    clipboard: C,
    downloader: Arc<dyn Downloader>,
    task_tx: mpsc::UnboundedSender<Action>,
}

impl<C: ClipboardSink> ActionDispatcher<C> {
    pub fn new(
        clipboard: C,
        downloader: Arc<dyn Downloader>,
        task_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            clipboard,
            downloader,
            task_tx,
        }
    }

    pub fn handle(&mut self, state: &mut AppState, action: Action) -> Flow {
        debug!(marker = "ACTION_DISPATCH", action = ?action, "Dispatching action");

        match action {
            Action::Quit => return Flow::Quit,

            Action::InsertChar(c) => state.push_char(c),
            Action::DeleteChar => state.pop_char(),
            Action::ClearQuery => state.clear_query(),

            Action::MoveSelection(delta) => state.move_selection(delta),
            Action::SelectFirst => state.select_first(),
            Action::SelectLast => state.select_last(),

            Action::CopyUrl => self.copy_selected(state),
            Action::Download => self.download_selected(state),

            Action::ManifestLoaded(manifest) => state.set_manifest(manifest),
            Action::ManifestFailed(reason) => state.set_load_failed(reason),

            Action::DownloadFinished { path, result } => match result {
                Ok(written) => {
                    info!(marker = "DOWNLOAD_OK", path = %path, written = %written.display(), "Download saved");
                    state.notify(
                        format!("Saved {}", written.display()),
                        NotificationLevel::Success,
                    );
                }
                Err(reason) => {
                    warn!(marker = "DOWNLOAD_FAILED", path = %path, reason = %reason, "Download failed");
                    state.notify("Download failed", NotificationLevel::Error);
                }
            },

            Action::Tick => {
                if !state.expire_notification(Instant::now()) {
                    return Flow::Idle;
                }
            }

            Action::Resize(..) => {}
        }

        Flow::Redraw
    }

    fn copy_selected(&mut self, state: &mut AppState) {
        let result = state
            .selected_file()
            .map(|(_, file)| state.links.resource_url(&file.path))
            .ok_or(ActionError::NothingSelected)
            .and_then(|url| self.clipboard.write_text(&url).map(|()| url));

        match result {
            Ok(url) => {
                info!(marker = "COPY_URL", url = %url, "Copied resource URL");
                state.notify(COPY_OK_MESSAGE, NotificationLevel::Success);
            }
            Err(ActionError::NothingSelected) => {}
            Err(e) => {
                warn!(marker = "COPY_URL_FAILED", error = %e, "Clipboard write failed");
                state.notify(COPY_FAILED_MESSAGE, NotificationLevel::Error);
            }
        }
    }

    fn download_selected(&self, state: &mut AppState) {
        let Some((_, file)) = state.selected_file() else {
            return;
        };

        let path = file.path.clone();
        let file_name = file.name.to_string();
        let downloader = Arc::clone(&self.downloader);
        let tx = self.task_tx.clone();

        info!(marker = "DOWNLOAD_START", path = %path, "Starting download");
        state.notify(format!("Downloading {file_name}..."), NotificationLevel::Info);

        tokio::spawn(async move {
            let result = downloader
                .download(&path, &file_name)
                .await
                .map_err(|e| e.to_string());

            if tx.send(Action::DownloadFinished { path, result }).is_err() {
                debug!("Download finished after shutdown");
            }
        });
    }
}
