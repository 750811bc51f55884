//! src/model/app_state.rs
//! ============================================================================
//! # AppState: what the terminal shell shows
//!
//! Holds the loaded snapshot, the search query, the current render output,
//! the file selection and the active toast. The render output is always
//! recomputed from the snapshot; it is never edited in place.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::{DateTime, Local};
use compact_str::CompactString;

use crate::model::{
    manifest::Manifest,
    render::{RenderedFile, RenderedFolder, RenderedList, render},
    resource::ResourceLinks,
};

/// Lifecycle of the single manifest fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready { loaded_at: DateTime<Local> },
    Failed(String),
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotificationLevel {
    Info = 0,
    Success = 1,
    Error = 2,
}

/// Transient toast; replaced by the next one, dropped once expired.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: CompactString,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub ttl: Duration,
}

impl Notification {
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.timestamp) >= self.ttl
    }
}

#[derive(Debug)]
pub struct AppState {
    manifest: Option<Arc<Manifest>>,
    pub status: LoadStatus,
    query: String,
    rendered: RenderedList,
    selected: usize,
    pub notification: Option<Notification>,
    pub links: ResourceLinks,
    toast_duration: Duration,
}

impl AppState {
    #[must_use]
    pub const fn new(links: ResourceLinks, toast_duration: Duration) -> Self {
        Self {
            manifest: None,
            status: LoadStatus::Loading,
            query: String::new(),
            rendered: RenderedList::Empty,
            selected: 0,
            notification: None,
            links,
            toast_duration,
        }
    }

    pub fn set_manifest(&mut self, manifest: Arc<Manifest>) {
        self.manifest = Some(manifest);
        self.status = LoadStatus::Ready {
            loaded_at: Local::now(),
        };
        self.refresh();
    }

    pub fn set_load_failed<S: Into<String>>(&mut self, reason: S) {
        self.manifest = None;
        self.rendered = RenderedList::Empty;
        self.status = LoadStatus::Failed(reason.into());
    }

    #[must_use]
    pub fn manifest(&self) -> Option<&Arc<Manifest>> {
        self.manifest.as_ref()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn rendered(&self) -> &RenderedList {
        &self.rendered
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn set_query<S: Into<String>>(&mut self, query: S) {
        self.query = query.into();
        self.refresh();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refresh();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refresh();
        }
    }

    /// Re-run the renderer against the snapshot and reset the selection.
    /// Filtering needs a loaded manifest; before that this is a no-op.
    fn refresh(&mut self) {
        if let Some(manifest) = &self.manifest {
            self.rendered = render(manifest, &self.query);
            self.selected = 0;
        }
    }

    /// Move the selection, clamped to the visible files.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.rendered.file_count();
        if count == 0 {
            self.selected = 0;
            return;
        }

        let last = count - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rendered.file_count().saturating_sub(1);
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<(&RenderedFolder, &RenderedFile)> {
        self.rendered.file_at(self.selected)
    }

    pub fn notify<S: Into<CompactString>>(&mut self, message: S, level: NotificationLevel) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            timestamp: Instant::now(),
            ttl: self.toast_duration,
        });
    }

    /// Drop an expired toast. Returns `true` when something changed.
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| notification.is_expired(now))
        {
            self.notification = None;
            return true;
        }
        false
    }
}
