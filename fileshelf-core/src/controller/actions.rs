//! src/controller/actions.rs
//! ============================================================================
//! # Actions: every input the shell reacts to
//!
//! Terminal key events and background task results both become an
//! [`Action`]; the dispatcher is the only place that applies them.

use std::{path::PathBuf, sync::Arc};

use crate::model::manifest::Manifest;

#[derive(Debug, Clone)]
pub enum Action {
    /// Append a character to the search query.
    InsertChar(char),

    /// Remove the last character of the search query.
    DeleteChar,

    /// Reset the search query to empty.
    ClearQuery,

    MoveSelection(isize),

    SelectFirst,

    SelectLast,

    /// Copy the selected file's public URL.
    CopyUrl,

    /// Download the selected file into the download directory.
    Download,

    /// The manifest fetch finished.
    ManifestLoaded(Arc<Manifest>),

    /// The manifest fetch failed.
    ManifestFailed(String),

    /// A background download finished.
    DownloadFinished {
        path: String,
        result: Result<PathBuf, String>,
    },

    /// Periodic tick for toast expiry.
    Tick,

    Resize(u16, u16),

    Quit,
}
