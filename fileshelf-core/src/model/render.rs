//! src/model/render.rs
//! ============================================================================
//! # View renderer: (manifest, query) -> render records
//!
//! Pure and synchronous. The manifest is only ever borrowed; each call builds
//! a fresh [`RenderedList`]. Folder and file order follow the manifest.
//!
//! Matching is a case-insensitive substring test against the trimmed query. A
//! file is kept when its own name matches OR its folder's name matches, so a
//! query hitting the folder name keeps every file of that folder.
//!
//! No escaping happens here. Presentation adapters own that.

use compact_str::CompactString;

use crate::model::manifest::{FileEntry, Folder, Manifest};
use crate::view::icons::icon_for_extension;

/// One displayable file with everything derived from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub name: CompactString,
    pub base_name: CompactString,
    pub extension: CompactString,
    pub icon: &'static str,
    /// `<folder>/<file>`, used for download and as the copy-URL suffix.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFolder {
    pub name: CompactString,
    /// Empty only in a blank-query render of a folder without files.
    pub files: Vec<RenderedFile>,
}

impl RenderedFolder {
    /// Every file of `folder`, unfiltered.
    #[must_use]
    pub fn from_folder(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            files: folder
                .files
                .iter()
                .map(|file| RenderedFile::from_entry(folder, file))
                .collect(),
        }
    }
}

/// Render output. `Empty` is the explicit "no files found" state, returned for
/// both an empty manifest and a query without matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedList {
    Empty,
    Folders(Vec<RenderedFolder>),
}

impl RenderedList {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn folders(&self) -> &[RenderedFolder] {
        match self {
            Self::Empty => &[],
            Self::Folders(folders) => folders,
        }
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.folders().iter().map(|folder| folder.files.len()).sum()
    }

    /// Files in display order, paired with their folder.
    pub fn files(&self) -> impl Iterator<Item = (&RenderedFolder, &RenderedFile)> {
        self.folders()
            .iter()
            .flat_map(|folder| folder.files.iter().map(move |file| (folder, file)))
    }

    /// The `index`-th file in display order.
    #[must_use]
    pub fn file_at(&self, index: usize) -> Option<(&RenderedFolder, &RenderedFile)> {
        self.files().nth(index)
    }
}

impl RenderedFile {
    #[must_use]
    pub fn from_entry(folder: &Folder, file: &FileEntry) -> Self {
        let extension = file.extension();

        Self {
            name: file.name.clone(),
            base_name: CompactString::from(file.base_name()),
            extension: CompactString::from(extension),
            icon: icon_for_extension(extension),
            path: folder.resource_path(file),
        }
    }
}

/// Trimmed, lowercased search term. A leading byte-order mark counts as
/// whitespace, so a pasted BOM alone is still a blank query.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// Filter `manifest` by `query` and derive render records.
///
/// A blank query renders the manifest as-is, empty folders included; it is
/// `Empty` only when the manifest has no folders. A non-blank query drops
/// folders left without files.
#[must_use]
pub fn render(manifest: &Manifest, query: &str) -> RenderedList {
    let term = normalize_query(query);

    let folders: Vec<RenderedFolder> = if term.is_empty() {
        manifest.folders.iter().map(RenderedFolder::from_folder).collect()
    } else {
        manifest
            .folders
            .iter()
            .filter_map(|folder| {
                let folder_matches = folder.name.to_lowercase().contains(&term);

                let files: Vec<RenderedFile> = folder
                    .files
                    .iter()
                    .filter(|file| folder_matches || file.name.to_lowercase().contains(&term))
                    .map(|file| RenderedFile::from_entry(folder, file))
                    .collect();

                (!files.is_empty()).then(|| RenderedFolder {
                    name: folder.name.clone(),
                    files,
                })
            })
            .collect()
    };

    if folders.is_empty() {
        RenderedList::Empty
    } else {
        RenderedList::Folders(folders)
    }
}
