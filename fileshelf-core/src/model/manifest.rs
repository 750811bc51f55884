//! src/model/manifest.rs
//! ============================================================================
//! # Manifest: folder/file listing for one session
//!
//! Mirrors the `files.json` document verbatim:
//! `{ "folders": [ { "name": .., "files": [ { "name": .. } ] } ] }`.
//! Folder and file names are opaque path segments. Nothing here validates or
//! escapes them; every derived value (extension, base name, resource path) is
//! computed on demand and never stored.

use compact_str::CompactString;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

/// Ordered folder listing. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// A missing or `null` list is an empty manifest.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub folders: Vec<Folder>,
}

/// Named grouping of files, also used as the path prefix of its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: CompactString,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: CompactString,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Manifest {
    /// Decode a `files.json` document.
    ///
    /// serde also accepts a struct written as a positional array, so the
    /// document, each folder and each file must be JSON objects first.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        require_objects(&value)?;
        serde_json::from_value(value)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|folder| folder.files.len()).sum()
    }
}

fn require_objects(document: &Value) -> Result<(), serde_json::Error> {
    let Value::Object(root) = document else {
        return Err(serde_json::Error::custom("manifest must be a JSON object"));
    };

    let Some(Value::Array(folders)) = root.get("folders") else {
        return Ok(());
    };

    for folder in folders {
        let Value::Object(folder) = folder else {
            return Err(serde_json::Error::custom("folder entries must be JSON objects"));
        };

        if let Some(Value::Array(files)) = folder.get("files") {
            if files.iter().any(|file| !file.is_object()) {
                return Err(serde_json::Error::custom("file entries must be JSON objects"));
            }
        }
    }

    Ok(())
}

impl Folder {
    pub fn new<S: Into<CompactString>>(name: S, files: Vec<FileEntry>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }

    /// `<folder>/<file>`, plain concatenation.
    #[must_use]
    pub fn resource_path(&self, file: &FileEntry) -> String {
        format!("{}/{}", self.name, file.name)
    }
}

impl FileEntry {
    pub fn new<S: Into<CompactString>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// Text after the last `.`; empty when there is none.
    #[must_use]
    pub fn extension(&self) -> &str {
        split_name(&self.name).1
    }

    /// Text before the last `.`; the whole name when there is none.
    #[must_use]
    pub fn base_name(&self) -> &str {
        split_name(&self.name).0
    }
}

/// Split a file name at its last `.` into `(base, extension)`.
///
/// | name         | base       | extension   |
/// |--------------|------------|-------------|
/// | `track.mp3`  | `track`    | `mp3`       |
/// | `a.tar.gz`   | `a.tar`    | `gz`        |
/// | `README`     | `README`   | ``          |
/// | `.gitignore` | ``         | `gitignore` |
/// | `notes.`     | `notes`    | ``          |
#[must_use]
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], &name[dot + 1..]),
        None => (name, ""),
    }
}
