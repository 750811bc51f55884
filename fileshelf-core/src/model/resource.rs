//! src/model/resource.rs
//! ============================================================================
//! # Resource locations
//!
//! Where the manifest comes from ([`ManifestSource`]) and how a file's
//! resource path turns into something actionable: a copy URL against the
//! configured base URL, or a download location relative to the manifest.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use url::Url;

use crate::error::ActionError;

/// Location of `files.json`: an `http(s)` URL or a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Remote(Url),
    Local(PathBuf),
}

/// Resolved target of a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    Remote(Url),
    Local(PathBuf),
}

impl ManifestSource {
    /// `http://` and `https://` are remote, `file://` and anything that does
    /// not parse as an absolute URL are local paths.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map_or_else(|()| Self::Local(PathBuf::from(raw)), Self::Local),
            _ => Self::Local(PathBuf::from(raw)),
        }
    }

    /// Resolve a `<folder>/<file>` path relative to the manifest's own
    /// location, the way a browser resolves a relative link.
    pub fn resolve(&self, resource_path: &str) -> Result<ResourceLocation, ActionError> {
        match self {
            Self::Remote(url) => url
                .join(resource_path)
                .map(ResourceLocation::Remote)
                .map_err(|e| ActionError::invalid_target(resource_path, e.to_string())),
            Self::Local(path) => {
                let dir = path.parent().unwrap_or_else(|| Path::new(""));
                Ok(ResourceLocation::Local(dir.join(resource_path)))
            }
        }
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Builds the public URL handed to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLinks {
    base_url: String,
}

impl ResourceLinks {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `base_url + path`, no normalisation.
    #[must_use]
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_url_is_plain_concatenation() {
        let links = ResourceLinks::new("https://files.aspenini.com/");
        assert_eq!(
            links.resource_url("Music/track.mp3"),
            "https://files.aspenini.com/Music/track.mp3"
        );

        let no_slash = ResourceLinks::new("https://cdn.example");
        assert_eq!(no_slash.resource_url("a/b"), "https://cdn.examplea/b");
    }

    #[test]
    fn parses_sources() {
        assert_eq!(
            ManifestSource::parse("files.json"),
            ManifestSource::Local(PathBuf::from("files.json"))
        );
        assert!(matches!(
            ManifestSource::parse("https://files.aspenini.com/files.json"),
            ManifestSource::Remote(_)
        ));
        assert_eq!(
            ManifestSource::parse("/srv/files.json"),
            ManifestSource::Local(PathBuf::from("/srv/files.json"))
        );
    }

    #[test]
    fn remote_paths_resolve_next_to_the_manifest() {
        let source = ManifestSource::parse("https://files.aspenini.com/index/files.json");
        let location = source.resolve("Music/track one.mp3").unwrap();
        assert_eq!(
            location.to_string(),
            "https://files.aspenini.com/index/Music/track%20one.mp3"
        );
    }

    #[test]
    fn local_paths_resolve_next_to_the_manifest() {
        let source = ManifestSource::parse("/srv/share/files.json");
        assert_eq!(
            source.resolve("Docs/a.pdf").unwrap(),
            ResourceLocation::Local(PathBuf::from("/srv/share/Docs/a.pdf"))
        );

        let bare = ManifestSource::parse("files.json");
        assert_eq!(
            bare.resolve("Docs/a.pdf").unwrap(),
            ResourceLocation::Local(PathBuf::from("Docs/a.pdf"))
        );
    }
}
