//! src/operators/download.rs
//! ============================================================================
//! # Downloads
//!
//! A download fetches `<folder>/<file>` relative to the manifest location and
//! writes it into the configured download directory under the file's own
//! name. An existing file of that name is left alone and the download fails.
//! Remote sources go through `reqwest`; local sources are copied. One
//! attempt, no retry.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::{
    error::ActionError,
    model::resource::{ManifestSource, ResourceLocation},
};

#[async_trait]
pub trait Downloader: Send + Sync {
    /// Fetch `resource_path` and store it as `file_name`; returns the written path.
    async fn download(&self, resource_path: &str, file_name: &str)
    -> Result<PathBuf, ActionError>;
}

#[derive(Debug, Clone)]
pub struct ResourceDownloader {
    source: ManifestSource,
    download_dir: PathBuf,
    client: reqwest::Client,
}

impl ResourceDownloader {
    #[must_use]
    pub fn new(source: ManifestSource, download_dir: PathBuf) -> Self {
        Self {
            source,
            download_dir,
            client: reqwest::Client::new(),
        }
    }

    /// Destination inside the download directory. Only the last path
    /// component of `file_name` is used.
    fn destination(&self, file_name: &str) -> Result<PathBuf, ActionError> {
        Path::new(file_name)
            .file_name()
            .map(|name| self.download_dir.join(name))
            .ok_or_else(|| ActionError::invalid_target(file_name, "not a file name"))
    }

    async fn fetch_remote(&self, url: &url::Url) -> Result<Vec<u8>, ActionError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ActionError::download_failed(url.as_str(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ActionError::download_failed(
                url.as_str(),
                format!("HTTP {}", status.as_u16()),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ActionError::download_failed(url.as_str(), e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl Downloader for ResourceDownloader {
    #[instrument(level = "info", skip(self), fields(marker = "DOWNLOAD"))]
    async fn download(
        &self,
        resource_path: &str,
        file_name: &str,
    ) -> Result<PathBuf, ActionError> {
        let destination = self.destination(file_name)?;

        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(|source| ActionError::Io {
                path: self.download_dir.clone(),
                source,
            })?;

        let io_err = |source| ActionError::Io {
            path: destination.clone(),
            source,
        };

        // The source is fetched or opened before the destination exists, so
        // a failed download leaves nothing behind.
        match self.source.resolve(resource_path)? {
            ResourceLocation::Remote(url) => {
                let bytes = self.fetch_remote(&url).await?;
                let mut file = create_new(&destination).await.map_err(io_err)?;
                file.write_all(&bytes).await.map_err(io_err)?;
                file.flush().await.map_err(io_err)?;
            }
            ResourceLocation::Local(path) => {
                let mut source = tokio::fs::File::open(&path).await.map_err(|e| {
                    ActionError::download_failed(path.display().to_string(), e.to_string())
                })?;
                let mut file = create_new(&destination).await.map_err(io_err)?;
                tokio::io::copy(&mut source, &mut file)
                    .await
                    .map_err(io_err)?;
                file.flush().await.map_err(io_err)?;
            }
        }

        info!(
            marker = "DOWNLOAD_COMPLETE",
            resource_path,
            destination = %destination.display(),
            "Download finished"
        );

        Ok(destination)
    }
}

/// Existing files are never overwritten.
async fn create_new(path: &Path) -> std::io::Result<tokio::fs::File> {
    tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn copies_local_resources_next_to_manifest() {
        let share = tempfile::tempdir().unwrap();
        std::fs::create_dir(share.path().join("Docs")).unwrap();
        std::fs::write(share.path().join("Docs/a.pdf"), b"%PDF").unwrap();
        std::fs::write(share.path().join("files.json"), b"{}").unwrap();

        let out = tempfile::tempdir().unwrap();
        let downloader = ResourceDownloader::new(
            ManifestSource::Local(share.path().join("files.json")),
            out.path().join("downloads"),
        );

        let written = downloader.download("Docs/a.pdf", "a.pdf").await.unwrap();
        assert_eq!(written, out.path().join("downloads/a.pdf"));
        assert_eq!(std::fs::read(written).unwrap(), b"%PDF");
    }

    #[tokio::test]
    async fn missing_local_resource_fails() {
        let share = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let downloader = ResourceDownloader::new(
            ManifestSource::Local(share.path().join("files.json")),
            out.path().to_path_buf(),
        );

        let err = downloader.download("Docs/none.pdf", "none.pdf").await.unwrap_err();
        assert!(matches!(err, ActionError::Download { .. }));
    }

    #[tokio::test]
    async fn existing_file_is_not_overwritten() {
        let share = tempfile::tempdir().unwrap();
        std::fs::create_dir(share.path().join("Docs")).unwrap();
        std::fs::write(share.path().join("Docs/a.pdf"), b"new").unwrap();

        let out = tempfile::tempdir().unwrap();
        std::fs::write(out.path().join("a.pdf"), b"mine").unwrap();

        let downloader = ResourceDownloader::new(
            ManifestSource::Local(share.path().join("files.json")),
            out.path().to_path_buf(),
        );

        let err = downloader.download("Docs/a.pdf", "a.pdf").await.unwrap_err();
        match err {
            ActionError::Io { path, source } => {
                assert_eq!(path, out.path().join("a.pdf"));
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(std::fs::read(out.path().join("a.pdf")).unwrap(), b"mine");
    }

    #[tokio::test]
    async fn failed_source_leaves_no_partial_file() {
        let share = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let downloader = ResourceDownloader::new(
            ManifestSource::Local(share.path().join("files.json")),
            out.path().to_path_buf(),
        );

        assert!(downloader.download("Docs/none.pdf", "none.pdf").await.is_err());
        assert!(!out.path().join("none.pdf").exists());
    }

    #[test]
    fn destination_keeps_only_the_file_name() {
        let downloader = ResourceDownloader::new(
            ManifestSource::parse("files.json"),
            PathBuf::from("/tmp/out"),
        );

        assert_eq!(
            downloader.destination("../../etc/passwd").unwrap(),
            PathBuf::from("/tmp/out/passwd")
        );
        assert!(downloader.destination("..").is_err());
    }
}
