//! src/model/store.rs
//! ============================================================================
//! # ManifestStore: write-once manifest snapshot
//!
//! One fetch per process: no retry, no timeout, no refresh. The first
//! successful [`ManifestStore::load`] publishes an `Arc<Manifest>` that every
//! later render borrows; nothing mutates it afterwards.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{info, instrument, warn};

use crate::{
    error::LoadError,
    model::{manifest::Manifest, resource::ManifestSource},
};

#[derive(Debug)]
pub struct ManifestStore {
    source: ManifestSource,
    client: reqwest::Client,
    snapshot: OnceCell<Arc<Manifest>>,
}

impl ManifestStore {
    #[must_use]
    pub fn new(source: ManifestSource) -> Self {
        Self::with_client(source, reqwest::Client::new())
    }

    #[must_use]
    pub fn with_client(source: ManifestSource, client: reqwest::Client) -> Self {
        Self {
            source,
            client,
            snapshot: OnceCell::new(),
        }
    }

    #[must_use]
    pub const fn source(&self) -> &ManifestSource {
        &self.source
    }

    /// The loaded manifest, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Manifest>> {
        self.snapshot.get().cloned()
    }

    /// Fetch and publish the manifest. Any failure leaves the store empty.
    #[instrument(
        level = "info",
        skip_all,
        fields(marker = "MANIFEST_LOAD", source = %self.source)
    )]
    pub async fn load(&self) -> Result<Arc<Manifest>, LoadError> {
        if self.snapshot.get().is_some() {
            return Err(LoadError::AlreadyLoaded);
        }

        let manifest = match self.fetch().await {
            Ok(manifest) => Arc::new(manifest),
            Err(e) => {
                warn!(marker = "MANIFEST_LOAD_FAILED", error = %e, "Failed to load files");
                return Err(e);
            }
        };

        self.snapshot
            .set(Arc::clone(&manifest))
            .map_err(|_| LoadError::AlreadyLoaded)?;

        info!(
            marker = "MANIFEST_LOADED",
            folders = manifest.folders.len(),
            files = manifest.file_count(),
            "Manifest loaded"
        );

        Ok(manifest)
    }

    async fn fetch(&self) -> Result<Manifest, LoadError> {
        let bytes = match &self.source {
            ManifestSource::Remote(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|source| LoadError::Request {
                        url: url.to_string(),
                        source,
                    })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }

                response
                    .bytes()
                    .await
                    .map_err(|source| LoadError::Request {
                        url: url.to_string(),
                        source,
                    })?
                    .to_vec()
            }

            ManifestSource::Local(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| LoadError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
        };

        Ok(Manifest::from_json_slice(&bytes)?)
    }
}
