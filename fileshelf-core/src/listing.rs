//! src/listing.rs
//! Non-interactive mode: one load, one render, one presenter, written out.

use std::io::Write;

use tracing::info;

use crate::{
    cli::PrintFormat,
    config::Config,
    error::AppError,
    model::{
        render::render,
        resource::{ManifestSource, ResourceLinks},
        store::ManifestStore,
    },
    view::presenters::{HtmlPresenter, PlainPresenter, Presenter},
};

/// Load the configured manifest and write the filtered listing to `out`.
pub async fn print_listing<W: Write>(
    config: &Config,
    query: &str,
    format: PrintFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let store = ManifestStore::new(ManifestSource::parse(&config.source));
    let manifest = store.load().await?;

    let links = ResourceLinks::new(config.base_url.clone());
    let list = render(&manifest, query);

    let output = match format {
        PrintFormat::Plain => PlainPresenter.present(&list, &links),
        PrintFormat::Html => HtmlPresenter.present(&list, &links),
    };

    out.write_all(output.as_bytes())?;
    out.flush()?;

    info!(
        marker = "LISTING_PRINTED",
        format = ?format,
        files = list.file_count(),
        "Listing written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    fn config_for(source: &std::path::Path) -> Config {
        Config {
            source: source.display().to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn writes_filtered_plain_listing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("files.json");
        std::fs::write(
            &path,
            r#"{"folders":[{"name":"Docs","files":[{"name":"a.pdf"},{"name":"b.txt"}]}]}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        print_listing(&config_for(&path), "pdf", PrintFormat::Plain, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("https://files.aspenini.com/Docs/a.pdf"));
        assert!(!text.contains("b.txt"));
    }

    #[tokio::test]
    async fn missing_manifest_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();

        let mut out = Vec::new();
        let err = print_listing(
            &config_for(&dir.path().join("files.json")),
            "",
            PrintFormat::Html,
            &mut out,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Load(LoadError::Io { .. })));
        assert!(out.is_empty());
    }
}
