//! src/cli.rs
//! Command-line flags. Every flag overrides the matching config file value.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Browse a `files.json` manifest: search, copy URLs, download files.
#[derive(Debug, Default, Parser)]
#[command(name = "fileshelf", version, about)]
pub struct Cli {
    /// Manifest location: an http(s) URL or a local path.
    #[arg(short, long)]
    pub source: Option<String>,

    /// Prefix for copied URLs.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where downloads are written.
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Initial search query.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print the listing and exit instead of starting the UI.
    #[arg(long, value_enum)]
    pub print: Option<PrintFormat>,

    /// Log filter directive, e.g. `debug` or `fileshelf_core=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read this config file instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    Plain,
    Html,
}
