//! src/view/presenters.rs
//! ============================================================================
//! # Presentation adapters
//!
//! Render records carry raw manifest names. Each output surface escapes them
//! for itself: the terminal strips control characters, HTML escapes markup and
//! attribute metacharacters. Both adapters print the same "No files found"
//! empty state as the terminal list.

use std::{borrow::Cow, fmt::Write as _};

use crate::{
    model::{render::RenderedList, resource::ResourceLinks},
    view::{components::file_list::EMPTY_MESSAGE, icons::FOLDER_ICON},
};

/// Turns a render result into text for one output surface.
pub trait Presenter {
    fn present(&self, list: &RenderedList, links: &ResourceLinks) -> String;
}

/// Drop control characters (escape sequences, newlines) so names cannot
/// drive the terminal.
#[must_use]
pub fn strip_control(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        Cow::Owned(text.chars().filter(|c| !c.is_control()).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Escape text for HTML element content and quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Indented text listing, one file per line with its public URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPresenter;

impl Presenter for PlainPresenter {
    fn present(&self, list: &RenderedList, links: &ResourceLinks) -> String {
        if list.is_empty() {
            return format!("{EMPTY_MESSAGE}\n");
        }

        let mut out = String::new();
        for folder in list.folders() {
            let _ = writeln!(out, "{FOLDER_ICON} {}/", strip_control(&folder.name));
            for file in &folder.files {
                let _ = writeln!(
                    out,
                    "  {} {}  {}",
                    file.icon,
                    strip_control(&file.name),
                    strip_control(&links.resource_url(&file.path))
                );
            }
        }
        out
    }
}

/// Markup fragment with a copy button (URL in `data-url`) and a download
/// link (relative `href`) per file.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlPresenter;

impl Presenter for HtmlPresenter {
    fn present(&self, list: &RenderedList, links: &ResourceLinks) -> String {
        if list.is_empty() {
            return format!("<div class=\"empty-state\">{EMPTY_MESSAGE}</div>\n");
        }

        let mut out = String::new();
        for folder in list.folders() {
            let _ = writeln!(out, "<div class=\"folder-section\">");
            let _ = writeln!(
                out,
                "  <div class=\"folder-header\">{}/</div>",
                escape_html(&folder.name)
            );
            let _ = writeln!(out, "  <div class=\"folder-files\">");

            for file in &folder.files {
                let ext = if file.name.len() > file.base_name.len() {
                    format!("<span class=\"file-ext\">.{}</span>", escape_html(&file.extension))
                } else {
                    String::new()
                };
                let url = links.resource_url(&file.path);

                let _ = writeln!(out, "    <div class=\"file-item\">");
                let _ = writeln!(
                    out,
                    "      <div class=\"file-info\"><div class=\"file-icon\">{}</div><span class=\"file-name\">{}{ext}</span></div>",
                    file.icon,
                    escape_html(&file.base_name),
                );
                let _ = writeln!(
                    out,
                    "      <div class=\"file-actions\"><button class=\"btn\" type=\"button\" data-url=\"{}\">Copy URL</button><a class=\"btn btn-download\" href=\"{}\" download>Download</a></div>",
                    escape_html(&url),
                    escape_html(&file.path),
                );
                let _ = writeln!(out, "    </div>");
            }

            let _ = writeln!(out, "  </div>");
            let _ = writeln!(out, "</div>");
        }
        out
    }
}
