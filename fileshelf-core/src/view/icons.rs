//! src/view/icons.rs
//! ============================================================================
//! # File Icons
//!
//! Static glyph table keyed by lowercased file extension (no leading dot).
//! Anything not listed falls back to [`DEFAULT_ICON`].

pub const FOLDER_ICON: &str = "📁";

pub const AUDIO_ICON: &str = "🎵";
pub const IMAGE_ICON: &str = "🖼️";
pub const VIDEO_ICON: &str = "🎬";
pub const DOCUMENT_ICON: &str = "📄";
pub const TEXT_ICON: &str = "📝";
pub const DATA_ICON: &str = "📋";
pub const ARCHIVE_ICON: &str = "📦";
pub const EXECUTABLE_ICON: &str = "⚙️";
pub const CODE_ICON: &str = "💻";
pub const PYTHON_ICON: &str = "🐍";
pub const LUA_ICON: &str = "🌙";
pub const GAME_ICON: &str = "🎮";
pub const DEFAULT_ICON: &str = "📄";

/// Glyph for an extension, case-insensitive.
#[must_use]
pub fn icon_for_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "mid" | "midi" | "mp3" | "wav" | "ogg" | "flac" => AUDIO_ICON,
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" => IMAGE_ICON,
        "mp4" | "webm" | "mov" | "avi" => VIDEO_ICON,
        "pdf" | "doc" | "docx" => DOCUMENT_ICON,
        "txt" => TEXT_ICON,
        "json" | "xml" => DATA_ICON,
        "zip" | "rar" | "7z" | "tar" | "gz" => ARCHIVE_ICON,
        "exe" | "dll" => EXECUTABLE_ICON,
        "js" | "ts" => CODE_ICON,
        "py" => PYTHON_ICON,
        "lua" => LUA_ICON,
        "rbxl" | "rbxm" | "rbxlx" => GAME_ICON,
        _ => DEFAULT_ICON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_their_category() {
        assert_eq!(icon_for_extension("mp3"), AUDIO_ICON);
        assert_eq!(icon_for_extension("MIDI"), AUDIO_ICON);
        assert_eq!(icon_for_extension("Jpeg"), IMAGE_ICON);
        assert_eq!(icon_for_extension("mov"), VIDEO_ICON);
        assert_eq!(icon_for_extension("txt"), TEXT_ICON);
        assert_eq!(icon_for_extension("xml"), DATA_ICON);
        assert_eq!(icon_for_extension("7z"), ARCHIVE_ICON);
        assert_eq!(icon_for_extension("dll"), EXECUTABLE_ICON);
        assert_eq!(icon_for_extension("ts"), CODE_ICON);
        assert_eq!(icon_for_extension("py"), PYTHON_ICON);
        assert_eq!(icon_for_extension("lua"), LUA_ICON);
        assert_eq!(icon_for_extension("rbxlx"), GAME_ICON);
    }

    #[test]
    fn unknown_or_missing_extension_uses_default() {
        assert_eq!(icon_for_extension(""), DEFAULT_ICON);
        assert_eq!(icon_for_extension("rs"), DEFAULT_ICON);
        assert_eq!(icon_for_extension("default"), DEFAULT_ICON);
    }
}
