pub mod error;

pub mod cli;

pub mod config;

pub mod listing;

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod dispatcher;
    pub use dispatcher::{ActionDispatcher, Flow};

    pub mod key_map;
}

pub mod model {
    pub mod app_state;
    pub use app_state::{AppState, LoadStatus, Notification, NotificationLevel};

    pub mod manifest;
    pub use manifest::{FileEntry, Folder, Manifest};

    pub mod render;
    pub use render::{RenderedFile, RenderedFolder, RenderedList, render};

    pub mod resource;
    pub use resource::{ManifestSource, ResourceLinks, ResourceLocation};

    pub mod store;
    pub use store::ManifestStore;
}

pub mod operators {
    pub mod clipboard;
    pub use clipboard::{ClipboardSink, SystemClipboard};

    pub mod download;
    pub use download::{Downloader, ResourceDownloader};
}

pub mod view {
    pub mod icons;

    pub mod presenters;
    pub use presenters::{HtmlPresenter, PlainPresenter, Presenter};

    pub mod theme;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod file_list;
        pub use file_list::FileList;
        pub mod notification_overlay;
        pub use notification_overlay::NotificationOverlay;
        pub mod search_bar;
        pub use search_bar::SearchBar;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }
}

pub mod logging;
pub use logging::LoggerBuilder;

pub use error::{ActionError, AppError, ConfigError, LoadError};

pub use model::{AppState, Manifest, ManifestStore, RenderedList, render};
