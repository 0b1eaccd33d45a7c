//! # Folio Web
//!
//! The browser host: renders the page skeleton with Dioxus, implements the document and
//! audio capabilities over `web-sys` and drives one [`folio::Portfolio`] session from DOM
//! events and timers.

mod app;
mod audio;
mod document;
mod error;
mod listeners;
mod runtime;

pub use crate::app::App;
pub use crate::audio::HtmlAudioBackend;
pub use crate::document::BrowserDocument;
pub use crate::error::{WebError, WebErrorExt};

use dioxus::prelude::*;
use folio::domain::config::SiteConfig;

/// Site content and settings embedded at build time.
pub const SITE_CONFIG: &str = include_str!("../site.toml");

#[derive(Debug)]
pub struct WebApp {
    config: SiteConfig,
}

impl WebApp {
    #[must_use]
    pub const fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Mounts `root` into the page, with the site config available as context.
    pub fn launch(self, root: fn() -> Element) {
        LaunchBuilder::web().with_context(self.config).launch(root);
    }
}
