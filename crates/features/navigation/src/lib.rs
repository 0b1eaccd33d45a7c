//! # Navigation
//!
//! Single-page navigation between the `.page` sections of the document.
//!
//! Exactly one section is active at a time. Its nav item (`.nav-item` whose `data-page`
//! names the section) is highlighted and the location fragment mirrors it, so the page can
//! be linked to directly and follows the browser's back and forward buttons.
//!
//! Requests for a page that does not exist are governed by [`UnknownPagePolicy`].

mod error;

pub use crate::error::{NavigationError, NavigationErrorExt};
use folio_kernel::domain::config::{NavigationConfig, UnknownPagePolicy};
use folio_kernel::dom::ids::{ACTIVE_CLASS, NAV_ITEM_CLASS, PAGE_CLASS};
use folio_kernel::prelude::*;
use tracing::{debug, warn};

/// Session navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_page: String,
}

impl NavigationState {
    #[must_use]
    pub fn current_page(&self) -> &str {
        &self.current_page
    }
}

/// Fades the section in once it has been made active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPage {
    pub page: String,
}

/// The result of a successful page change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub page: String,
    pub reveal: Deferred<RevealPage>,
    pub cue: Cue,
}

#[derive(Debug)]
pub struct NavigationController {
    sections: Vec<String>,
    /// `(element id, data-page)` of every nav item.
    nav_items: Vec<(String, String)>,
    state: NavigationState,
    config: NavigationConfig,
}

impl NavigationController {
    /// Collects the page sections and nav items once.
    ///
    /// # Errors
    /// * [`NavigationError::NoSections`] if the document has no `.page` section.
    /// * [`NavigationError::UnknownDefault`] if the configured default page is not a section.
    pub fn new(doc: &impl Document, config: NavigationConfig) -> Result<Self, NavigationError> {
        let sections = doc.ids_with_class(PAGE_CLASS);
        if sections.is_empty() {
            return Err(NavigationError::NoSections {
                message: format!("no element carries the '{PAGE_CLASS}' class").into(),
                context: None,
            });
        }
        if !sections.contains(&config.default_page) {
            return Err(NavigationError::UnknownDefault {
                message: config.default_page.clone().into(),
                context: Some(format!("known pages: {}", sections.join(", ")).into()),
            });
        }

        let nav_items = doc
            .ids_with_class(NAV_ITEM_CLASS)
            .into_iter()
            .filter_map(|id| {
                let page = doc.data(&id, "page")?;
                Some((id, page))
            })
            .collect();

        debug!(?sections, "Navigation initialized");

        Ok(Self {
            state: NavigationState { current_page: config.default_page.clone() },
            sections,
            nav_items,
            config,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub fn current_page(&self) -> &str {
        self.state.current_page()
    }

    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    #[must_use]
    pub fn is_known(&self, page: &str) -> bool {
        self.sections.iter().any(|s| s == page)
    }

    /// Shows the initial page: the one named by the location fragment, or the default page.
    ///
    /// An unknown fragment falls back to the default page and is corrected in place.
    pub fn start(&mut self, doc: &mut impl Document) -> Deferred<RevealPage> {
        let hash = doc.location_hash();
        let page = if self.is_known(&hash) {
            hash.clone()
        } else {
            if !hash.is_empty() {
                warn!(page = %hash, "Unknown page in location, showing the default page");
            }
            self.config.default_page.clone()
        };

        let reveal = self.show(doc, page);
        if !hash.is_empty() {
            doc.set_location_hash(&self.state.current_page);
        }
        reveal
    }

    /// Makes `page_id` the only visible section.
    ///
    /// Returns `None` when the page is unknown and the policy says to ignore it; the
    /// current page then stays as it is.
    pub fn navigate_to(&mut self, doc: &mut impl Document, page_id: &str) -> Option<Transition> {
        let page = if self.is_known(page_id) {
            page_id.to_owned()
        } else {
            match self.config.unknown_page {
                UnknownPagePolicy::Ignore => {
                    warn!(page = page_id, "Ignoring navigation to unknown page");
                    return None;
                }
                UnknownPagePolicy::Fallback => {
                    warn!(page = page_id, fallback = %self.config.default_page, "Unknown page, falling back");
                    self.config.default_page.clone()
                }
            }
        };

        let reveal = self.show(doc, page.clone());
        doc.set_location_hash(&page);
        doc.scroll_to_top(ScrollBehavior::Smooth);

        Some(Transition { page, reveal, cue: Cue::Click })
    }

    /// Follows a fragment change made outside the controller (links, history).
    pub fn on_hash_change(&mut self, doc: &mut impl Document) -> Option<Transition> {
        let hash = doc.location_hash();
        if hash.is_empty() || hash == self.state.current_page {
            return None;
        }
        self.navigate_to(doc, &hash)
    }

    /// Completes a deferred fade-in. Stale reveals for a page that is no longer current are
    /// dropped.
    pub fn reveal(&self, doc: &mut impl Document, action: &RevealPage) -> bool {
        if action.page != self.state.current_page {
            debug!(page = %action.page, "Dropping stale page reveal");
            return false;
        }
        doc.set_style(&action.page, "opacity", "1")
    }

    fn show(&mut self, doc: &mut impl Document, page: String) -> Deferred<RevealPage> {
        for section in &self.sections {
            doc.set_class(section, ACTIVE_CLASS, false);
            doc.set_style(section, "opacity", "0");
        }
        doc.set_class(&page, ACTIVE_CLASS, true);

        for (id, target) in &self.nav_items {
            doc.set_class(id, ACTIVE_CLASS, *target == page);
        }

        debug!(%page, "Page shown");
        self.state.current_page = page.clone();
        Deferred::after_ms(self.config.reveal_delay_ms, RevealPage { page })
    }
}
