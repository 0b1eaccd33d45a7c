//! # Gallery
//!
//! Filters the rendered project cards by category.
//!
//! A filter pass updates every card immediately and returns the second half of each card's
//! transition as deferred [`FilterStep`]s: matching cards fade in after a short delay,
//! the others are taken out of the layout once their fade-out has finished. Every pass gets
//! a new generation number and [`FilterController::settle`] drops steps from older passes,
//! so a late hide can never remove a card that a newer pass revealed.

use folio_kernel::domain::categories::CategorySet;
use folio_kernel::domain::config::GalleryConfig;
use folio_kernel::domain::content::Category;
use folio_kernel::dom::ids::{ACTIVE_CLASS, FILTER_BUTTON_CLASS, PROJECT_CARD_CLASS};
use folio_kernel::prelude::*;
use tracing::{debug, warn};

/// The second half of a card transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterStep {
    Reveal { card: String, generation: u64 },
    Hide { card: String, generation: u64 },
}

impl FilterStep {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        match self {
            Self::Reveal { generation, .. } | Self::Hide { generation, .. } => *generation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPass {
    pub filter: CategorySet,
    pub generation: u64,
    pub steps: Vec<Deferred<FilterStep>>,
    pub cue: Cue,
}

#[derive(Debug)]
pub struct FilterController {
    generation: u64,
    active: CategorySet,
    config: GalleryConfig,
}

impl FilterController {
    #[must_use]
    pub const fn new(config: GalleryConfig) -> Self {
        Self { generation: 0, active: CategorySet::ALL, config }
    }

    /// Currently applied filter.
    #[must_use]
    pub const fn active(&self) -> CategorySet {
        self.active
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Shows the cards of `category` (`"all"` shows every card) and hides the rest.
    ///
    /// Unknown categories are logged and ignored.
    pub fn filter_by_category(&mut self, doc: &mut impl Document, category: &str) -> Option<FilterPass> {
        let filter = CategorySet::from(category);
        if filter.is_empty() {
            warn!(category, "Ignoring unknown project category");
            return None;
        }

        self.generation += 1;
        self.active = filter;
        let generation = self.generation;

        let mut steps = Vec::new();
        for card in doc.ids_with_class(PROJECT_CARD_CLASS) {
            let card_category = doc.data(&card, "category");
            let visible = filter == CategorySet::ALL
                || card_category.as_deref().and_then(Category::parse).is_some_and(|c| filter.matches(c));

            if visible {
                doc.set_style(&card, "display", "block");
                steps.push(Deferred::after_ms(
                    self.config.reveal_delay_ms,
                    FilterStep::Reveal { card, generation },
                ));
            } else {
                doc.set_style(&card, "opacity", "0");
                doc.set_style(&card, "transform", "translateY(20px)");
                steps.push(Deferred::after_ms(
                    self.config.hide_delay_ms,
                    FilterStep::Hide { card, generation },
                ));
            }
        }

        for button in doc.ids_with_class(FILTER_BUTTON_CLASS) {
            let selected = doc.data(&button, "filter").as_deref() == Some(category);
            doc.set_class(&button, ACTIVE_CLASS, selected);
        }

        debug!(category, generation, cards = steps.len(), "Filter pass started");
        Some(FilterPass { filter, generation, steps, cue: Cue::Click })
    }

    /// Completes a deferred card transition. Returns `false` for steps of a superseded pass.
    pub fn settle(&self, doc: &mut impl Document, step: &FilterStep) -> bool {
        if step.generation() != self.generation {
            debug!(step = step.generation(), current = self.generation, "Dropping stale filter step");
            return false;
        }

        match step {
            FilterStep::Reveal { card, .. } => {
                doc.set_style(card, "opacity", "1");
                doc.set_style(card, "transform", "translateY(0)")
            }
            FilterStep::Hide { card, .. } => doc.set_style(card, "display", "none"),
        }
    }
}
