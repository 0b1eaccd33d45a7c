use folio_kernel::domain::config::EffectsConfig;
use folio_kernel::dom::ids::SKILL_FILL_CLASS;
use folio_kernel::prelude::*;
use tracing::debug;

/// Puts a skill fill back to its rendered width, which starts its transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreWidth {
    pub fill: String,
    pub width: String,
}

/// Replays the skill bar fill animation the first time the about section is in view.
#[derive(Debug)]
pub struct SkillReveal {
    threshold: f64,
    fill_delay_ms: u64,
    armed: bool,
    done: bool,
}

impl SkillReveal {
    #[must_use]
    pub const fn new(config: &EffectsConfig) -> Self {
        Self {
            threshold: config.skill_reveal_threshold,
            fill_delay_ms: config.skill_fill_delay_ms,
            armed: false,
            done: false,
        }
    }

    /// Starts listening for visibility changes.
    pub const fn arm(&mut self) {
        self.armed = true;
    }

    /// Whether visibility reports are still wanted.
    #[must_use]
    pub const fn is_observing(&self) -> bool {
        self.armed && !self.done
    }

    /// Handles the visible fraction of the about section.
    pub fn on_visibility(&mut self, doc: &mut impl Document, ratio: f64) -> Vec<Deferred<RestoreWidth>> {
        if !self.is_observing() || ratio < self.threshold {
            return Vec::new();
        }
        self.done = true;

        let fills = doc.ids_with_class(SKILL_FILL_CLASS);
        debug!(fills = fills.len(), ratio, "Revealing skill bars");

        fills
            .into_iter()
            .map(|fill| {
                let width = doc.style(&fill, "width").unwrap_or_default();
                doc.set_style(&fill, "transition", "width 1.5s ease");
                doc.set_style(&fill, "width", "0");
                Deferred::after_ms(self.fill_delay_ms, RestoreWidth { fill, width })
            })
            .collect()
    }

    pub fn restore(doc: &mut impl Document, action: &RestoreWidth) -> bool {
        doc.set_style(&action.fill, "width", &action.width)
    }
}
