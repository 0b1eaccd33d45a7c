use folio_kernel::domain::config::EffectsConfig;
use folio_kernel::dom::ids::EASTER_EGG;
use folio_kernel::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;

/// Removes an easter-egg overlay once its animation has played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOverlay {
    pub overlay: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EasterEggPass {
    pub overlay: String,
    pub removal: Deferred<RemoveOverlay>,
    pub cue: Cue,
}

/// Full-screen overlay of glyphs floating up from the bottom edge.
#[derive(Debug)]
pub struct EasterEgg {
    glyphs: Vec<String>,
    glyph_count: usize,
    duration_ms: u64,
    passes: u64,
}

impl EasterEgg {
    #[must_use]
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            glyphs: config.easter_egg_glyphs.clone(),
            glyph_count: config.easter_egg_glyph_count,
            duration_ms: config.easter_egg_duration_ms,
            passes: 0,
        }
    }

    /// Number of passes played so far.
    #[must_use]
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    pub fn activate(&mut self, doc: &mut impl Document, rng: &mut impl Rng) -> EasterEggPass {
        self.passes += 1;
        let overlay = format!("{EASTER_EGG}-{}", self.passes);

        let glyphs = (0..self.glyph_count).map(|i| {
            let glyph = self.glyphs.choose(rng).map_or("", String::as_str);
            Element::new("div")
                .class("easter-egg-glyph")
                .text(glyph)
                .style("position", "absolute")
                .style("font-size", "3rem")
                .style("opacity", "0")
                .style("left", format!("{:.2}vw", rng.random_range(0.0..100.0)))
                .style("top", "100vh")
                .style("animation", format!("float-up 3s {:.1}s forwards", i as f64 * 0.3))
        });
        let element = Element::new("div")
            .id(overlay.clone())
            .class(EASTER_EGG)
            .style("position", "fixed")
            .style("inset", "0")
            .style("z-index", "9999")
            .style("pointer-events", "none")
            .children(glyphs.collect::<Vec<_>>());

        doc.append_to_body(element);
        info!(pass = self.passes, "Easter egg activated");

        EasterEggPass {
            removal: Deferred::after_ms(self.duration_ms, RemoveOverlay { overlay: overlay.clone() }),
            overlay,
            cue: Cue::Click,
        }
    }

    pub fn dismiss(doc: &mut impl Document, action: &RemoveOverlay) -> bool {
        doc.remove(&action.overlay)
    }
}
