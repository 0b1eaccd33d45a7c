use folio_kernel::domain::config::EffectsConfig;
use folio_kernel::dom::ids::{FIREFLIES, FIREFLY_CLASS, FLOATING_LEAVES, LEAF_CLASS};
use folio_kernel::prelude::*;
use rand::Rng;
use tracing::debug;

/// Keyframes the page stylesheet defines for each layer.
pub const LEAF_ANIMATION: &str = "fall";
pub const FIREFLY_ANIMATION: &str = "glow";

/// A falling leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    pub size_px: f64,
    pub left_vw: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    /// Green to teal.
    pub hue: f64,
}

impl Leaf {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            size_px: rng.random_range(20.0..40.0),
            left_vw: rng.random_range(0.0..100.0),
            duration_s: rng.random_range(15.0..25.0),
            delay_s: rng.random_range(0.0..20.0),
            hue: rng.random_range(160.0..190.0),
        }
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Element {
        Element::new("div")
            .id(format!("leaf-{index}"))
            .class(LEAF_CLASS)
            .style("width", format!("{:.1}px", self.size_px))
            .style("height", format!("{:.1}px", self.size_px))
            .style("left", format!("{:.2}vw", self.left_vw))
            .style("animation-name", LEAF_ANIMATION)
            .style("animation-delay", format!("{:.2}s", self.delay_s))
            .style("animation-duration", format!("{:.2}s", self.duration_s))
            .style("animation-timing-function", "linear")
            .style("animation-iteration-count", "infinite")
            .style("background-color", format!("hsl({:.0}, 70%, 50%)", self.hue))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Firefly {
    pub left_vw: f64,
    pub top_vh: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

impl Firefly {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            left_vw: rng.random_range(0.0..100.0),
            top_vh: rng.random_range(0.0..100.0),
            size_px: rng.random_range(3.0..7.0),
            duration_s: rng.random_range(8.0..13.0),
            delay_s: rng.random_range(0.0..10.0),
            opacity: rng.random_range(0.3..0.8),
        }
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Element {
        Element::new("div")
            .id(format!("firefly-{index}"))
            .class(FIREFLY_CLASS)
            .style("width", format!("{:.1}px", self.size_px))
            .style("height", format!("{:.1}px", self.size_px))
            .style("left", format!("{:.2}vw", self.left_vw))
            .style("top", format!("{:.2}vh", self.top_vh))
            .style("animation-name", FIREFLY_ANIMATION)
            .style("animation-delay", format!("{:.2}s", self.delay_s))
            .style("animation-duration", format!("{:.2}s", self.duration_s))
            .style("animation-timing-function", "ease-in-out")
            .style("animation-iteration-count", "infinite")
            .style("animation-direction", "alternate")
            .style("opacity", format!("{:.2}", self.opacity))
    }
}

/// One leaf per `spacing` pixels of viewport width.
#[must_use]
pub fn leaf_count(viewport_width: f64, spacing: f64) -> usize {
    if spacing <= 0.0 || !viewport_width.is_finite() || viewport_width <= 0.0 {
        return 0;
    }
    (viewport_width / spacing).floor() as usize
}

/// The two background particle layers.
#[derive(Debug, Clone)]
pub struct ParticleField {
    leaf_spacing_px: f64,
    firefly_count: usize,
}

impl ParticleField {
    #[must_use]
    pub const fn new(config: &EffectsConfig) -> Self {
        Self { leaf_spacing_px: config.leaf_spacing_px, firefly_count: config.firefly_count }
    }

    /// Regenerates both layers for the current viewport. Returns `(leaves, fireflies)`.
    ///
    /// Layers whose container is absent are skipped.
    pub fn rebuild(&self, doc: &mut impl Document, rng: &mut impl Rng) -> (usize, usize) {
        let leaves: Vec<Element> = (0..leaf_count(doc.viewport().width, self.leaf_spacing_px))
            .map(|i| Leaf::random(rng).element(i))
            .collect();
        let fireflies: Vec<Element> =
            (0..self.firefly_count).map(|i| Firefly::random(rng).element(i)).collect();

        let leaf_total = leaves.len();
        let firefly_total = fireflies.len();
        let leaves_rendered = doc.render(FLOATING_LEAVES, leaves);
        let fireflies_rendered = doc.render(FIREFLIES, fireflies);

        debug!(leaf_total, firefly_total, "Particle layers rebuilt");
        (
            if leaves_rendered { leaf_total } else { 0 },
            if fireflies_rendered { firefly_total } else { 0 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_count_follows_viewport_width() {
        assert_eq!(leaf_count(1280.0, 50.0), 25);
        assert_eq!(leaf_count(49.0, 50.0), 0);
        assert_eq!(leaf_count(1280.0, 0.0), 0);
        assert_eq!(leaf_count(f64::NAN, 50.0), 0);
    }

    #[test]
    fn particles_loop_their_keyframes() {
        let leaf = Leaf { size_px: 30.0, left_vw: 10.0, duration_s: 20.0, delay_s: 1.0, hue: 170.0 }.element(0);
        assert_eq!(leaf.style.get("animation-name").map(String::as_str), Some(LEAF_ANIMATION));
        assert_eq!(leaf.style.get("animation-iteration-count").map(String::as_str), Some("infinite"));

        let firefly = Firefly { left_vw: 5.0, top_vh: 5.0, size_px: 4.0, duration_s: 9.0, delay_s: 0.0, opacity: 0.5 }
            .element(0);
        assert_eq!(firefly.style.get("animation-name").map(String::as_str), Some(FIREFLY_ANIMATION));
        assert_eq!(firefly.style.get("animation-direction").map(String::as_str), Some("alternate"));
    }
}
