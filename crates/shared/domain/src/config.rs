use crate::constants::HOME;
use crate::content::Content;
use crate::theme::Theme;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level site configuration: the content store plus per-slice settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub content: Content,
    pub navigation: NavigationConfig,
    pub audio: AudioConfig,
    pub gallery: GalleryConfig,
    pub effects: EffectsConfig,
    pub theme: ThemeConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into slices.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// What to do when asked to show a page that does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPagePolicy {
    /// Leave the current page visible and change nothing.
    #[default]
    Ignore,
    /// Show the configured default page instead.
    Fallback,
}

/// Page-section navigation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub default_page: String,
    pub unknown_page: UnknownPagePolicy,
    /// Delay before a freshly activated section fades in.
    pub reveal_delay_ms: u64,
}

/// Ambient loop and interface cues.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub volume: f32,
    pub ambient_enabled: bool,
    pub sfx_enabled: bool,
    /// Keep every source muted until the first click on the page.
    pub start_muted: bool,
    pub sources: AudioSources,
    pub synth: SynthConfig,
}

/// Element ids of the three `<audio>` slots.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSources {
    pub ambient: String,
    pub hover: String,
    pub click: String,
}

/// Procedural forest soundscape used when the ambient file is unavailable.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub enabled: bool,
    pub wind_start_ms: u64,
    pub wind_interval_ms: u64,
    pub chirp_start_ms: u64,
    pub chirp_min_ms: u64,
    pub chirp_max_ms: u64,
}

/// Project card filtering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub reveal_delay_ms: u64,
    pub hide_delay_ms: u64,
}

/// Decorative background and easter egg.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// One leaf per this many pixels of viewport width.
    pub leaf_spacing_px: f64,
    pub firefly_count: usize,
    pub key_sequence: Vec<String>,
    pub easter_egg_glyphs: Vec<String>,
    pub easter_egg_glyph_count: usize,
    pub easter_egg_duration_ms: u64,
    pub typing_start_ms: u64,
    pub typing_delay_ms: u64,
    pub cursor_rest_ms: u64,
    pub skill_reveal_start_ms: u64,
    pub skill_reveal_threshold: f64,
    pub skill_fill_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub initial: Theme,
    pub title_prefix: String,
}

// --- Default ---

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_page: HOME.to_owned(),
            unknown_page: UnknownPagePolicy::default(),
            reveal_delay_ms: 50,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 0.5,
            ambient_enabled: true,
            sfx_enabled: true,
            start_muted: true,
            sources: AudioSources::default(),
            synth: SynthConfig::default(),
        }
    }
}

impl Default for AudioSources {
    fn default() -> Self {
        Self {
            ambient: "ambient-sound".to_owned(),
            hover: "hover-sound".to_owned(),
            click: "click-sound".to_owned(),
        }
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            wind_start_ms: 1000,
            wind_interval_ms: 8000,
            chirp_start_ms: 2000,
            chirp_min_ms: 1000,
            chirp_max_ms: 4000,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { reveal_delay_ms: 100, hide_delay_ms: 300 }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        let key_sequence = [
            "ArrowUp",
            "ArrowUp",
            "ArrowDown",
            "ArrowDown",
            "ArrowLeft",
            "ArrowRight",
            "ArrowLeft",
            "ArrowRight",
            "b",
            "a",
        ];
        let glyphs = ["🌸", "⚔️", "🐉", "🎎", "🎌", "🗾", "🍥", "🎴", "👺", "🏯"];

        Self {
            leaf_spacing_px: 50.0,
            firefly_count: 15,
            key_sequence: key_sequence.map(str::to_owned).to_vec(),
            easter_egg_glyphs: glyphs.map(str::to_owned).to_vec(),
            easter_egg_glyph_count: 10,
            easter_egg_duration_ms: 4000,
            typing_start_ms: 1000,
            typing_delay_ms: 100,
            cursor_rest_ms: 1000,
            skill_reveal_start_ms: 1000,
            skill_reveal_threshold: 0.5,
            skill_fill_delay_ms: 100,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { initial: Theme::Day, title_prefix: "Anime Portfolio".to_owned() }
    }
}
