//! # Audio
//!
//! Owns the playback state of the page and mediates every sound-triggering event.
//!
//! Three sources are driven through an [`AudioBackend`]: the ambient loop and the hover and
//! click interface cues. All of them start muted and are unmuted by the first click on the
//! page, since browsers refuse audible autoplay. Playback failures never propagate: they
//! are logged and the page carries on silently.
//!
//! When enabled, a procedural [`synth::ForestSynth`] layers wind and bird chirps on top of
//! the ambient loop.

mod backend;
mod error;
pub mod synth;

pub use crate::backend::{AudioBackend, MemoryBackend, Sound, SourceState};
pub use crate::error::{AudioError, AudioErrorExt};
use crate::synth::{ForestSynth, ToneSpec, Voice};
use folio_kernel::domain::config::AudioConfig;
use folio_kernel::dom::ids::{
    ACTIVE_CLASS, AMBIENT_STATUS, AMBIENT_TOGGLE, PLAY_MUSIC_ICON, PLAY_MUSIC_LABEL, SFX_STATUS,
    SFX_TOGGLE, VOLUME_SLIDER,
};
use folio_kernel::prelude::*;
use rand::Rng;
use tracing::{debug, info, warn};

const FALLBACK_VOLUME: f32 = 0.5;

/// Playback switches shared by all sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioState {
    pub ambient_enabled: bool,
    pub sfx_enabled: bool,
    /// Always within `0.0..=1.0`.
    pub volume: f32,
    pub muted: bool,
}

#[derive(Debug)]
pub struct AudioController<B> {
    backend: B,
    state: AudioState,
    available: Vec<Sound>,
    interacted: bool,
    synth: ForestSynth,
}

impl<B: AudioBackend> AudioController<B> {
    /// Wraps the backend. Missing sources are reported once here; calls for them become no-ops.
    pub fn new(backend: B, config: &AudioConfig) -> Self {
        let available: Vec<Sound> = Sound::ALL.into_iter().filter(|s| backend.has_source(*s)).collect();
        for missing in Sound::ALL.into_iter().filter(|s| !available.contains(s)) {
            warn!(sound = %missing, "Audio source is missing, its calls will be ignored");
        }

        let volume =
            if config.volume.is_finite() { config.volume.clamp(0.0, 1.0) } else { FALLBACK_VOLUME };

        Self {
            backend,
            state: AudioState {
                ambient_enabled: config.ambient_enabled,
                sfx_enabled: config.sfx_enabled,
                volume,
                muted: config.start_muted,
            },
            available,
            interacted: false,
            synth: ForestSynth::new(config.synth.clone()),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AudioState {
        &self.state
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Applies the initial volume and mute state, reflects the switches into the page and
    /// starts the ambient loop (and the synth) when enabled.
    pub fn start(&mut self, doc: &mut impl Document) -> Vec<Deferred<Voice>> {
        self.apply_volume(doc, self.state.volume);
        let muted = self.state.muted;
        for sound in Sound::ALL {
            self.with_source(sound, |backend| backend.set_muted(sound, muted));
        }
        self.reflect_switches(doc);

        if !self.state.ambient_enabled {
            return Vec::new();
        }
        self.play_logged(Sound::Ambient);
        self.synth.start()
    }

    /// Turns the ambient loop on or off. Returns the new setting.
    pub fn toggle_ambient(&mut self, doc: &mut impl Document) -> bool {
        self.state.ambient_enabled = !self.state.ambient_enabled;
        if self.state.ambient_enabled {
            self.play_logged(Sound::Ambient);
        } else {
            self.with_source(Sound::Ambient, |backend| backend.pause(Sound::Ambient));
        }
        reflect_switch(doc, AMBIENT_TOGGLE, AMBIENT_STATUS, self.state.ambient_enabled);
        reflect_play_music(doc, self.state.ambient_enabled);
        info!(enabled = self.state.ambient_enabled, "Ambient sound toggled");

        self.play_click_cue();
        self.state.ambient_enabled
    }

    /// Turns interface cues on or off. The click is played either way as feedback.
    pub fn toggle_sfx(&mut self, doc: &mut impl Document) -> bool {
        self.state.sfx_enabled = !self.state.sfx_enabled;
        reflect_switch(doc, SFX_TOGGLE, SFX_STATUS, self.state.sfx_enabled);
        info!(enabled = self.state.sfx_enabled, "Sound effects toggled");

        self.cue(Sound::Click);
        self.state.sfx_enabled
    }

    /// Sets the volume of every source, clamped to `0.0..=1.0`.
    ///
    /// Non-finite input is logged and rejected; the returned value is the applied volume.
    pub fn set_volume(&mut self, doc: &mut impl Document, volume: f32) -> Option<f32> {
        if !volume.is_finite() {
            warn!(volume, "Rejecting non-finite volume");
            return None;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.apply_volume(doc, volume);
        Some(volume)
    }

    /// Slider input in percent, as the range control reports it.
    pub fn set_volume_percent(&mut self, doc: &mut impl Document, raw: &str) -> Option<f32> {
        match raw.trim().parse::<f32>() {
            Ok(percent) => self.set_volume(doc, percent / 100.0),
            Err(err) => {
                warn!(raw, %err, "Ignoring unreadable volume slider value");
                None
            }
        }
    }

    pub fn play_hover_cue(&mut self) -> bool {
        self.state.sfx_enabled && self.cue(Sound::Hover)
    }

    pub fn play_click_cue(&mut self) -> bool {
        self.state.sfx_enabled && self.cue(Sound::Click)
    }

    /// Plays a cue requested by another slice.
    pub fn play(&mut self, cue: Cue) -> bool {
        match cue {
            Cue::Hover => self.play_hover_cue(),
            Cue::Click => self.play_click_cue(),
        }
    }

    /// Unmutes every source on the first user gesture. Later calls do nothing.
    pub fn unmute_on_interaction(&mut self) -> bool {
        if self.interacted {
            return false;
        }
        self.interacted = true;
        self.state.muted = false;
        for sound in Sound::ALL {
            self.with_source(sound, |backend| backend.set_muted(sound, false));
        }
        debug!("Audio unmuted after first interaction");
        true
    }

    /// The hero "forest melody" button. It mirrors the ambient switch, so this is the same
    /// toggle under another label.
    pub fn play_music(&mut self, doc: &mut impl Document) -> bool {
        self.toggle_ambient(doc)
    }

    /// Sounds a synth voice and schedules its next occurrence.
    ///
    /// The voice stays silent while the ambient loop is off or the page is still muted.
    pub fn synth_voice(&mut self, voice: Voice, rng: &mut impl Rng) -> Deferred<Voice> {
        if self.state.ambient_enabled && !self.state.muted {
            let tone = ToneSpec::for_voice(voice);
            if let Err(err) = self.backend.play_tone(&tone) {
                debug!(?voice, %err, "Synth tone rejected");
            }
        }
        self.synth.next(voice, rng)
    }

    fn apply_volume(&mut self, doc: &mut impl Document, volume: f32) {
        self.state.volume = volume;
        for sound in Sound::ALL {
            self.with_source(sound, |backend| backend.set_volume(sound, volume));
        }
        doc.set_value(VOLUME_SLIDER, &format!("{}", (volume * 100.0).round()));
    }

    fn reflect_switches(&self, doc: &mut impl Document) {
        reflect_switch(doc, AMBIENT_TOGGLE, AMBIENT_STATUS, self.state.ambient_enabled);
        reflect_switch(doc, SFX_TOGGLE, SFX_STATUS, self.state.sfx_enabled);
        reflect_play_music(doc, self.state.ambient_enabled);
    }

    /// Rewinds and plays a cue, regardless of the SFX switch.
    fn cue(&mut self, sound: Sound) -> bool {
        if !self.available.contains(&sound) {
            return false;
        }
        self.backend.rewind(sound);
        self.play_logged(sound)
    }

    fn play_logged(&mut self, sound: Sound) -> bool {
        if !self.available.contains(&sound) {
            debug!(%sound, "Skipping missing audio source");
            return false;
        }
        match self.backend.play(sound) {
            Ok(()) => true,
            Err(err) => {
                warn!(%sound, %err, "Playback prevented");
                false
            }
        }
    }

    fn with_source(&mut self, sound: Sound, f: impl FnOnce(&mut B)) {
        if self.available.contains(&sound) {
            f(&mut self.backend);
        }
    }
}

fn reflect_switch(doc: &mut impl Document, button: &str, status: &str, enabled: bool) {
    doc.set_class(button, ACTIVE_CLASS, enabled);
    doc.set_text(status, if enabled { "ON" } else { "OFF" });
}

fn reflect_play_music(doc: &mut impl Document, playing: bool) {
    let (icon, label) = if playing {
        ("fas fa-volume-up", "Pause Forest Melody")
    } else {
        ("fas fa-volume-mute", "Play Forest Melody")
    };
    doc.set_attribute(PLAY_MUSIC_ICON, "class", icon);
    doc.set_text(PLAY_MUSIC_LABEL, label);
}
