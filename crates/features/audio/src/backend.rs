use crate::error::AudioError;
use crate::synth::ToneSpec;
use std::collections::BTreeMap;
use std::fmt;

/// The three audio slots of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sound {
    Ambient,
    Hover,
    Click,
}

impl Sound {
    pub const ALL: [Self; 3] = [Self::Ambient, Self::Hover, Self::Click];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ambient => "ambient",
            Self::Hover => "hover",
            Self::Click => "click",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playback capability the audio controller drives.
pub trait AudioBackend {
    fn has_source(&self, sound: Sound) -> bool;

    /// Starts (or resumes) playback.
    ///
    /// # Errors
    /// Returns [`AudioError::Playback`] when the host refuses to play.
    fn play(&mut self, sound: Sound) -> Result<(), AudioError>;

    fn pause(&mut self, sound: Sound);

    /// Moves the playhead back to the start.
    fn rewind(&mut self, sound: Sound);

    fn set_volume(&mut self, sound: Sound, volume: f32);

    fn set_muted(&mut self, sound: Sound, muted: bool);

    /// Plays a one-off synthesised tone.
    ///
    /// # Errors
    /// Returns an error when the host has no synthesiser or refuses to start it.
    fn play_tone(&mut self, tone: &ToneSpec) -> Result<(), AudioError>;
}

/// Observable state of one source in a [`MemoryBackend`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceState {
    pub paused: bool,
    pub volume: f32,
    pub muted: bool,
    /// Number of successful `play` calls.
    pub plays: usize,
    pub rewinds: usize,
}

impl Default for SourceState {
    fn default() -> Self {
        Self { paused: true, volume: 1.0, muted: false, plays: 0, rewinds: 0 }
    }
}

/// In-memory backend recording everything it is asked to do.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    sources: BTreeMap<Sound, SourceState>,
    reject_playback: bool,
    tones: Vec<ToneSpec>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self {
            sources: Sound::ALL.into_iter().map(|s| (s, SourceState::default())).collect(),
            reject_playback: false,
            tones: Vec::new(),
        }
    }
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops a slot, as if the page had no such `<audio>` element.
    #[must_use]
    pub fn without(mut self, sound: Sound) -> Self {
        self.sources.remove(&sound);
        self
    }

    /// Refuses every `play` call, like a browser blocking autoplay.
    #[must_use]
    pub const fn rejecting_playback(mut self) -> Self {
        self.reject_playback = true;
        self
    }

    pub const fn set_rejecting(&mut self, reject: bool) {
        self.reject_playback = reject;
    }

    #[must_use]
    pub fn source(&self, sound: Sound) -> Option<&SourceState> {
        self.sources.get(&sound)
    }

    #[must_use]
    pub fn tones(&self) -> &[ToneSpec] {
        &self.tones
    }

    fn slot(&mut self, sound: Sound) -> Result<&mut SourceState, AudioError> {
        self.sources.get_mut(&sound).ok_or_else(|| AudioError::MissingSource {
            message: sound.as_str().into(),
            context: None,
        })
    }
}

impl AudioBackend for MemoryBackend {
    fn has_source(&self, sound: Sound) -> bool {
        self.sources.contains_key(&sound)
    }

    fn play(&mut self, sound: Sound) -> Result<(), AudioError> {
        let reject = self.reject_playback;
        let slot = self.slot(sound)?;
        if reject {
            return Err(AudioError::Playback {
                message: "play() request was not allowed".into(),
                context: Some(sound.as_str().into()),
            });
        }
        slot.paused = false;
        slot.plays += 1;
        Ok(())
    }

    fn pause(&mut self, sound: Sound) {
        if let Ok(slot) = self.slot(sound) {
            slot.paused = true;
        }
    }

    fn rewind(&mut self, sound: Sound) {
        if let Ok(slot) = self.slot(sound) {
            slot.rewinds += 1;
        }
    }

    fn set_volume(&mut self, sound: Sound, volume: f32) {
        if let Ok(slot) = self.slot(sound) {
            slot.volume = volume;
        }
    }

    fn set_muted(&mut self, sound: Sound, muted: bool) {
        if let Ok(slot) = self.slot(sound) {
            slot.muted = muted;
        }
    }

    fn play_tone(&mut self, tone: &ToneSpec) -> Result<(), AudioError> {
        if self.reject_playback {
            return Err(AudioError::Playback { message: "audio context suspended".into(), context: None });
        }
        self.tones.push(tone.clone());
        Ok(())
    }
}
