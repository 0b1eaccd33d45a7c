//! Procedural forest soundscape: wind swells and bird chirps.
//!
//! The synth only describes tones; the host renders them (Web Audio in the browser).

use folio_kernel::domain::config::SynthConfig;
use folio_kernel::schedule::Deferred;
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    Wind,
    Chirp,
}

/// A single sine tone with exponential frequency and gain ramps.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneSpec {
    pub voice: Voice,
    pub start_hz: f32,
    pub end_hz: f32,
    /// Time the frequency takes to reach `end_hz`.
    pub glide: Duration,
    pub start_gain: f32,
    /// Must stay above zero: exponential ramps cannot reach silence.
    pub end_gain: f32,
    pub duration: Duration,
}

impl ToneSpec {
    #[must_use]
    pub const fn wind() -> Self {
        Self {
            voice: Voice::Wind,
            start_hz: 80.0,
            end_hz: 120.0,
            glide: Duration::from_secs(5),
            start_gain: 0.05,
            end_gain: 0.01,
            duration: Duration::from_secs(5),
        }
    }

    #[must_use]
    pub const fn chirp() -> Self {
        Self {
            voice: Voice::Chirp,
            start_hz: 2000.0,
            end_hz: 3000.0,
            glide: Duration::from_millis(100),
            start_gain: 0.1,
            end_gain: 0.0001,
            duration: Duration::from_millis(200),
        }
    }

    #[must_use]
    pub const fn for_voice(voice: Voice) -> Self {
        match voice {
            Voice::Wind => Self::wind(),
            Voice::Chirp => Self::chirp(),
        }
    }
}

#[derive(Debug)]
pub struct ForestSynth {
    config: SynthConfig,
    running: bool,
}

impl ForestSynth {
    #[must_use]
    pub const fn new(config: SynthConfig) -> Self {
        Self { config, running: false }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Schedules the first wind swell and chirp. Does nothing when disabled or already running.
    pub fn start(&mut self) -> Vec<Deferred<Voice>> {
        if !self.config.enabled || self.running {
            return Vec::new();
        }
        self.running = true;
        vec![
            Deferred::after_ms(self.config.wind_start_ms, Voice::Wind),
            Deferred::after_ms(self.config.chirp_start_ms, Voice::Chirp),
        ]
    }

    /// When the voice should sound again.
    pub fn next(&self, voice: Voice, rng: &mut impl Rng) -> Deferred<Voice> {
        let millis = match voice {
            Voice::Wind => self.config.wind_interval_ms,
            Voice::Chirp => {
                let (min, max) = (self.config.chirp_min_ms, self.config.chirp_max_ms);
                if max > min { rng.random_range(min..max) } else { min }
            }
        };
        Deferred::after_ms(millis, voice)
    }
}
