//! [`AudioBackend`] over `<audio>` elements, with Web Audio for synthesised tones.

use crate::error::js_message;
use folio::audio::synth::ToneSpec;
use folio::audio::{AudioBackend, AudioError, Sound};
use folio::domain::config::AudioSources;
use std::collections::BTreeMap;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{AudioContext, AudioScheduledSourceNode, HtmlAudioElement, OscillatorType};

#[derive(Debug, Default)]
pub struct HtmlAudioBackend {
    sources: BTreeMap<Sound, HtmlAudioElement>,
    /// Created on the first tone; browsers keep it suspended until a user gesture.
    context: Option<AudioContext>,
}

impl HtmlAudioBackend {
    /// Looks up the three `<audio>` slots. Missing slots are left out.
    #[must_use]
    pub fn new(document: &web_sys::Document, ids: &AudioSources) -> Self {
        let sources = Sound::ALL
            .into_iter()
            .filter_map(|sound| {
                let id = match sound {
                    Sound::Ambient => &ids.ambient,
                    Sound::Hover => &ids.hover,
                    Sound::Click => &ids.click,
                };
                let element = document.get_element_by_id(id)?.dyn_into::<HtmlAudioElement>().ok()?;
                Some((sound, element))
            })
            .collect();

        Self { sources, context: None }
    }

    fn context(&mut self) -> Result<&AudioContext, AudioError> {
        if self.context.is_none() {
            let context = AudioContext::new().map_err(|err| playback(&err, "Failed to create audio context"))?;
            self.context = Some(context);
        }
        self.context.as_ref().ok_or_else(|| AudioError::from("audio context vanished"))
    }

    fn schedule_tone(context: &AudioContext, tone: &ToneSpec) -> Result<(), JsValue> {
        let now = context.current_time();
        let end = now + tone.duration.as_secs_f64();

        let oscillator = context.create_oscillator()?;
        oscillator.set_type(OscillatorType::Sine);
        let frequency = oscillator.frequency();
        frequency.set_value_at_time(tone.start_hz, now)?;
        frequency.exponential_ramp_to_value_at_time(tone.end_hz, now + tone.glide.as_secs_f64())?;

        let gain = context.create_gain()?;
        let volume = gain.gain();
        volume.set_value_at_time(tone.start_gain, now)?;
        volume.exponential_ramp_to_value_at_time(tone.end_gain, end)?;

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&context.destination())?;

        let source: &AudioScheduledSourceNode = &oscillator;
        source.start()?;
        source.stop_with_when(end)
    }
}

fn playback(err: &JsValue, context: &'static str) -> AudioError {
    AudioError::Playback { message: js_message(err).into(), context: Some(context.into()) }
}

impl AudioBackend for HtmlAudioBackend {
    fn has_source(&self, sound: Sound) -> bool {
        self.sources.contains_key(&sound)
    }

    fn play(&mut self, sound: Sound) -> Result<(), AudioError> {
        let Some(element) = self.sources.get(&sound) else {
            return Err(AudioError::MissingSource { message: sound.as_str().into(), context: None });
        };
        let promise = element.play().map_err(|err| playback(&err, "play() threw"))?;

        // Autoplay refusals arrive asynchronously.
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                warn!(%sound, error = %js_message(&err), "Playback rejected");
            }
        });
        Ok(())
    }

    fn pause(&mut self, sound: Sound) {
        let Some(element) = self.sources.get(&sound) else {
            return;
        };
        if let Err(err) = element.pause() {
            debug!(%sound, error = %js_message(&err), "Failed to pause");
        }
    }

    fn rewind(&mut self, sound: Sound) {
        if let Some(element) = self.sources.get(&sound) {
            element.set_current_time(0.0);
        }
    }

    fn set_volume(&mut self, sound: Sound, volume: f32) {
        if let Some(element) = self.sources.get(&sound) {
            element.set_volume(f64::from(volume));
        }
    }

    fn set_muted(&mut self, sound: Sound, muted: bool) {
        if let Some(element) = self.sources.get(&sound) {
            element.set_muted(muted);
        }
    }

    fn play_tone(&mut self, tone: &ToneSpec) -> Result<(), AudioError> {
        let context = self.context()?;
        Self::schedule_tone(context, tone).map_err(|err| playback(&err, "Failed to schedule tone"))
    }
}
