use folio_audio::synth::Voice;
use folio_audio::{AudioBackend, AudioController, MemoryBackend, Sound};
use folio_kernel::domain::config::{AudioConfig, SynthConfig};
use folio_kernel::dom::ids::ACTIVE_CLASS;
use folio_kernel::prelude::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn page() -> MemoryDocument {
    MemoryDocument::new(
        Element::new("body")
            .child(Element::new("button").id("ambient-toggle").child(Element::new("span").id("ambient-status")))
            .child(Element::new("button").id("sfx-toggle").child(Element::new("span").id("sfx-status")))
            .child(Element::new("input").id("volume-slider"))
            .child(
                Element::new("button")
                    .id("play-music")
                    .child(Element::new("i").id("play-music-icon"))
                    .child(Element::new("span").id("play-music-label")),
            ),
    )
}

fn started(backend: MemoryBackend) -> (MemoryDocument, AudioController<MemoryBackend>) {
    let mut doc = page();
    let mut audio = AudioController::new(backend, &AudioConfig::default());
    audio.start(&mut doc);
    (doc, audio)
}

fn source(audio: &AudioController<MemoryBackend>, sound: Sound) -> folio_audio::SourceState {
    *audio.backend().source(sound).unwrap()
}

#[test]
fn start_mutes_everything_and_plays_the_ambient_loop() {
    let (doc, audio) = started(MemoryBackend::new());

    for sound in Sound::ALL {
        let state = source(&audio, sound);
        assert!(state.muted);
        assert!((state.volume - 0.5).abs() < f32::EPSILON);
    }
    assert!(!source(&audio, Sound::Ambient).paused);
    assert_eq!(doc.value("volume-slider").as_deref(), Some("50"));
    assert_eq!(doc.text("ambient-status").as_deref(), Some("ON"));
    assert!(doc.has_class("sfx-toggle", ACTIVE_CLASS));
    assert_eq!(doc.text("play-music-label").as_deref(), Some("Pause Forest Melody"));
}

#[test]
fn start_schedules_the_synth_only_with_ambient_enabled() {
    let mut doc = page();
    let mut audio = AudioController::new(MemoryBackend::new(), &AudioConfig::default());
    let voices: Vec<_> = audio.start(&mut doc).into_iter().map(|d| d.action).collect();
    assert_eq!(voices, [Voice::Wind, Voice::Chirp]);

    let config = AudioConfig { ambient_enabled: false, ..AudioConfig::default() };
    let mut quiet = AudioController::new(MemoryBackend::new(), &config);
    assert!(quiet.start(&mut doc).is_empty());
    assert!(source(&quiet, Sound::Ambient).paused);
}

#[test]
fn autoplay_rejection_is_swallowed() {
    let (_, audio) = started(MemoryBackend::new().rejecting_playback());
    assert!(source(&audio, Sound::Ambient).paused);
    assert!(audio.state().ambient_enabled);
}

#[test]
fn first_interaction_unmutes_once() {
    let (_, mut audio) = started(MemoryBackend::new());

    assert!(audio.unmute_on_interaction());
    assert!(!audio.state().muted);
    for sound in Sound::ALL {
        assert!(!source(&audio, sound).muted);
    }

    audio.backend_mut().set_muted(Sound::Click, true);
    assert!(!audio.unmute_on_interaction());
    assert!(source(&audio, Sound::Click).muted);
}

#[test]
fn toggling_ambient_updates_the_switch_and_clicks() {
    let (mut doc, mut audio) = started(MemoryBackend::new());

    assert!(!audio.toggle_ambient(&mut doc));
    assert_eq!(doc.text("ambient-status").as_deref(), Some("OFF"));
    assert!(!doc.has_class("ambient-toggle", ACTIVE_CLASS));
    assert_eq!(source(&audio, Sound::Click).plays, 1);
    assert_eq!(source(&audio, Sound::Click).rewinds, 1);

    assert!(audio.toggle_ambient(&mut doc));
    assert_eq!(doc.text("ambient-status").as_deref(), Some("ON"));
}

#[test]
fn ambient_toggle_click_respects_the_sfx_switch() {
    let (mut doc, mut audio) = started(MemoryBackend::new());
    audio.toggle_sfx(&mut doc);
    let clicks = source(&audio, Sound::Click).plays;

    audio.toggle_ambient(&mut doc);

    assert_eq!(source(&audio, Sound::Click).plays, clicks);
}

#[test]
fn sfx_toggle_clicks_even_when_switching_off() {
    let (mut doc, mut audio) = started(MemoryBackend::new());

    assert!(!audio.toggle_sfx(&mut doc));

    assert_eq!(source(&audio, Sound::Click).plays, 1);
    assert_eq!(doc.text("sfx-status").as_deref(), Some("OFF"));
    assert!(!audio.play_hover_cue());
    assert!(!audio.play_click_cue());
    assert_eq!(source(&audio, Sound::Hover).plays, 0);
}

#[test]
fn cues_rewind_before_playing() {
    let (_, mut audio) = started(MemoryBackend::new());

    assert!(audio.play(Cue::Hover));
    assert!(audio.play(Cue::Hover));

    let hover = source(&audio, Sound::Hover);
    assert_eq!((hover.rewinds, hover.plays), (2, 2));
}

#[test]
fn volume_is_clamped_and_non_finite_input_rejected() {
    let (mut doc, mut audio) = started(MemoryBackend::new());

    assert_eq!(audio.set_volume(&mut doc, 1.7), Some(1.0));
    assert_eq!(doc.value("volume-slider").as_deref(), Some("100"));
    assert_eq!(audio.set_volume(&mut doc, -0.2), Some(0.0));

    assert_eq!(audio.set_volume(&mut doc, f32::NAN), None);
    assert_eq!(audio.set_volume(&mut doc, f32::INFINITY), None);
    assert!(audio.state().volume.abs() < f32::EPSILON);
}

#[test]
fn slider_input_is_read_in_percent() {
    let (mut doc, mut audio) = started(MemoryBackend::new());

    assert_eq!(audio.set_volume_percent(&mut doc, "25"), Some(0.25));
    assert_eq!(audio.set_volume_percent(&mut doc, "loud"), None);
    assert!((source(&audio, Sound::Hover).volume - 0.25).abs() < f32::EPSILON);
}

#[test]
fn missing_sources_become_no_ops() {
    let (mut doc, mut audio) = started(MemoryBackend::new().without(Sound::Click));

    assert!(!audio.play_click_cue());
    assert!(audio.play_hover_cue());
    audio.toggle_ambient(&mut doc);
    assert!(audio.backend().source(Sound::Click).is_none());
}

#[test]
fn play_music_relabels_the_button() {
    let (mut doc, mut audio) = started(MemoryBackend::new());

    assert!(!audio.play_music(&mut doc));
    assert_eq!(doc.text("play-music-label").as_deref(), Some("Play Forest Melody"));
    assert!(doc.has_class("play-music-icon", "fa-volume-mute"));

    assert!(audio.play_music(&mut doc));
    assert_eq!(doc.text("play-music").as_deref(), Some("Pause Forest Melody"));
    assert!(doc.has_class("play-music-icon", "fa-volume-up"));

    // the header switch drives the same label
    audio.toggle_ambient(&mut doc);
    assert_eq!(doc.text("play-music-label").as_deref(), Some("Play Forest Melody"));
}

#[test]
fn synth_voices_wait_for_unmute_and_ambient() {
    let mut rng = SmallRng::seed_from_u64(3);
    let (mut doc, mut audio) = started(MemoryBackend::new());

    audio.synth_voice(Voice::Wind, &mut rng);
    assert!(audio.backend().tones().is_empty());

    audio.unmute_on_interaction();
    let next = audio.synth_voice(Voice::Chirp, &mut rng);
    assert_eq!(next.action, Voice::Chirp);
    assert_eq!(audio.backend().tones().len(), 1);

    audio.toggle_ambient(&mut doc);
    audio.synth_voice(Voice::Wind, &mut rng);
    assert_eq!(audio.backend().tones().len(), 1);
}

#[test]
fn disabled_synth_schedules_nothing() {
    let mut doc = page();
    let config =
        AudioConfig { synth: SynthConfig { enabled: false, ..SynthConfig::default() }, ..AudioConfig::default() };
    let mut audio = AudioController::new(MemoryBackend::new(), &config);
    assert!(audio.start(&mut doc).is_empty());
}

proptest! {
    #[test]
    fn ambient_paused_state_tracks_the_switch(toggles in 1usize..10) {
        let (mut doc, mut audio) = started(MemoryBackend::new());
        let initial = audio.state().ambient_enabled;

        for i in 1..=toggles {
            let enabled = audio.toggle_ambient(&mut doc);
            prop_assert_eq!(source(&audio, Sound::Ambient).paused, !enabled);
            prop_assert_eq!(enabled, if i % 2 == 0 { initial } else { !initial });
        }
    }

    #[test]
    fn volume_in_range_reaches_every_source(volume in 0.0f32..=1.0) {
        let (mut doc, mut audio) = started(MemoryBackend::new());

        prop_assert_eq!(audio.set_volume(&mut doc, volume), Some(volume));
        for sound in Sound::ALL {
            prop_assert_eq!(source(&audio, sound).volume, volume);
        }
    }
}
