use folio_domain::config::{
    AudioConfig, EffectsConfig, GalleryConfig, NavigationConfig, SiteConfig, UnknownPagePolicy,
};
use folio_domain::content::{Category, SocialPlatform};
use folio_domain::theme::Theme;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let nav = NavigationConfig::default();
    assert_eq!(nav.default_page, "home");
    assert_eq!(nav.unknown_page, UnknownPagePolicy::Ignore);

    let audio = AudioConfig::default();
    assert!((audio.volume - 0.5).abs() < f32::EPSILON);
    assert!(audio.ambient_enabled && audio.sfx_enabled && audio.start_muted);
    assert_eq!(audio.sources.ambient, "ambient-sound");

    let gallery = GalleryConfig::default();
    assert_eq!(gallery.hide_delay_ms, 300);

    let effects = EffectsConfig::default();
    assert_eq!(effects.key_sequence.len(), 10);
    assert_eq!(effects.key_sequence.last().map(String::as_str), Some("a"));
    assert_eq!(effects.firefly_count, 15);
}

#[test]
fn site_config_deserializes() {
    let raw = json!({
        "content": {
            "profile": { "name": "Aiko", "title": "Illustrator" },
            "social": { "github": "https://github.com/aiko" },
            "skills": [{ "name": "Animation", "level": 80 }],
            "projects": [{
                "id": 1,
                "title": "Forest Guardian",
                "category": "art",
                "description": "Character design",
                "tags": ["Anime"],
                "year": "2023"
            }]
        },
        "navigation": { "unknown_page": "fallback" },
        "theme": { "initial": "night" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.content.profile.name, "Aiko");
    assert_eq!(cfg.content.profile.bio, "");
    assert_eq!(cfg.content.social.url(SocialPlatform::Github), Some("https://github.com/aiko"));
    assert_eq!(cfg.content.social.url(SocialPlatform::Twitter), None);
    assert_eq!(cfg.content.projects[0].category, Category::Art);
    assert_eq!(cfg.navigation.unknown_page, UnknownPagePolicy::Fallback);
    assert_eq!(cfg.navigation.default_page, "home");
    assert_eq!(cfg.theme.initial, Theme::Night);
}

#[test]
fn clones_share_until_written() {
    let base = SiteConfig::default();
    let mut tweaked = base.clone();
    tweaked.gallery.hide_delay_ms = 10;

    assert_eq!(base.gallery.hide_delay_ms, 300);
    assert_eq!(tweaked.gallery.hide_delay_ms, 10);
}
