mod common;

use common::{FILTERS, PAGES, page, session, started, visible_cards};
use folio::audio::{MemoryBackend, Sound};
use folio::domain::config::SiteConfig;
use folio::domain::content::{Category, Project};
use folio::kernel::dom::ids::ACTIVE_CLASS;
use folio::kernel::prelude::*;
use folio::{FollowUp, Portfolio, PortfolioError};
use proptest::prelude::*;

#[test]
fn start_renders_content_and_schedules_follow_ups() {
    let mut session = session();
    let follow_ups = session.start(2026);

    let doc = session.document();
    assert_eq!(doc.ids_with_class("project-card").len(), 6);
    assert_eq!(doc.ids_with_class("skill-fill").len(), 2);
    assert_eq!(doc.text("current-year").as_deref(), Some("2026"));
    assert_eq!(doc.attribute("social-github", "href").as_deref(), Some("https://github.com/Jujut1"));
    assert_eq!(doc.ids_with_class("leaf").len(), 25);
    assert!(doc.has_class("home", ACTIVE_CLASS));
    assert_eq!(doc.title(), "Anime Portfolio | Jeje");
    // the typewriter clears the name before typing it
    assert_eq!(doc.text("typed-name").as_deref(), Some(""));

    let kinds: Vec<_> = follow_ups.iter().map(|d| &d.action).collect();
    assert!(kinds.contains(&&FollowUp::ArmSkillReveal));
    assert!(kinds.iter().any(|a| matches!(a, FollowUp::RevealPage(_))));
    assert!(kinds.iter().any(|a| matches!(a, FollowUp::Typing(_))));
    assert!(kinds.iter().any(|a| matches!(a, FollowUp::Synth(_))));
}

#[test]
fn settling_start_up_types_the_name_and_reveals_home() {
    let session = started();
    let doc = session.document();

    assert_eq!(doc.text("typed-name").as_deref(), Some("Jeje"));
    assert_eq!(doc.style("home", "opacity").as_deref(), Some("1"));
    assert!(session.skill_reveal_observing());
}

#[test]
fn invalid_content_is_rejected() {
    let mut config = common::config();
    let duplicate = config.content.projects[0].clone();
    config.content.projects.push(duplicate);

    let err = Portfolio::new(page(), MemoryBackend::new(), config, 1).unwrap_err();
    assert!(matches!(err, PortfolioError::Content { .. }));
}

#[test]
fn pages_without_sections_are_rejected() {
    let doc = MemoryDocument::new(Element::new("body"));
    let err = Portfolio::new(doc, MemoryBackend::new(), SiteConfig::default(), 1).unwrap_err();
    assert!(err.to_string().starts_with("Navigation setup failed"));
}

#[test]
fn navigation_clicks_once_audio_is_unmuted() {
    let mut session = started();
    session.on_document_click();

    let follow_ups = session.on_nav_click("about");
    session.settle(follow_ups, 10);

    let doc = session.document();
    assert!(doc.has_class("about", ACTIVE_CLASS));
    assert_eq!(doc.style("about", "opacity").as_deref(), Some("1"));
    assert!(doc.has_class("nav-about", ACTIVE_CLASS));
    assert_eq!(session.audio().backend().source(Sound::Click).unwrap().plays, 1);
    assert!(!session.audio().backend().source(Sound::Click).unwrap().muted);
}

#[test]
fn unknown_navigation_targets_change_nothing() {
    let mut session = started();
    session.on_nav_click("works");

    assert!(session.on_nav_click("blog").is_empty());

    assert_eq!(session.navigation().current_page(), "works");
    assert_eq!(session.document().location_hash(), "works");
}

#[test]
fn explore_jumps_to_the_works_section() {
    let mut session = started();
    session.on_explore();

    assert_eq!(session.navigation().current_page(), "works");
    assert_eq!(session.document().scroll_requests().len(), 2);
}

#[test]
fn hash_changes_drive_navigation() {
    let mut session = started();
    session.document_mut().set_hash_externally("contact");

    assert_eq!(session.on_hash_change().len(), 1);
    assert_eq!(session.navigation().current_page(), "contact");
    assert!(session.on_hash_change().is_empty());
}

#[test]
fn filtering_settles_to_the_matching_cards() {
    let mut session = started();

    let follow_ups = session.on_filter_click("web");
    session.settle(follow_ups, 20);

    assert_eq!(visible_cards(&session), ["project-3", "project-5"]);
    assert!(session.document().has_class("filter-web", ACTIVE_CLASS));
    assert!(session.on_filter_click("music").is_empty());
}

#[test]
fn ambient_toggle_round_trips() {
    let mut session = started();
    let initial = session.audio().state().ambient_enabled;

    for _ in 0..2 {
        let enabled = session.on_ambient_toggle();
        assert_eq!(session.audio().backend().source(Sound::Ambient).unwrap().paused, !enabled);
    }

    assert_eq!(session.audio().state().ambient_enabled, initial);
}

#[test]
fn volume_slider_reaches_every_source() {
    let mut session = started();

    assert_eq!(session.on_volume_input("40"), Some(0.4));

    for sound in Sound::ALL {
        assert!((session.audio().backend().source(sound).unwrap().volume - 0.4).abs() < f32::EPSILON);
    }
    assert_eq!(session.document().value("volume-slider").as_deref(), Some("40"));
}

#[test]
fn key_sequence_plays_exactly_one_easter_egg() {
    let mut session = started();
    let keys = [
        "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
        "ArrowRight", "b", "a",
    ];

    let follow_ups: Vec<_> = keys.iter().flat_map(|k| session.on_key(k)).collect();

    assert_eq!(follow_ups.len(), 1);
    assert_eq!(session.easter_egg().passes(), 1);
    assert_eq!(session.document().ids_with_class("easter-egg").len(), 1);

    session.settle(follow_ups, 1);
    assert!(session.document().ids_with_class("easter-egg").is_empty());

    // the window was cleared: one more "a" does not retrigger
    assert!(session.on_key("a").is_empty());
}

#[test]
fn contact_form_round_trip() {
    let mut session = started();
    let doc = session.document_mut();
    doc.set_value("sender-name", "Aiko");
    doc.set_value("sender-email", "a@x.com");
    doc.set_value("message-subject", "Hi");
    doc.set_value("message-content", "Hello");

    session.on_message_submit();
    let overlay = session.document().text("message-confirmation").unwrap();
    assert!(overlay.contains("Thank you, Aiko."));
    assert!(overlay.contains("a@x.com soon!"));

    session.on_close_confirmation();
    let doc = session.document();
    assert!(!doc.contains("message-confirmation"));
    for field in ["sender-name", "sender-email", "message-subject", "message-content"] {
        assert_eq!(doc.value(field).as_deref(), Some(""));
    }
}

#[test]
fn skill_bars_replay_once() {
    let mut session = started();

    let restores = session.on_about_visibility(0.75);
    assert_eq!(restores.len(), 2);
    assert_eq!(session.document().style("skill-fill-0", "width").as_deref(), Some("0"));
    assert!(!session.skill_reveal_observing());

    session.settle(restores, 10);
    assert_eq!(session.document().style("skill-fill-0", "width").as_deref(), Some("95%"));
    assert!(session.on_about_visibility(1.0).is_empty());
}

#[test]
fn theme_toggle_switches_to_night() {
    let mut session = started();
    session.on_theme_toggle();

    assert!(session.document().body_has_class("night-mode"));
    assert_eq!(session.document().text("theme-text").as_deref(), Some("Day"));
}

#[test]
fn resize_rebuilds_the_particles() {
    let mut session = started();
    *session.document_mut() = page().with_viewport(500.0, 500.0);

    session.on_resize();
    session.on_pointer_move(250.0, 250.0);

    assert_eq!(session.document().ids_with_class("leaf").len(), 10);
    assert_eq!(session.document().style("leaf-0", "transform").as_deref(), Some("translate(0.00px, 0.00px)"));
}

#[test]
fn synth_reschedules_itself() {
    let mut session = started();
    session.on_document_click();

    let next = session.complete(FollowUp::Synth(folio::audio::synth::Voice::Wind));

    assert_eq!(next.len(), 1);
    assert_eq!(session.audio().backend().tones().len(), 1);
}

#[test]
fn added_projects_show_up_under_their_filter() {
    let mut config = common::config();
    config.content.projects.push(Project {
        id: 7,
        title: "Spirit Quest".to_owned(),
        category: Category::Game,
        description: String::new(),
        tags: Vec::new(),
        year: "2024".to_owned(),
    });
    let mut session = Portfolio::new(page(), MemoryBackend::new(), config, 3).unwrap();
    session.start(2026);

    let follow_ups = session.on_filter_click("game");
    session.settle(follow_ups, 20);

    assert_eq!(visible_cards(&session), ["project-4", "project-7"]);
}

proptest! {
    #[test]
    fn every_known_page_ends_up_alone_and_in_the_fragment(index in 0..PAGES.len()) {
        let mut session = started();
        let page = PAGES[index];

        let follow_ups = session.on_nav_click(page);
        session.settle(follow_ups, 10);

        let active: Vec<_> = PAGES.iter().filter(|p| session.document().has_class(p, ACTIVE_CLASS)).collect();
        prop_assert_eq!(active, vec![&page]);
        prop_assert_eq!(session.document().location_hash(), page);
    }

    #[test]
    fn every_filter_settles_to_its_cards(index in 0..FILTERS.len()) {
        let mut session = started();
        let filter = FILTERS[index];

        let follow_ups = session.on_filter_click(filter);
        session.settle(follow_ups, 20);

        let expected: Vec<String> = common::content()
            .projects
            .iter()
            .filter(|p| filter == "all" || p.category.as_str() == filter)
            .map(|p| format!("project-{}", p.id))
            .collect();
        prop_assert_eq!(visible_cards(&session), expected);
    }
}
