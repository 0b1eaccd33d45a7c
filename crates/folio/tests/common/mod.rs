#![allow(dead_code)]

use folio::audio::MemoryBackend;
use folio::domain::config::SiteConfig;
use folio::domain::content::{Category, Content, Profile, Project, Skill, SocialLinks, SocialPlatform};
use folio::kernel::prelude::*;
use folio::{FollowUp, Portfolio};

pub const PAGES: [&str; 4] = ["home", "works", "about", "contact"];
pub const FILTERS: [&str; 5] = ["all", "art", "ui", "web", "game"];

pub type Session = Portfolio<MemoryDocument, MemoryBackend>;

pub fn content() -> Content {
    let project = |id, title: &str, category| Project {
        id,
        title: title.to_owned(),
        category,
        description: format!("{title} description"),
        tags: vec!["Anime".to_owned()],
        year: "2023".to_owned(),
    };
    Content {
        profile: Profile { name: "Jeje".to_owned(), title: "Artist".to_owned(), bio: String::new() },
        social: SocialLinks::default().with(SocialPlatform::Github, "https://github.com/Jujut1"),
        skills: vec![
            Skill { name: "Digital Illustration".to_owned(), level: 95 },
            Skill { name: "3D Modeling".to_owned(), level: 75 },
        ],
        projects: vec![
            project(1, "Forest Guardian Character", Category::Art),
            project(2, "Anime Streaming UI", Category::Ui),
            project(3, "Cyberpunk City Website", Category::Web),
            project(4, "RPG Game Assets", Category::Game),
            project(5, "Anime Studio Portfolio", Category::Web),
            project(6, "Manga Coloring Book App", Category::Ui),
        ],
    }
}

pub fn config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.content = content();
    config
}

/// The static page skeleton, as the web app renders it.
pub fn page() -> MemoryDocument {
    let nav = Element::new("nav").children(PAGES.map(|p| {
        Element::new("a").id(format!("nav-{p}")).class("nav-item").data("page", p)
    }));
    let filters = Element::new("div").children(FILTERS.map(|f| {
        Element::new("button").id(format!("filter-{f}")).class("filter-btn").data("filter", f)
    }));
    let socials = Element::new("div").children(["twitter", "github"].map(|p| {
        Element::new("a").id(format!("social-{p}")).class("social-link").data("platform", p)
    }));

    MemoryDocument::new(
        Element::new("body")
            .child(Element::new("div").id("floating-leaves"))
            .child(Element::new("div").id("fireflies"))
            .child(
                Element::new("button")
                    .id("theme-btn")
                    .child(Element::new("i").id("theme-icon"))
                    .child(Element::new("span").id("theme-text")),
            )
            .child(
                Element::new("div")
                    .child(Element::new("button").id("ambient-toggle").child(Element::new("span").id("ambient-status")))
                    .child(Element::new("button").id("sfx-toggle").child(Element::new("span").id("sfx-status")))
                    .child(Element::new("input").id("volume-slider")),
            )
            .child(nav)
            .child(
                Element::new("section")
                    .id("home")
                    .class("page")
                    .child(Element::new("span").id("typed-name"))
                    .child(Element::new("span").id("name-cursor"))
                    .child(
                        Element::new("button")
                            .id("play-music")
                            .child(Element::new("i").id("play-music-icon"))
                            .child(Element::new("span").id("play-music-label")),
                    ),
            )
            .child(
                Element::new("section")
                    .id("works")
                    .class("page")
                    .child(filters)
                    .child(Element::new("div").id("portfolio-grid")),
            )
            .child(Element::new("section").id("about").class("page").child(Element::new("div").id("skill-bars")))
            .child(
                Element::new("section").id("contact").class("page").child(socials).child(
                    Element::new("form")
                        .id("message-form")
                        .child(Element::new("input").id("sender-name"))
                        .child(Element::new("input").id("sender-email"))
                        .child(Element::new("input").id("message-subject"))
                        .child(Element::new("textarea").id("message-content")),
                ),
            )
            .child(Element::new("footer").child(Element::new("span").id("current-year"))),
    )
}

pub fn session() -> Session {
    Portfolio::new(page(), MemoryBackend::new(), config(), 7).unwrap()
}

/// A started session whose start-up follow-ups (except the synth) have all run.
pub fn started() -> Session {
    let mut session = session();
    let follow_ups: Vec<_> =
        session.start(2026).into_iter().filter(|d| !matches!(d.action, FollowUp::Synth(_))).collect();
    session.settle(follow_ups, 100);
    session
}

pub fn visible_cards(session: &Session) -> Vec<String> {
    session
        .document()
        .ids_with_class("project-card")
        .into_iter()
        .filter(|id| session.document().style(id, "display").as_deref() != Some("none"))
        .collect()
}
