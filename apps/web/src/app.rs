//! The static page skeleton.
//!
//! Dioxus renders the markup once. From then on the session owns the page: it fills the
//! containers and flips classes and styles through [`crate::document::BrowserDocument`].
//! Components never re-render, so the two never fight over a node.

use crate::runtime::{self, Session, dispatch, with_session};
use dioxus::prelude::*;
use folio::domain::config::SiteConfig;
use folio::domain::constants::{ABOUT, ALL, ART, CONTACT, GAME, HOME, UI, WEB, WORKS};
use folio::domain::content::SocialPlatform;
use folio::kernel::dom::ids;
use tracing::error;

const PAGES: [(&str, &str, &str); 4] = [
    (HOME, "Home", "fas fa-home"),
    (WORKS, "Works", "fas fa-palette"),
    (ABOUT, "About", "fas fa-user"),
    (CONTACT, "Contact", "fas fa-envelope"),
];

const FILTERS: [(&str, &str); 5] = [(ALL, "All"), (ART, "Art"), (UI, "UI"), (WEB, "Web"), (GAME, "Game")];

const STYLES: &str = r"
.page { display: none; opacity: 0; transition: opacity 0.5s ease; }
.page.active { display: block; }
.project-card { transition: opacity 0.3s ease, transform 0.3s ease; }
.leaf, .firefly { position: fixed; pointer-events: none; }
.leaf { top: -10vh; border-radius: 0 60% 0 60%; opacity: 0.7; }
.firefly { border-radius: 50%; background: #f4e98c; box-shadow: 0 0 6px 2px rgba(244, 233, 140, 0.6); }
.easter-egg { position: fixed; inset: 0; pointer-events: none; z-index: 1000; }
.easter-egg-glyph { position: absolute; bottom: -2rem; font-size: 2rem; opacity: 0; }
.message-confirmation { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; z-index: 900; }
@keyframes float-up { 0% { transform: translateY(0); opacity: 1; } 100% { transform: translateY(-110vh); opacity: 0; } }
@keyframes blink { 0%, 100% { opacity: 1; } 50% { opacity: 0; } }
@keyframes fall { from { top: -10vh; rotate: 0deg; } to { top: 110vh; rotate: 360deg; } }
@keyframes glow { from { scale: 0.6; filter: brightness(0.7); } to { scale: 1.4; filter: brightness(1.3); } }
@keyframes pageFadeIn { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
";

#[component]
pub fn App() -> Element {
    let config = use_context::<SiteConfig>();
    let name = config.content.profile.name.clone();

    use_effect(move || {
        if let Err(err) = runtime::boot(config.clone()) {
            error!(%err, "Failed to start the portfolio");
        }
    });

    rsx! {
        style { {STYLES} }
        div { id: ids::FLOATING_LEAVES, class: "floating-leaves" }
        div { id: ids::FIREFLIES, class: "fireflies" }
        audio { id: "ambient-sound", src: "assets/forest-ambient.mp3", r#loop: true, preload: "auto" }
        audio { id: "hover-sound", src: "assets/hover.mp3", preload: "auto" }
        audio { id: "click-sound", src: "assets/click.mp3", preload: "auto" }
        Header { name: name.clone() }
        main { class: "content",
            HomePage {}
            WorksPage {}
            AboutPage {}
            ContactPage {}
        }
        footer { class: "site-footer",
            p { "© " span { id: ids::CURRENT_YEAR } " {name}" }
        }
    }
}

#[component]
fn Header(name: String) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "logo", "{name}" }
            nav { class: "main-nav",
                for (page, label, icon) in PAGES {
                    a {
                        id: "nav-{page}",
                        class: ids::NAV_ITEM_CLASS,
                        href: "#{page}",
                        "data-page": page,
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            dispatch(|session| session.on_nav_click(page));
                        },
                        i { class: icon }
                        " {label}"
                    }
                }
            }
            div { class: "controls",
                button {
                    id: ids::THEME_BUTTON,
                    class: "theme-toggle",
                    onclick: move |_| {
                        with_session(Session::on_theme_toggle);
                    },
                    i { id: ids::THEME_ICON }
                    span { id: ids::THEME_TEXT }
                }
                button {
                    id: ids::AMBIENT_TOGGLE,
                    class: "sound-toggle",
                    title: "Ambient sound",
                    onclick: move |_| {
                        with_session(Session::on_ambient_toggle);
                    },
                    i { class: "fas fa-tree" }
                    span { id: ids::AMBIENT_STATUS }
                }
                button {
                    id: ids::SFX_TOGGLE,
                    class: "sound-toggle",
                    title: "Sound effects",
                    onclick: move |_| {
                        with_session(Session::on_sfx_toggle);
                    },
                    i { class: "fas fa-music" }
                    span { id: ids::SFX_STATUS }
                }
                input {
                    id: ids::VOLUME_SLIDER,
                    r#type: "range",
                    min: "0",
                    max: "100",
                    oninput: move |evt: FormEvent| {
                        let raw = evt.value();
                        with_session(|session| session.on_volume_input(&raw));
                    },
                }
            }
        }
    }
}

#[component]
fn HomePage() -> Element {
    rsx! {
        section { id: HOME, class: ids::PAGE_CLASS,
            div { class: "hero",
                h1 { class: "hero-name",
                    span { id: ids::TYPED_NAME }
                    span { id: ids::NAME_CURSOR, class: "cursor", "|" }
                }
                p { id: ids::PROFILE_TITLE, class: "hero-title" }
                p { id: ids::PROFILE_BIO, class: "hero-bio" }
                div { class: "hero-actions",
                    button {
                        id: ids::EXPLORE_BUTTON,
                        class: "btn primary",
                        onclick: move |_| dispatch(Session::on_explore),
                        "Explore My Works"
                    }
                    button {
                        id: ids::PLAY_MUSIC,
                        class: "btn secondary",
                        onclick: move |_| {
                            with_session(Session::on_play_music);
                        },
                        i { id: ids::PLAY_MUSIC_ICON }
                        " "
                        span { id: ids::PLAY_MUSIC_LABEL }
                    }
                }
            }
        }
    }
}

#[component]
fn WorksPage() -> Element {
    rsx! {
        section { id: WORKS, class: ids::PAGE_CLASS,
            h2 { class: "section-title", "My Works" }
            div { class: "filters",
                for (filter, label) in FILTERS {
                    button {
                        id: "filter-{filter}",
                        class: if filter == ALL { "filter-btn active" } else { "filter-btn" },
                        "data-filter": filter,
                        onclick: move |_| dispatch(|session| session.on_filter_click(filter)),
                        "{label}"
                    }
                }
            }
            div { id: ids::PORTFOLIO_GRID, class: "portfolio-grid" }
        }
    }
}

#[component]
fn AboutPage() -> Element {
    rsx! {
        section { id: ABOUT, class: ids::PAGE_CLASS,
            h2 { class: "section-title", "About Me" }
            div { id: ids::SKILL_BARS, class: "skill-bars" }
        }
    }
}

#[component]
fn ContactPage() -> Element {
    rsx! {
        section { id: CONTACT, class: ids::PAGE_CLASS,
            h2 { class: "section-title", "Contact" }
            div { class: "social-links",
                for platform in SocialPlatform::ALL {
                    a {
                        id: "social-{platform}",
                        class: ids::SOCIAL_LINK_CLASS,
                        href: "#",
                        "data-platform": platform.as_str(),
                        i { class: "fab fa-{platform}" }
                    }
                }
            }
            form {
                id: ids::MESSAGE_FORM,
                class: "message-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    with_session(Session::on_message_submit);
                },
                input { id: ids::SENDER_NAME, r#type: "text", placeholder: "Your name", required: true }
                input { id: ids::SENDER_EMAIL, r#type: "email", placeholder: "Your email", required: true }
                input { id: ids::MESSAGE_SUBJECT, r#type: "text", placeholder: "Subject" }
                textarea { id: ids::MESSAGE_CONTENT, placeholder: "Your message", required: true }
                div { class: "form-actions",
                    button { r#type: "submit", class: "btn primary", "Send Message" }
                    button {
                        id: ids::CLEAR_FORM,
                        r#type: "button",
                        class: "btn secondary",
                        onclick: move |_| {
                            with_session(Session::on_clear_form);
                        },
                        "Clear"
                    }
                }
            }
        }
    }
}
