//! Well-known element ids and classes of the page skeleton.

pub const PORTFOLIO_GRID: &str = "portfolio-grid";
pub const SKILL_BARS: &str = "skill-bars";
pub const TYPED_NAME: &str = "typed-name";
pub const NAME_CURSOR: &str = "name-cursor";
pub const CURRENT_YEAR: &str = "current-year";
pub const PROFILE_TITLE: &str = "profile-title";
pub const PROFILE_BIO: &str = "profile-bio";
pub const FLOATING_LEAVES: &str = "floating-leaves";
pub const FIREFLIES: &str = "fireflies";
pub const EXPLORE_BUTTON: &str = "explore-btn";

pub const AMBIENT_TOGGLE: &str = "ambient-toggle";
pub const AMBIENT_STATUS: &str = "ambient-status";
pub const SFX_TOGGLE: &str = "sfx-toggle";
pub const SFX_STATUS: &str = "sfx-status";
pub const VOLUME_SLIDER: &str = "volume-slider";
pub const PLAY_MUSIC: &str = "play-music";
pub const PLAY_MUSIC_ICON: &str = "play-music-icon";
pub const PLAY_MUSIC_LABEL: &str = "play-music-label";

pub const THEME_BUTTON: &str = "theme-btn";
pub const THEME_ICON: &str = "theme-icon";
pub const THEME_TEXT: &str = "theme-text";

pub const MESSAGE_FORM: &str = "message-form";
pub const SENDER_NAME: &str = "sender-name";
pub const SENDER_EMAIL: &str = "sender-email";
pub const MESSAGE_SUBJECT: &str = "message-subject";
pub const MESSAGE_CONTENT: &str = "message-content";
pub const CLEAR_FORM: &str = "clear-form";
pub const MESSAGE_CONFIRMATION: &str = "message-confirmation";
pub const CLOSE_CONFIRMATION: &str = "close-confirmation";

pub const EASTER_EGG: &str = "easter-egg";

/// Class carried by every page section.
pub const PAGE_CLASS: &str = "page";
pub const NAV_ITEM_CLASS: &str = "nav-item";
pub const FILTER_BUTTON_CLASS: &str = "filter-btn";
pub const PROJECT_CARD_CLASS: &str = "project-card";
pub const SKILL_FILL_CLASS: &str = "skill-fill";
pub const SOCIAL_LINK_CLASS: &str = "social-link";
pub const LEAF_CLASS: &str = "leaf";
pub const FIREFLY_CLASS: &str = "firefly";
pub const ACTIVE_CLASS: &str = "active";
pub const NIGHT_MODE_CLASS: &str = "night-mode";
pub const TOOL_ITEM_CLASS: &str = "tool-item";
pub const STAT_CARD_CLASS: &str = "stat-card";

/// Selector for elements that answer the pointer entering them with the hover cue.
pub const HOVER_TARGETS: &str = "button, .nav-item, .filter-btn, .social-link, .project-card, .tool-item, .stat-card";
