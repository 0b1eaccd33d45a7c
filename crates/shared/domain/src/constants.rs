//! Identifiers shared between configuration, markup attributes and location fragments.

/// Filter value selecting every project category.
pub const ALL: &str = "all";

pub const ART: &str = "art";
pub const UI: &str = "ui";
pub const WEB: &str = "web";
pub const GAME: &str = "game";

pub const HOME: &str = "home";
pub const WORKS: &str = "works";
pub const ABOUT: &str = "about";
pub const CONTACT: &str = "contact";

pub const TWITTER: &str = "twitter";
pub const INSTAGRAM: &str = "instagram";
pub const ARTSTATION: &str = "artstation";
pub const GITHUB: &str = "github";
