//! The content store: profile text, social links, skills and projects.
//!
//! Everything here is created once from configuration and never mutated afterwards.

use crate::constants::{ART, ARTSTATION, GAME, GITHUB, INSTAGRAM, TWITTER, UI, WEB};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Project category, doubling as the filter key in markup (`data-category`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Art,
    Ui,
    Web,
    Game,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Art, Self::Ui, Self::Web, Self::Game];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Art => ART,
            Self::Ui => UI,
            Self::Web => WEB,
            Self::Game => GAME,
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub year: String,
}

/// A named skill with a proficiency level in percent (`0..=100`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
}

/// Social networks a link can point to.
///
/// Markup refers to a platform through `data-platform`, never through class order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Instagram,
    Artstation,
    Github,
}

impl SocialPlatform {
    pub const ALL: [Self; 4] = [Self::Twitter, Self::Instagram, Self::Artstation, Self::Github];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => TWITTER,
            Self::Instagram => INSTAGRAM,
            Self::Artstation => ARTSTATION,
            Self::Github => GITHUB,
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit platform to URL mapping.
///
/// Serialized as a plain string-keyed table so any config format can carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct SocialLinks(BTreeMap<SocialPlatform, String>);

impl TryFrom<BTreeMap<String, String>> for SocialLinks {
    type Error = String;

    fn try_from(table: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        table
            .into_iter()
            .map(|(key, url)| {
                SocialPlatform::parse(&key)
                    .map(|platform| (platform, url))
                    .ok_or_else(|| format!("unknown social platform `{key}`"))
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

impl From<SocialLinks> for BTreeMap<String, String> {
    fn from(links: SocialLinks) -> Self {
        links.0.into_iter().map(|(platform, url)| (platform.as_str().to_owned(), url)).collect()
    }
}

impl SocialLinks {
    #[must_use]
    pub fn with(mut self, platform: SocialPlatform, url: impl Into<String>) -> Self {
        self.0.insert(platform, url.into());
        self
    }

    #[must_use]
    pub fn url(&self, platform: SocialPlatform) -> Option<&str> {
        self.0.get(&platform).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        self.0.iter().map(|(platform, url)| (*platform, url.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Everything the page shows, loaded once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub profile: Profile,
    pub social: SocialLinks,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl Content {
    #[must_use]
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
