//! # Showcase
//!
//! Projects the content store into the page. Every render pass owns one container and
//! rebuilds its children from scratch; containers missing from the page are skipped.

use folio_kernel::domain::content::{Content, Project, Skill, SocialPlatform};
use folio_kernel::dom::ids::{
    CURRENT_YEAR, PORTFOLIO_GRID, PROFILE_BIO, PROFILE_TITLE, PROJECT_CARD_CLASS, SKILL_BARS,
    SKILL_FILL_CLASS, SOCIAL_LINK_CLASS, TYPED_NAME,
};
use folio_kernel::prelude::*;
use tracing::debug;

/// How much of the content reached the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub projects: usize,
    pub skills: usize,
    pub social_links: usize,
}

#[derive(Debug)]
pub struct Showcase {
    content: Content,
    title_prefix: String,
}

impl Showcase {
    #[must_use]
    pub fn new(content: Content, title_prefix: impl Into<String>) -> Self {
        Self { content, title_prefix: title_prefix.into() }
    }

    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Runs every render pass. `year` is shown in the footer.
    pub fn render_all(&self, doc: &mut impl Document, year: i32) -> RenderReport {
        self.render_profile(doc);
        let report = RenderReport {
            projects: self.render_projects(doc),
            skills: self.render_skills(doc),
            social_links: self.link_socials(doc),
        };
        render_year(doc, year);

        debug!(?report, "Content rendered");
        report
    }

    /// Rebuilds the project grid. Returns the number of cards rendered.
    pub fn render_projects(&self, doc: &mut impl Document) -> usize {
        let cards: Vec<Element> = self.content.projects.iter().map(project_card).collect();
        let count = cards.len();
        if doc.render(PORTFOLIO_GRID, cards) { count } else { 0 }
    }

    /// Rebuilds the skill bars. Returns the number of bars rendered.
    pub fn render_skills(&self, doc: &mut impl Document) -> usize {
        let bars: Vec<Element> =
            self.content.skills.iter().enumerate().map(|(i, skill)| skill_bar(i, skill)).collect();
        let count = bars.len();
        if doc.render(SKILL_BARS, bars) { count } else { 0 }
    }

    /// Points every `.social-link` anchor at the URL of its `data-platform`.
    pub fn link_socials(&self, doc: &mut impl Document) -> usize {
        let mut linked = 0;
        for anchor in doc.ids_with_class(SOCIAL_LINK_CLASS) {
            let Some(platform) = doc.data(&anchor, "platform") else {
                continue;
            };
            let Some(url) = SocialPlatform::parse(&platform).and_then(|p| self.content.social.url(p))
            else {
                debug!(%platform, "No link configured for social platform");
                continue;
            };
            doc.set_attribute(&anchor, "href", url);
            doc.set_attribute(&anchor, "target", "_blank");
            doc.set_attribute(&anchor, "rel", "noopener noreferrer");
            linked += 1;
        }
        linked
    }

    /// Display name, headline, bio and the document title.
    pub fn render_profile(&self, doc: &mut impl Document) {
        let profile = &self.content.profile;
        if profile.name.is_empty() {
            return;
        }
        doc.set_text(TYPED_NAME, &profile.name);
        if !profile.title.is_empty() {
            doc.set_text(PROFILE_TITLE, &profile.title);
        }
        if !profile.bio.is_empty() {
            doc.set_text(PROFILE_BIO, &profile.bio);
        }
        doc.set_title(&format!("{} | {}", self.title_prefix, profile.name));
    }
}

pub fn render_year(doc: &mut impl Document, year: i32) -> bool {
    doc.set_text(CURRENT_YEAR, &year.to_string())
}

fn project_card(project: &Project) -> Element {
    let category = project.category.as_str();
    let tags = project.tags.iter().map(|tag| Element::new("span").class("project-tag").text(tag.clone()));

    Element::new("div")
        .id(format!("project-{}", project.id))
        .class(PROJECT_CARD_CLASS)
        .class(category)
        .data("category", category)
        .child(Element::new("div").class("project-image"))
        .child(
            Element::new("div")
                .class("project-info")
                .child(Element::new("h3").class("project-title").text(project.title.clone()))
                .child(Element::new("p").class("project-description").text(project.description.clone()))
                .child(Element::new("div").class("project-tags").children(tags.collect::<Vec<_>>()))
                .child(Element::new("div").class("project-year").text(project.year.clone())),
        )
}

fn skill_bar(index: usize, skill: &Skill) -> Element {
    let level = format!("{}%", skill.level);

    Element::new("div")
        .class("skill-bar")
        .child(
            Element::new("div")
                .class("skill-label")
                .child(Element::new("span").text(skill.name.clone()))
                .child(Element::new("span").class("skill-percentage").text(level.clone())),
        )
        .child(
            Element::new("div").class("skill-progress").child(
                Element::new("div")
                    .id(format!("skill-fill-{index}"))
                    .class(SKILL_FILL_CLASS)
                    .style("width", level),
            ),
        )
}
