//! Load-time checks over the content store.

use crate::domain::content::Content;
use fxhash::FxHashSet;
use std::borrow::Cow;
use tracing::debug;

#[folio_derive::folio_error]
pub enum ContentError {
    #[error("Content validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Validates content once, right after it is loaded.
#[derive(Debug)]
pub struct ContentGuard;

impl ContentGuard {
    /// Upper bound of a skill level.
    pub const MAX_SKILL_LEVEL: u8 = 100;

    /// Checks that project ids are unique and titled, skill levels lie in `0..=100`
    /// and every social link is an absolute `http(s)` URL.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn verify(content: &Content) -> Result<(), ContentError> {
        let mut seen = FxHashSet::default();
        for project in &content.projects {
            if !seen.insert(project.id) {
                return Err(invalid(format!("Duplicate project id {}", project.id), "projects"));
            }
            if project.title.trim().is_empty() {
                return Err(invalid(format!("Project {} has no title", project.id), "projects"));
            }
        }

        if let Some(skill) = content.skills.iter().find(|s| s.level > Self::MAX_SKILL_LEVEL) {
            return Err(invalid(
                format!("Skill '{}' has level {} above {}", skill.name, skill.level, Self::MAX_SKILL_LEVEL),
                "skills",
            ));
        }

        for (platform, url) in content.social.iter() {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(invalid(format!("{platform} link '{url}' is not an http(s) URL"), "social"));
            }
        }

        debug!(
            projects = content.projects.len(),
            skills = content.skills.len(),
            social = content.social.len(),
            "Content verified"
        );
        Ok(())
    }
}

fn invalid(message: String, section: &'static str) -> ContentError {
    ContentError::Validation { message: message.into(), context: Some(section.into()) }
}
