//! # Decorative effects
//!
//! Everything on the page that is there for atmosphere rather than content:
//!
//! * [`particles`]: floating leaves and fireflies with randomised parameters,
//! * [`parallax`]: pointer-driven offsets of those particles,
//! * [`sequence`] and [`easter_egg`]: a secret key sequence and its overlay,
//! * [`typewriter`]: the typed display name in the hero section,
//! * [`skills`]: the one-shot skill bar animation,
//! * [`theme`]: the day and night colour schemes.
//!
//! Randomness is always injected, so a seeded generator reproduces a page exactly.

pub mod easter_egg;
pub mod parallax;
pub mod particles;
pub mod sequence;
pub mod skills;
pub mod theme;
pub mod typewriter;

pub use crate::easter_egg::{EasterEgg, EasterEggPass, RemoveOverlay};
pub use crate::particles::ParticleField;
pub use crate::sequence::KeySequence;
pub use crate::skills::{RestoreWidth, SkillReveal};
pub use crate::theme::ThemeController;
pub use crate::typewriter::{Typewriter, TypingStep};
