//! Facade crate for the Folio slices.
//! Re-exports domain/kernel primitives and composes every controller into one [`Portfolio`]
//! session. Keep this crate thin: it wires slices together and routes follow-ups, the
//! behaviour itself lives in the slices.
//!
//! ## Usage
//! Build a [`Portfolio`] over a [`kernel::dom::Document`] and an [`audio::AudioBackend`],
//! call [`Portfolio::start`] once, then forward every UI event to the matching `on_*`
//! method. Every call returns the deferred follow-ups it produced; schedule each one and
//! hand its action back to [`Portfolio::complete`] when it is due.

mod error;
mod session;

pub use crate::error::{PortfolioError, PortfolioErrorExt};
pub use crate::session::{FollowUp, Portfolio};
pub use folio_domain as domain;
pub use folio_kernel as kernel;

pub use folio_audio as audio;
pub use folio_contact as contact;
pub use folio_effects as effects;
pub use folio_gallery as gallery;
pub use folio_navigation as navigation;
pub use folio_showcase as showcase;
