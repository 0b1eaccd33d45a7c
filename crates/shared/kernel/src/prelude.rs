pub use crate::cue::Cue;
pub use crate::dom::{Document, Element, MemoryDocument, ScrollBehavior, Viewport};
pub use crate::schedule::Deferred;
pub use folio_domain::config::SiteConfig;
pub use folio_domain::content::{Category, Content};
