//! Kernel utilities shared across slices.
//! Keep this crate lightweight: the document capability every controller renders through,
//! deferred-work descriptors, sound cue requests, content validation and configuration loading.
//!
//! ## Document access
//! Controllers never reach for a global DOM. They receive a [`dom::Document`] and only
//! touch the page through it, so the same code drives the browser and the in-memory
//! [`dom::MemoryDocument`] used by tests:
//! ```rust
//! use folio_kernel::dom::{Document, Element, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new(Element::new("body").child(Element::new("div").id("grid")));
//! assert!(doc.render("grid", vec![Element::new("p").text("hello")]));
//! assert!(!doc.render("missing", Vec::new()));
//! ```
//!
//! ## Config loading
//! ```rust
//! use folio_kernel::config::parse_config;
//! use folio_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = parse_config("[gallery]\nhide_delay_ms = 250").unwrap();
//! assert_eq!(cfg.gallery.hide_delay_ms, 250);
//! ```

pub mod config;
pub mod content;
pub mod cue;
pub mod dom;
pub mod prelude;
pub mod schedule;

pub use folio_domain as domain;
