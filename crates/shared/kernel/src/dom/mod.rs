//! The document capability.
//!
//! [`Document`] is the only way slices read or change the page. It is deliberately small:
//! id-addressed element writes, a class query, container rendering, the location fragment
//! and a few viewport facts. Every write reports whether its target existed, and callers
//! treat a missing target as a silent no-op.

mod element;
pub mod ids;
mod memory;

pub use element::Element;
pub use memory::MemoryDocument;

/// Scroll animation requested from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Size of the visible area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 800.0 }
    }
}

/// Capability interface over the hosting page.
///
/// Elements are addressed by their `id`; an element without one can be rendered but not
/// changed afterwards.
pub trait Document {
    /// Whether an element with `id` exists.
    fn contains(&self, id: &str) -> bool;

    /// Replaces every child of `container` with `children`.
    ///
    /// Returns `false` (and renders nothing) when the container is absent.
    fn render(&mut self, container: &str, children: Vec<Element>) -> bool;

    /// Appends `element` as the last child of the body.
    fn append_to_body(&mut self, element: Element);

    /// Removes the element with `id` from the page.
    fn remove(&mut self, id: &str) -> bool;

    /// Ids of every element carrying `class`, in document order.
    fn ids_with_class(&self, class: &str) -> Vec<String>;

    fn has_class(&self, id: &str, class: &str) -> bool;

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> bool;

    /// Toggles a class on the body element.
    fn set_body_class(&mut self, class: &str, enabled: bool);

    fn body_has_class(&self, class: &str) -> bool;

    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool;

    /// `data-*` attribute shorthand.
    fn data(&self, id: &str, key: &str) -> Option<String> {
        self.attribute(id, &format!("data-{key}"))
    }

    /// Inline style property, by CSS name (`opacity`, `animation-delay`, ...).
    fn style(&self, id: &str, property: &str) -> Option<String>;

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool;

    /// Text content of the element and all its descendants.
    fn text(&self, id: &str) -> Option<String>;

    /// Replaces the content of the element with a single text node.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Current value of a form control.
    fn value(&self, id: &str) -> Option<String>;

    fn set_value(&mut self, id: &str, value: &str) -> bool;

    fn title(&self) -> String;

    fn set_title(&mut self, title: &str);

    /// Location fragment without the leading `#`.
    fn location_hash(&self) -> String;

    fn set_location_hash(&mut self, hash: &str);

    fn scroll_to_top(&mut self, behavior: ScrollBehavior);

    /// Scrolls until the element is in view.
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool;

    fn viewport(&self) -> Viewport;
}
