use super::{Document, Element, ScrollBehavior, Viewport};

/// An in-memory page: a body element tree plus title, location fragment and viewport.
///
/// Used by tests and headless hosts. Scroll requests are recorded rather than performed.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    body: Element,
    title: String,
    hash: String,
    viewport: Viewport,
    scrolls: Vec<ScrollBehavior>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new(body: Element) -> Self {
        Self { body, ..Self::default() }
    }

    /// Starts the page at `#hash`.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    #[must_use]
    pub const fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Viewport { width, height };
        self
    }

    /// Simulates the user editing the address bar.
    pub fn set_hash_externally(&mut self, hash: impl Into<String>) {
        self.hash = hash.into();
    }

    #[must_use]
    pub const fn body(&self) -> &Element {
        &self.body
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.body.find(id)
    }

    #[must_use]
    pub fn scroll_requests(&self) -> &[ScrollBehavior] {
        &self.scrolls
    }

    fn with_element<T>(&mut self, id: &str, f: impl FnOnce(&mut Element) -> T) -> Option<T> {
        self.body.find_mut(id).map(f)
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.body.find(id).is_some()
    }

    fn render(&mut self, container: &str, children: Vec<Element>) -> bool {
        self.with_element(container, |el| {
            el.text = None;
            el.children = children;
        })
        .is_some()
    }

    fn append_to_body(&mut self, element: Element) {
        self.body.children.push(element);
    }

    fn remove(&mut self, id: &str) -> bool {
        self.body.remove_descendant(id).is_some()
    }

    fn ids_with_class(&self, class: &str) -> Vec<String> {
        let mut ids = Vec::new();
        self.body.walk(&mut |el| {
            if let Some(id) = &el.id
                && el.has_class(class)
            {
                ids.push(id.clone());
            }
        });
        ids
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.body.find(id).is_some_and(|el| el.has_class(class))
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> bool {
        self.with_element(id, |el| {
            if enabled {
                el.add_class(class);
            } else {
                el.remove_class(class);
            }
        })
        .is_some()
    }

    fn set_body_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.body.add_class(class);
        } else {
            self.body.remove_class(class);
        }
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.body.has_class(class)
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        let el = self.body.find(id)?;
        if name == "class" {
            return (!el.classes.is_empty()).then(|| el.classes.join(" "));
        }
        el.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        self.with_element(id, |el| {
            if name == "class" {
                el.classes = value.split_whitespace().map(str::to_owned).collect();
            } else {
                el.attributes.insert(name.to_owned(), value.to_owned());
            }
        })
        .is_some()
    }

    fn style(&self, id: &str, property: &str) -> Option<String> {
        self.body.find(id)?.style.get(property).cloned()
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool {
        self.with_element(id, |el| {
            if value.is_empty() {
                el.style.remove(property);
            } else {
                el.style.insert(property.to_owned(), value.to_owned());
            }
        })
        .is_some()
    }

    fn text(&self, id: &str) -> Option<String> {
        self.body.find(id).map(Element::text_content)
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.with_element(id, |el| {
            el.children.clear();
            el.text = Some(text.to_owned());
        })
        .is_some()
    }

    fn value(&self, id: &str) -> Option<String> {
        let el = self.body.find(id)?;
        Some(el.value.clone().unwrap_or_default())
    }

    fn set_value(&mut self, id: &str, value: &str) -> bool {
        self.with_element(id, |el| el.value = Some(value.to_owned())).is_some()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn location_hash(&self) -> String {
        self.hash.clone()
    }

    fn set_location_hash(&mut self, hash: &str) {
        hash.trim_start_matches('#').clone_into(&mut self.hash);
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.scrolls.push(behavior);
    }

    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool {
        let found = self.contains(id);
        if found {
            self.scrolls.push(behavior);
        }
        found
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> MemoryDocument {
        MemoryDocument::new(
            Element::new("body")
                .child(Element::new("section").id("home").class("page"))
                .child(Element::new("section").id("works").class("page").child(
                    Element::new("div").id("grid").child(Element::new("div").id("old").class("page")),
                ))
                .child(Element::new("input").id("name")),
        )
    }

    #[test]
    fn class_query_follows_document_order() {
        assert_eq!(page().ids_with_class("page"), vec!["home", "works", "old"]);
    }

    #[test]
    fn render_replaces_children() {
        let mut doc = page();
        assert!(doc.render("grid", vec![Element::new("div").id("new").class("card")]));
        assert!(!doc.contains("old"));
        assert_eq!(doc.ids_with_class("card"), vec!["new"]);
    }

    #[test]
    fn writes_to_missing_elements_report_false() {
        let mut doc = page();
        assert!(!doc.render("nowhere", Vec::new()));
        assert!(!doc.set_class("nowhere", "active", true));
        assert!(!doc.set_style("nowhere", "opacity", "1"));
        assert!(!doc.set_text("nowhere", "x"));
        assert!(!doc.remove("nowhere"));
        assert_eq!(doc.value("nowhere"), None);
    }

    #[test]
    fn empty_style_value_clears_the_property() {
        let mut doc = page();
        doc.set_style("home", "display", "none");
        assert_eq!(doc.style("home", "display").as_deref(), Some("none"));
        doc.set_style("home", "display", "");
        assert_eq!(doc.style("home", "display"), None);
    }

    #[test]
    fn form_values_default_to_empty() {
        let mut doc = page();
        assert_eq!(doc.value("name").as_deref(), Some(""));
        doc.set_value("name", "Aiko");
        assert_eq!(doc.value("name").as_deref(), Some("Aiko"));
    }

    #[test]
    fn class_attribute_mirrors_the_class_list() {
        let mut doc = page();
        assert!(doc.set_attribute("home", "class", "fas fa-moon"));
        assert!(doc.has_class("home", "fa-moon"));
        assert!(!doc.has_class("home", "page"));
        assert_eq!(doc.attribute("home", "class").as_deref(), Some("fas fa-moon"));
    }

    #[test]
    fn location_hash_drops_the_pound_sign() {
        let mut doc = page();
        doc.set_location_hash("#works");
        assert_eq!(doc.location_hash(), "works");
    }
}
