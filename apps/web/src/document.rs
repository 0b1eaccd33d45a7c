//! [`Document`] over the live browser DOM.

use crate::error::{WebError, js_message};
use folio::kernel::dom::{Document, Element, ScrollBehavior, Viewport};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollIntoViewOptions, ScrollToOptions, Window};

#[derive(Debug, Clone)]
pub struct BrowserDocument {
    window: Window,
    document: web_sys::Document,
}

impl BrowserDocument {
    /// Binds to the global `window` and its document.
    ///
    /// # Errors
    /// Returns [`WebError::Browser`] outside a browser main thread.
    pub fn new() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or_else(|| WebError::browser("no global `window`"))?;
        let document = window.document().ok_or_else(|| WebError::browser("window has no document"))?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub const fn dom(&self) -> &web_sys::Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    fn html(&self, id: &str) -> Option<HtmlElement> {
        self.element(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn build(&self, element: &Element) -> Result<web_sys::Element, JsValue> {
        let node = self.document.create_element(&element.tag)?;

        if let Some(id) = &element.id {
            node.set_id(id);
        }
        if !element.classes.is_empty() {
            node.set_class_name(&element.classes.join(" "));
        }
        for (name, value) in element.attributes.iter().filter(|(name, _)| *name != "class") {
            node.set_attribute(name, value)?;
        }
        if !element.style.is_empty() {
            node.set_attribute("style", &inline_style(&element.style))?;
        }
        if let Some(text) = &element.text {
            node.append_with_str_1(text)?;
        }
        if let Some(value) = &element.value {
            write_value(&node, value);
        }
        for child in &element.children {
            let child: web_sys::Element = self.build(child)?;
            node.append_child(&child)?;
        }

        Ok(node)
    }
}

fn inline_style(style: &BTreeMap<String, String>) -> String {
    style.iter().map(|(property, value)| format!("{property}: {value};")).collect::<Vec<_>>().join(" ")
}

fn read_value(element: &web_sys::Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        element.get_attribute("value").unwrap_or_default()
    }
}

fn write_value(element: &web_sys::Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Err(err) = element.set_attribute("value", value) {
        debug!(error = %js_message(&err), "Failed to set value attribute");
    }
}

const fn scroll_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    }
}

impl Document for BrowserDocument {
    fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn render(&mut self, container: &str, children: Vec<Element>) -> bool {
        let Some(target) = self.element(container) else {
            return false;
        };
        target.set_text_content(None);

        for child in &children {
            if let Err(err) = self.build(child).and_then(|node| target.append_child(&node)) {
                warn!(container, error = %js_message(&err), "Failed to render element");
            }
        }
        true
    }

    fn append_to_body(&mut self, element: Element) {
        let Some(body) = self.document.body() else {
            warn!("Document has no body");
            return;
        };
        if let Err(err) = self.build(&element).and_then(|node| body.append_child(&node)) {
            warn!(error = %js_message(&err), "Failed to append element to body");
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        el.remove();
        true
    }

    fn ids_with_class(&self, class: &str) -> Vec<String> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(|el| el.id())
            .filter(|id| !id.is_empty())
            .collect()
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.class_list().contains(class))
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        if let Err(err) = el.class_list().toggle_with_force(class, enabled) {
            debug!(id, class, error = %js_message(&err), "Failed to toggle class");
        }
        true
    }

    fn set_body_class(&mut self, class: &str, enabled: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        if let Err(err) = body.class_list().toggle_with_force(class, enabled) {
            debug!(class, error = %js_message(&err), "Failed to toggle body class");
        }
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.document.body().is_some_and(|body| body.class_list().contains(class))
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.element(id)?.get_attribute(name)
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        if let Err(err) = el.set_attribute(name, value) {
            debug!(id, name, error = %js_message(&err), "Failed to set attribute");
        }
        true
    }

    fn style(&self, id: &str, property: &str) -> Option<String> {
        let value = self.html(id)?.style().get_property_value(property).ok()?;
        (!value.is_empty()).then_some(value)
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool {
        let Some(el) = self.html(id) else {
            return false;
        };
        let style = el.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            debug!(id, property, error = %js_message(&err), "Failed to write style");
        }
        true
    }

    fn text(&self, id: &str) -> Option<String> {
        Some(self.element(id)?.text_content().unwrap_or_default())
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        el.set_text_content(Some(text));
        true
    }

    fn value(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| read_value(&el))
    }

    fn set_value(&mut self, id: &str, value: &str) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        write_value(&el, value);
        true
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn location_hash(&self) -> String {
        let hash = self.window.location().hash().unwrap_or_default();
        hash.strip_prefix('#').unwrap_or(&hash).to_owned()
    }

    fn set_location_hash(&mut self, hash: &str) {
        if let Err(err) = self.window.location().set_hash(hash.trim_start_matches('#')) {
            warn!(hash, error = %js_message(&err), "Failed to update location fragment");
        }
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(scroll_behavior(behavior));
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(scroll_behavior(behavior));
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn viewport(&self) -> Viewport {
        let fallback = Viewport::default();
        let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64());
        Viewport {
            width: read(self.window.inner_width()).unwrap_or(fallback.width),
            height: read(self.window.inner_height()).unwrap_or(fallback.height),
        }
    }
}
