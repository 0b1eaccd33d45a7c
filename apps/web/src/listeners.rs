//! Window and document level listeners, plus the about-section observer.
//!
//! Elements rendered by Dioxus get their handlers in [`crate::app`]. Everything else
//! (keys, pointer, fragment, resize, elements created at runtime) is delegated here.

use crate::error::WebError;
use crate::runtime::{Session, dispatch, with_session};
use folio::domain::constants::ABOUT;
use folio::kernel::dom::ids::{CLOSE_CONFIRMATION, HOVER_TARGETS, PROJECT_CARD_CLASS, SOCIAL_LINK_CLASS};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MouseEvent,
};

pub(crate) fn install() -> Result<(), WebError> {
    let window = web_sys::window().ok_or_else(|| WebError::browser("no global `window`"))?;
    let document = window.document().ok_or_else(|| WebError::browser("window has no document"))?;

    listen(&window, "keydown", |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            let key = event.key();
            dispatch(|session| session.on_key(&key));
        }
    })?;
    listen(&window, "mousemove", |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
            with_session(|session| session.on_pointer_move(x, y));
        }
    })?;
    listen(&window, "hashchange", |_| dispatch(Session::on_hash_change))?;
    listen(&window, "resize", |_| {
        with_session(Session::on_resize);
    })?;

    listen(&document, "click", on_click)?;
    listen(&document, "mouseover", on_mouse_over)?;

    debug!("Listeners installed");
    Ok(())
}

fn listen(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<(), WebError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| WebError::js(&err, event))?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn element_of(target: Option<EventTarget>) -> Option<web_sys::Element> {
    target?.dyn_into::<web_sys::Element>().ok()
}

fn closest(element: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    element.closest(selector).ok().flatten()
}

/// Any click: unmutes once, and covers the elements created at runtime.
fn on_click(event: Event) {
    let target = element_of(event.target());
    with_session(|session| {
        session.on_document_click();

        let Some(target) = target else {
            return;
        };
        if closest(&target, &format!("#{CLOSE_CONFIRMATION}")).is_some() {
            session.on_close_confirmation();
        } else if closest(&target, &format!(".{PROJECT_CARD_CLASS}, .{SOCIAL_LINK_CLASS}")).is_some() {
            session.on_interactive_click();
        }
    });
}

/// `mouseover` bubbles, so only count the pointer crossing into a new interactive element.
fn on_mouse_over(event: Event) {
    let Some(event) = event.dyn_ref::<MouseEvent>() else {
        return;
    };
    let Some(entered) = element_of(event.target()).and_then(|el| closest(&el, HOVER_TARGETS)) else {
        return;
    };
    let left = element_of(event.related_target()).and_then(|el| closest(&el, HOVER_TARGETS));
    if left.as_ref() != Some(&entered) {
        with_session(Session::on_hover);
    }
}

/// Watches the about section until the skill bars have been revealed once.
pub(crate) fn observe_about() -> Result<(), WebError> {
    let Some(threshold) = with_session(|session| session.config().effects.skill_reveal_threshold) else {
        return Ok(());
    };
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| WebError::browser("window has no document"))?;
    let Some(about) = document.get_element_by_id(ABOUT) else {
        debug!("No about section to observe");
        return Ok(());
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    let ratio = entry.intersection_ratio();
                    dispatch(|session| session.on_about_visibility(ratio));
                }
            }
            if !with_session(|session| session.skill_reveal_observing()).unwrap_or(false) {
                observer.disconnect();
                debug!("About observer disconnected");
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&threshold.into());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| WebError::js(&err, "Failed to create intersection observer"))?;
    observer.observe(&about);
    callback.forget();

    Ok(())
}
