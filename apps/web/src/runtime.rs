//! The session cell and its timer loop.
//!
//! The page owns exactly one [`Session`], kept in a thread-local cell on the main thread.
//! Event handlers borrow it through [`with_session`]; every follow-up a handler returns is
//! put on a one-shot timer and handed back to the session once it is due.

use crate::audio::HtmlAudioBackend;
use crate::document::BrowserDocument;
use crate::error::{WebError, WebErrorExt};
use crate::listeners;
use folio::domain::config::SiteConfig;
use folio::kernel::schedule::Deferred;
use folio::{FollowUp, Portfolio};
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::time::Duration;
use tracing::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;

pub(crate) type Session = Portfolio<BrowserDocument, HtmlAudioBackend>;

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Builds the session over the rendered skeleton, wires the listeners and starts it.
///
/// Calling it again once a session exists does nothing.
///
/// # Errors
/// Returns an error when the browser APIs are unavailable, the content is invalid or a
/// listener cannot be attached.
pub(crate) fn boot(config: SiteConfig) -> Result<(), WebError> {
    if SESSION.with(|cell| cell.borrow().is_some()) {
        debug!("Session already running");
        return Ok(());
    }

    let doc = BrowserDocument::new()?;
    let backend = HtmlAudioBackend::new(doc.dom(), &config.audio.sources);
    let mut session =
        Portfolio::new(doc, backend, config, seed()).context("Failed to assemble the portfolio")?;

    let follow_ups = session.start(current_year());
    SESSION.with(|cell| cell.replace(Some(session)));

    listeners::install()?;
    schedule(follow_ups);

    info!("Page is live");
    Ok(())
}

/// Runs `f` against the session. Returns `None` before boot or while the session is busy.
pub(crate) fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> Option<R> {
    SESSION.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            warn!("Session is busy, event dropped");
            return None;
        };
        slot.as_mut().map(f)
    })
}

/// Runs an event handler and schedules the follow-ups it returns.
pub(crate) fn dispatch(f: impl FnOnce(&mut Session) -> Vec<Deferred<FollowUp>>) {
    if let Some(follow_ups) = with_session(f) {
        schedule(follow_ups);
    }
}

fn schedule(follow_ups: Vec<Deferred<FollowUp>>) {
    for Deferred { delay, action } in follow_ups {
        spawn_local(async move {
            TimeoutFuture::new(millis(delay)).await;
            complete(action);
        });
    }
}

fn complete(action: FollowUp) {
    let arms_observer = matches!(action, FollowUp::ArmSkillReveal);
    dispatch(|session| session.complete(action));

    if !arms_observer {
        return;
    }
    if let Err(err) = listeners::observe_about() {
        warn!(%err, "Skill reveal disabled");
    }
}

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

fn seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

fn current_year() -> i32 {
    i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
}
