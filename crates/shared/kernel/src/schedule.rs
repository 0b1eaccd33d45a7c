//! Deferred work.
//!
//! Controllers never sleep or spawn timers. When something has to happen later (a fade-in,
//! hiding a card once its transition finished, removing an overlay) they return a
//! [`Deferred`] describing the delay and the follow-up action. The host schedules it with
//! whatever timer it has and hands the action back when it fires; tests simply complete
//! it immediately.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred<A> {
    pub delay: Duration,
    pub action: A,
}

impl<A> Deferred<A> {
    #[must_use]
    pub const fn after(delay: Duration, action: A) -> Self {
        Self { delay, action }
    }

    #[must_use]
    pub const fn after_ms(millis: u64, action: A) -> Self {
        Self::after(Duration::from_millis(millis), action)
    }

    /// Wraps the action, typically to lift a slice action into a session-wide one.
    #[must_use]
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Deferred<B> {
        Deferred { delay: self.delay, action: f(self.action) }
    }
}
