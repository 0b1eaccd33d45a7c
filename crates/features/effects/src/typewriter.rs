use folio_kernel::domain::config::EffectsConfig;
use folio_kernel::dom::ids::{NAME_CURSOR, TYPED_NAME};
use folio_kernel::prelude::*;

/// Name left in an unconfigured profile; it is shown as is, without typing.
pub const PLACEHOLDER_NAME: &str = "Your Name Here";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingStep {
    Type,
    RestCursor,
}

/// Types the display name one character at a time.
#[derive(Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
    start_ms: u64,
    delay_ms: u64,
    cursor_rest_ms: u64,
}

impl Typewriter {
    #[must_use]
    pub fn new(name: &str, config: &EffectsConfig) -> Self {
        let chars = if name == PLACEHOLDER_NAME { Vec::new() } else { name.chars().collect() };
        Self {
            chars,
            typed: 0,
            start_ms: config.typing_start_ms,
            delay_ms: config.typing_delay_ms,
            cursor_rest_ms: config.cursor_rest_ms,
        }
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.typed == self.chars.len()
    }

    /// Clears the name and schedules the first character.
    pub fn start(&mut self, doc: &mut impl Document) -> Option<Deferred<TypingStep>> {
        if self.chars.is_empty() || !doc.set_text(TYPED_NAME, "") {
            return None;
        }
        self.typed = 0;
        Some(Deferred::after_ms(self.start_ms, TypingStep::Type))
    }

    pub fn step(&mut self, doc: &mut impl Document, step: TypingStep) -> Option<Deferred<TypingStep>> {
        match step {
            TypingStep::Type if self.typed < self.chars.len() => {
                self.typed += 1;
                let shown: String = self.chars[..self.typed].iter().collect();
                doc.set_text(TYPED_NAME, &shown);
                Some(Deferred::after_ms(self.delay_ms, TypingStep::Type))
            }
            TypingStep::Type => {
                doc.set_style(NAME_CURSOR, "animation", "none");
                Some(Deferred::after_ms(self.cursor_rest_ms, TypingStep::RestCursor))
            }
            TypingStep::RestCursor => {
                doc.set_style(NAME_CURSOR, "animation", "blink 1s infinite");
                None
            }
        }
    }
}
