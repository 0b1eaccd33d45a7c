use std::collections::VecDeque;

/// Sliding window over the most recent key presses.
#[derive(Debug, Clone)]
pub struct KeySequence {
    target: Vec<String>,
    window: VecDeque<String>,
}

impl KeySequence {
    #[must_use]
    pub fn new(target: Vec<String>) -> Self {
        Self { window: VecDeque::with_capacity(target.len() + 1), target }
    }

    /// Records a key. Returns `true` when the window now equals the target, and clears it.
    pub fn push(&mut self, key: &str) -> bool {
        if self.target.is_empty() {
            return false;
        }

        self.window.push_back(key.to_owned());
        if self.window.len() > self.target.len() {
            self.window.pop_front();
        }

        let matched = self.window.iter().eq(self.target.iter());
        if matched {
            self.window.clear();
        }
        matched
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }
}
