//! Typewriter headline state machine.
//!
//! The animator alternates between two phases over a fixed, cyclic list of
//! strings: typing appends one character per tick until the string is
//! complete, deleting removes one per tick until it is empty. Each tick
//! returns the text to display and how long to wait before the next tick.
//!
//! Character counts are in `char`s, not bytes, so non-ASCII strings never
//! split a code point.

#[cfg(test)]
#[path = "typed_text_test.rs"]
mod typed_text_test;

use crate::config::PageConfig;

/// Tick delays for the two phases and the pauses between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    /// Pause after a string is fully typed.
    pub typed_pause_ms: u32,
    /// Pause after a string is fully deleted, before the next one starts.
    pub next_string_pause_ms: u32,
}

impl TypingTiming {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            typing_ms: config.typing_delay_ms,
            deleting_ms: config.deleting_delay_ms,
            typed_pause_ms: config.typed_pause_ms,
            next_string_pause_ms: config.next_string_pause_ms,
        }
    }
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

/// Output of one animation tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedStep {
    pub text: String,
    pub next_delay_ms: u32,
}

/// Position within the cycle of typed strings.
#[derive(Clone, Debug)]
pub struct TypedText {
    strings: Vec<String>,
    timing: TypingTiming,
    string_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypedText {
    /// Build an animator. Returns `None` when there is nothing to type.
    pub fn new(strings: Vec<String>, timing: TypingTiming) -> Option<Self> {
        let strings: Vec<String> = strings.into_iter().filter(|s| !s.is_empty()).collect();
        if strings.is_empty() {
            return None;
        }
        Some(Self { strings, timing, string_index: 0, char_index: 0, deleting: false })
    }

    pub fn string_index(&self) -> usize {
        self.string_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current_string(&self) -> &str {
        &self.strings[self.string_index]
    }

    /// Advance one character in the current phase.
    pub fn tick(&mut self) -> TypedStep {
        let len = self.current_string().chars().count();

        let mut next_delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.timing.deleting_ms
        } else {
            self.char_index = (self.char_index + 1).min(len);
            self.timing.typing_ms
        };
        let text = self.current_string().chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            next_delay_ms = self.timing.typed_pause_ms;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.string_index = (self.string_index + 1) % self.strings.len();
            next_delay_ms = self.timing.next_string_pause_ms;
        }

        TypedStep { text, next_delay_ms }
    }
}
