//! Typewriter animation state.

use std::time::Duration;

use motto_core::{Mode, PhraseList, Timing};

/// Outcome of a single animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Text to show in the display target, replacing what was there.
    pub text: String,
    /// How long to wait before the next step.
    pub delay: Duration,
}

/// Typewriter animation state.
#[derive(Debug, Clone)]
pub struct Typewriter {
    /// Phrases to cycle through.
    phrases: PhraseList,
    /// Delays between steps.
    timing: Timing,
    /// Index of the active phrase.
    index: usize,
    /// Number of characters of the active phrase currently shown.
    revealed: usize,
    /// Typing or deleting.
    mode: Mode,
}

impl Typewriter {
    /// Create a typewriter at the first phrase, nothing revealed, typing.
    pub fn new(phrases: PhraseList, timing: Timing) -> Self {
        Self {
            phrases,
            timing,
            index: 0,
            revealed: 0,
            mode: Mode::Typing,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// The phrase currently being typed or deleted.
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// Advance by one character and compute the next delay.
    pub fn step(&mut self) -> Step {
        let len = self.current_phrase().chars().count();

        self.revealed = match self.mode {
            Mode::Deleting => self.revealed.saturating_sub(1),
            Mode::Typing => (self.revealed + 1).min(len),
        };
        let text = prefix(self.current_phrase(), self.revealed).to_string();

        let mut delay = match self.mode {
            Mode::Deleting => self.timing.deleting,
            Mode::Typing => self.timing.typing,
        };

        match self.mode {
            Mode::Typing if self.revealed == len => {
                self.mode = self.mode.toggle();
                delay = self.timing.hold;
                tracing::trace!(index = self.index, "phrase complete, holding");
            }
            Mode::Deleting if self.revealed == 0 => {
                self.mode = self.mode.toggle();
                self.index = self.phrases.next_index(self.index);
                delay = self.timing.typing;
                tracing::trace!(index = self.index, "advancing to next phrase");
            }
            _ => {}
        }

        Step { text, delay }
    }
}

/// First `count` characters of `s`.
fn prefix(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
