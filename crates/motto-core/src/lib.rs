//! Core types shared by the motto crates.

mod phrases;
mod theme;
mod timing;

pub use phrases::{DEFAULT_PHRASES, PhraseError, PhraseList};
pub use theme::ColorTheme;
pub use timing::{DELETING_INTERVAL, HOLD_DELAY, TYPING_INTERVAL, Timing};

/// Identifier of the page element the animator writes into.
pub const TARGET_ID: &str = "dynamic-moto";

/// Whether the animator is revealing or removing characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Typing,
    Deleting,
}

impl Mode {
    /// Flip between typing and deleting.
    pub fn toggle(self) -> Self {
        match self {
            Mode::Typing => Mode::Deleting,
            Mode::Deleting => Mode::Typing,
        }
    }
}
