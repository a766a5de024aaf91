//! Step timing for the typewriter effect.

use std::time::Duration;

/// Delay between two revealed characters.
pub const TYPING_INTERVAL: Duration = Duration::from_millis(100);

/// Delay between two removed characters.
pub const DELETING_INTERVAL: Duration = Duration::from_millis(50);

/// Pause once a phrase is fully revealed, before deletion starts.
pub const HOLD_DELAY: Duration = Duration::from_millis(1500);

/// Delays used by one animator. Fixed once the animator is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub typing: Duration,
    pub deleting: Duration,
    pub hold: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            typing: TYPING_INTERVAL,
            deleting: DELETING_INTERVAL,
            hold: HOLD_DELAY,
        }
    }
}

impl Timing {
    /// Same delay for every kind of step. Mostly useful in tests.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            typing: delay,
            deleting: delay,
            hold: delay,
        }
    }
}
