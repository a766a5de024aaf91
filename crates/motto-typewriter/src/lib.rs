//! Typewriter animation for the motto display.
//!
//! The crate is split into a pure state machine ([`Typewriter`]) that
//! computes one step at a time, a small page model ([`Page`]) holding the
//! text elements a host renders, and a timer thread ([`Animator`]) that
//! drives the state machine into a page element.

mod animator;
mod page;
mod state;

pub use animator::Animator;
pub use page::{Page, TextElement, TextSink};
pub use state::{Step, Typewriter};
