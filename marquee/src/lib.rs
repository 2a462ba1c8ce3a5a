//! A headless infinite-loop carousel engine.
//!
//! For adapter-level utilities (frame ticking, auto-resume after manual
//! navigation), see the `marquee-adapter` crate.
//!
//! This crate focuses on the state a seamless marquee-style carousel needs:
//! measured card spacing, a modularly wrapping scroll offset, a level-triggered
//! hover gate, and a center-of-strip position indicator.
//!
//! It is UI-agnostic. A GUI/DOM layer is expected to provide:
//! - rendered card geometry (leading-edge positions after layout)
//! - a display-refresh callback that calls [`Marquee::advance`] once per frame
//! - pointer enter/leave events for the hover gate
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod marquee;
mod options;
mod state;
mod types;


pub use marquee::Marquee;
pub use options::{DEFAULT_FALLBACK_STEP, MarqueeOptions, OnChangeCallback};
pub use state::{FrameState, LayoutState, ScrollState};
pub use types::{DisplayCard, Item};
