//! Adapter utilities for the `marquee` crate.
//!
//! The `marquee` crate is UI-agnostic and focuses on the core math and state.
//! This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - A wall-clock [`Controller`] (frame ticking, auto-resume after manual
//!   navigation)
//! - A process-wide [`OnceLoader`] for an external library's one-shot
//!   load-and-init sequence
//!
//! This crate is intentionally framework-agnostic (no DOM/GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod loader;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use loader::OnceLoader;
