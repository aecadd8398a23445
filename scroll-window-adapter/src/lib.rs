//! Scroll event plumbing for the `scroll-window` crate.
//!
//! The `scroll-window` crate is UI-agnostic and focuses on the windowing math and committed
//! state. This crate provides the framework-neutral pieces an adapter needs around it:
//!
//! - Splitting raw scroll events into an immediate horizontal signal and a debounced vertical
//!   recomputation ([`ScrollChannelSplitter`], [`Debounce`])
//! - Aligning recomputation with the host's paint cycle ([`FrameScheduler`], [`FrameQueue`])
//! - Reading scroll geometry lazily ([`ScrollSource`])
//! - Listener registration with explicit cancellation ([`Listeners`], [`Subscription`])
//! - A lifecycle wrapper tying it all together ([`ScrollController`])
//!
//! Time is adapter-driven: every entry point takes `now_ms` from the host clock, so the crate
//! owns no timers and runs the same under a TUI loop, a browser binding, or a test.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod debounce;
mod frame;
mod listeners;
mod source;
mod splitter;

#[cfg(test)]
mod tests;

pub use controller::ScrollController;
pub use debounce::Debounce;
pub use frame::{FrameQueue, FrameRequest, FrameScheduler};
pub use listeners::{Listener, Listeners, Subscription};
pub use source::{ScrollPosition, ScrollSource};
pub use splitter::{Phase, ScrollChannelSplitter};
