//! A headless windowing engine for fixed-row-height virtual scrolling.
//!
//! For scroll event plumbing (debounce, frame alignment, lifecycle), see the
//! `scroll-window-adapter` crate.
//!
//! Given a scroll offset and a viewport height, the engine decides which slice of a very large
//! list should be materialized, widens that slice by a buffer margin, and reports the leading
//! padding needed to keep scrollbar geometry intact. Recomputation is hysteretic: a new window is
//! only committed once the raw visible range drifts into the buffer, and a commit is only
//! reported when its bounds actually move.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the vertical scroll offset and viewport height (in pixels)
//! - item count and fixed row height
//! - rendering of the committed range, offset by `top_padding_px`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod calc;
mod engine;
mod error;
mod options;
mod state;
mod types;


pub use calc::{Expansion, compute_raw_range, expand, should_update};
pub use engine::{RefreshOutcome, WindowEngine};
pub use error::ConfigError;
pub use options::{DegeneratePolicy, WindowOptions};
pub use state::WindowSnapshot;
pub use types::{IndexRange, ScrollEvent, Viewport, WindowRow};
