//! Page navigation feature module.
//!
//! Turns navigation requests into a timed two-phase slide (the old page
//! exits while the new one enters), or an instant switch with reduced motion.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Current/pending page, direction, render panes
//! - `intent.rs` - Navigate, TransitionElapsed
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Reads the motion preference, reports timers to arm

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{NavEffect, PageTransitionController};
pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{Direction, NavState, PageId, Pane, PaneTag};
