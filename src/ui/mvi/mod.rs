//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every animated or interactive piece of the shell (splash intro, page
//! transitions, settings panel) is a state value transformed by a reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── frames, timers, keys ┘
//! ```
//!
//! - **State**: Self-contained snapshot the view renders from
//! - **Intent**: Input, frame ticks and timer expiries
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Side effects (arming timers, persisting preferences, notifying the host)
//! stay with the owner of the state and happen around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
