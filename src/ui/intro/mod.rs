//! Splash intro feature module.
//!
//! Reveals the target text one slot at a time, scrambles each slot until it
//! resolves, then waits for a wipe gesture that shrinks the overlay and hands
//! control to the pages.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Slots, phase (Typing → Scrambling → Revealed → Dismissing → Done), wipe spring
//! - `intent.rs` - Start, frame ticks, settle timer, dismiss gestures
//! - `reducer.rs` - State transitions (pure, randomness arrives in the intent)
//! - `sequencer.rs` - Owns the state, draws glyphs, fires the completion callback

mod intent;
mod reducer;
mod sequencer;
mod state;

pub use intent::IntroIntent;
pub use reducer::IntroReducer;
pub use sequencer::{CompletionCallback, IntroSchedule, IntroSequencer};
pub use state::{CharSlot, IntroPhase, IntroState, IntroTiming, WipeSpring};

/// Wipe radius (percent) that fully covers the screen.
pub const WIPE_MAX_RADIUS: f64 = 150.0;

/// Radius at or below which the splash counts as dismissed.
pub const COMPLETE_RADIUS: f64 = 5.0;

/// Radius below which the overlay starts fading out.
pub const FADE_RADIUS: f64 = 20.0;

/// Unresolved slots pick a new glyph every this many frames.
pub const REDRAW_EVERY_FRAMES: u32 = 3;

/// Glyphs shown while a slot is still decrypting.
pub const SCRAMBLE_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '!', '@',
    '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '<', '>', '?', '/',
];
