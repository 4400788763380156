//! Intents for the splash intro.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the intro reducer.
#[derive(Debug)]
pub enum IntroIntent {
    /// Begin the sequence. With reduced motion the text appears fully
    /// resolved and the splash completes immediately.
    Start { reduce_motion: bool },

    /// One display frame.
    ///
    /// `glyphs` supplies scramble characters in consumption order: first the
    /// glyph for a newly revealed slot (if any), then one per unresolved slot
    /// due for a redraw. When it runs dry slots keep their current glyph.
    Frame { now_ms: u64, glyphs: Vec<char> },

    /// The settle delay after the full reveal has elapsed.
    SettleElapsed,

    /// Click: wipe the overlay away completely.
    Dismiss,

    /// Wheel/trackpad scroll. Positive `delta_y` shrinks the wipe.
    Scroll { delta_y: f64 },
}

impl Intent for IntroIntent {}
