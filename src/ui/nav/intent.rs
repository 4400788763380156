//! Intents for page navigation.

use crate::ui::mvi::Intent;

use super::state::{Direction, PageId};

/// Intents that can be dispatched to the navigation reducer.
#[derive(Debug, Clone, Copy)]
pub enum NavIntent {
    /// Request a move to `target`. `direction` is inferred from page order
    /// when absent. With `reduce_motion` the switch happens immediately.
    Navigate {
        target: PageId,
        direction: Option<Direction>,
        reduce_motion: bool,
    },

    /// The transition timer has fired.
    TransitionElapsed,
}

impl Intent for NavIntent {}
