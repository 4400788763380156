//! Reducer for page navigation.

use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::state::{Direction, NavState};

/// Reducer for navigation state transitions.
///
/// Requests for the current page, or any request while a transition is in
/// flight, are dropped rather than queued.
pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Navigate {
                target,
                direction,
                reduce_motion,
            } => {
                if target == state.current || state.is_transitioning() {
                    return state;
                }
                let direction =
                    direction.unwrap_or_else(|| Direction::between(state.current, target));

                if reduce_motion {
                    NavState {
                        current: target,
                        pending: None,
                        direction,
                    }
                } else {
                    NavState {
                        current: state.current,
                        pending: Some(target),
                        direction,
                    }
                }
            }

            NavIntent::TransitionElapsed => match state.pending {
                Some(pending) => NavState {
                    current: pending,
                    pending: None,
                    direction: state.direction,
                },
                None => state,
            },
        }
    }
}
