//! Host-facing driver of page navigation.

use std::time::Duration;

use crate::config::PreferenceHandle;
use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::reducer::NavReducer;
use super::state::{Direction, NavState, PageId, Pane};

/// Side effect the host must carry out after a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Arm a one-shot timer; call
    /// [`PageTransitionController::transition_elapsed`] when it fires.
    ArmTransition(Duration),
    /// The new page is in place; scroll it back to the top.
    ResetScroll,
}

/// Mediates navigation requests into directional transitions.
pub struct PageTransitionController {
    state: NavState,
    prefs: PreferenceHandle,
    duration: Duration,
}

impl PageTransitionController {
    pub fn new(prefs: PreferenceHandle, duration: Duration) -> Self {
        Self {
            state: NavState::default(),
            prefs,
            duration,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn current(&self) -> PageId {
        self.state.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn panes(&self) -> Vec<Pane> {
        self.state.panes()
    }

    /// Request a move to `target`.
    ///
    /// Returns the timer to arm when a transition started,
    /// [`NavEffect::ResetScroll`] when the page switched instantly, and `None`
    /// when the request was dropped.
    pub fn navigate(&mut self, target: PageId, direction: Option<Direction>) -> Option<NavEffect> {
        let before = self.state;
        let reduce_motion = self.prefs.reduce_motion();
        self.state = NavReducer::reduce(
            before,
            NavIntent::Navigate {
                target,
                direction,
                reduce_motion,
            },
        );

        if self.state == before {
            tracing::trace!(?target, current = ?before.current(), "Navigation dropped");
            return None;
        }

        tracing::debug!(
            from = ?before.current(),
            to = ?target,
            direction = ?self.state.direction(),
            reduce_motion,
            "Navigating"
        );

        if self.state.is_transitioning() {
            Some(NavEffect::ArmTransition(self.duration))
        } else {
            Some(NavEffect::ResetScroll)
        }
    }

    /// Navigate to the page after the current one, if any.
    pub fn next(&mut self) -> Option<NavEffect> {
        let target = self.state.current().next()?;
        self.navigate(target, Some(Direction::Forward))
    }

    /// Navigate to the page before the current one, if any.
    pub fn previous(&mut self) -> Option<NavEffect> {
        let target = self.state.current().previous()?;
        self.navigate(target, Some(Direction::Backward))
    }

    /// The transition timer fired. Extra calls after completion do nothing.
    pub fn transition_elapsed(&mut self) -> Option<NavEffect> {
        if !self.state.is_transitioning() {
            return None;
        }
        self.state = NavReducer::reduce(self.state, NavIntent::TransitionElapsed);
        tracing::debug!(page = ?self.state.current(), "Transition finished");
        Some(NavEffect::ResetScroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(reduce_motion: bool) -> PageTransitionController {
        PageTransitionController::new(
            PreferenceHandle::in_memory(reduce_motion),
            Duration::from_millis(500),
        )
    }

    #[test]
    fn navigate_requests_timer() {
        let mut nav = controller(false);
        assert_eq!(
            nav.navigate(PageId::About, None),
            Some(NavEffect::ArmTransition(Duration::from_millis(500)))
        );
        assert!(nav.is_transitioning());
        assert_eq!(nav.transition_elapsed(), Some(NavEffect::ResetScroll));
        assert_eq!(nav.current(), PageId::About);
        assert_eq!(nav.transition_elapsed(), None);
    }

    #[test]
    fn reduced_motion_needs_no_timer() {
        let mut nav = controller(true);
        assert_eq!(
            nav.navigate(PageId::Projects, None),
            Some(NavEffect::ResetScroll)
        );
        assert_eq!(nav.current(), PageId::Projects);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn motion_preference_is_read_per_request() {
        let prefs = PreferenceHandle::in_memory(false);
        let mut nav = PageTransitionController::new(prefs.clone(), Duration::from_millis(500));
        prefs.write().set_reduce_motion(true);
        assert_eq!(nav.navigate(PageId::About, None), Some(NavEffect::ResetScroll));
        assert_eq!(nav.current(), PageId::About);
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        let mut nav = controller(true);
        assert_eq!(nav.previous(), None);
        assert_eq!(nav.current(), PageId::Home);

        for _ in 0..5 {
            nav.next();
        }
        assert_eq!(nav.current(), PageId::Interesting);
    }

    #[test]
    fn previous_slides_backward() {
        let mut nav = controller(true);
        nav.navigate(PageId::Projects, None);
        let mut nav = PageTransitionController {
            prefs: PreferenceHandle::in_memory(false),
            ..nav
        };
        nav.previous();
        assert_eq!(nav.state().pending(), Some(PageId::About));
        assert_eq!(nav.state().direction(), Direction::Backward);
    }
}
