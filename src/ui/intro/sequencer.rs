//! Host-facing driver of the splash intro.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::PreferenceHandle;
use crate::ui::mvi::Reducer;

use super::intent::IntroIntent;
use super::reducer::IntroReducer;
use super::state::{IntroPhase, IntroState, IntroTiming};
use super::SCRAMBLE_ALPHABET;

/// Zero-argument notification fired when the splash completes.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// What the host has to schedule after driving the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroSchedule {
    /// Call [`IntroSequencer::tick`] again on the next display frame.
    NextFrame,
    /// Call [`IntroSequencer::settle_elapsed`] once this delay has passed.
    SettleAfter(Duration),
    /// Nothing to schedule.
    Idle,
}

/// Owns the intro state, feeds it glyphs, and notifies the host once the
/// splash is done.
pub struct IntroSequencer {
    state: IntroState,
    prefs: PreferenceHandle,
    rng: StdRng,
    on_complete: Option<CompletionCallback>,
}

impl IntroSequencer {
    pub fn new(target_text: &str, timing: IntroTiming, prefs: PreferenceHandle) -> Self {
        Self::with_rng(target_text, timing, prefs, StdRng::from_os_rng())
    }

    /// Same as [`new`](Self::new) with a caller-provided generator, so tests
    /// get reproducible scramble glyphs.
    pub fn with_rng(
        target_text: &str,
        timing: IntroTiming,
        prefs: PreferenceHandle,
        rng: StdRng,
    ) -> Self {
        Self {
            state: IntroState::new(target_text, timing),
            prefs,
            rng,
            on_complete: None,
        }
    }

    /// Register the completion callback. It runs at most once.
    pub fn on_complete(&mut self, callback: impl FnOnce() + Send + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn state(&self) -> &IntroState {
        &self.state
    }

    pub fn phase(&self) -> IntroPhase {
        self.state.phase()
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    /// Start the sequence, honoring the reduced-motion preference.
    ///
    /// With reduced motion the completion callback runs before this returns
    /// and no frame is requested.
    pub fn start(&mut self) -> IntroSchedule {
        debug_assert!(!self.state.is_started(), "intro sequencer started twice");
        if self.state.is_started() {
            return IntroSchedule::Idle;
        }
        let reduce_motion = self.prefs.reduce_motion();
        self.dispatch(IntroIntent::Start { reduce_motion })
    }

    /// Advance one display frame.
    pub fn tick(&mut self, now_ms: u64) -> IntroSchedule {
        let glyphs = self.draw_glyphs();
        self.dispatch(IntroIntent::Frame { now_ms, glyphs })
    }

    /// The settle timer armed on entering `Revealed` has fired.
    pub fn settle_elapsed(&mut self) -> IntroSchedule {
        self.dispatch(IntroIntent::SettleElapsed)
    }

    /// Click gesture: close the wipe completely.
    pub fn request_dismiss(&mut self) -> IntroSchedule {
        self.dispatch(IntroIntent::Dismiss)
    }

    /// Scroll gesture: move the wipe target by `delta_y`.
    pub fn scroll(&mut self, delta_y: f64) -> IntroSchedule {
        self.dispatch(IntroIntent::Scroll { delta_y })
    }

    fn dispatch(&mut self, intent: IntroIntent) -> IntroSchedule {
        let before = self.state.phase();
        self.state = IntroReducer::reduce(std::mem::take(&mut self.state), intent);
        let after = self.state.phase();

        if before != after {
            tracing::debug!(
                from = ?before,
                to = ?after,
                progress = self.state.progress(),
                "Intro phase changed"
            );
        }

        if self.state.is_complete() {
            if let Some(callback) = self.on_complete.take() {
                tracing::info!("Splash complete");
                callback();
            }
        }

        match after {
            IntroPhase::Revealed if before != IntroPhase::Revealed => IntroSchedule::SettleAfter(
                Duration::from_millis(self.state.timing().settle_delay_ms),
            ),
            IntroPhase::Typing | IntroPhase::Scrambling if self.state.is_started() => {
                IntroSchedule::NextFrame
            }
            // A wipe resting at its target needs no frames until the next gesture.
            IntroPhase::Dismissing if !self.state.wipe().is_at_rest() => IntroSchedule::NextFrame,
            _ => IntroSchedule::Idle,
        }
    }

    fn draw_glyphs(&mut self) -> Vec<char> {
        (0..self.state.glyph_demand())
            .map(|_| SCRAMBLE_ALPHABET[self.rng.random_range(0..SCRAMBLE_ALPHABET.len())])
            .collect()
    }
}
