//! State for the splash intro.

use crate::config::SplashConfig;
use crate::ui::mvi::UiState;

use super::{FADE_RADIUS, WIPE_MAX_RADIUS};

/// Lifecycle of the splash.
///
/// Typing and Scrambling overlap on screen (new slots appear while older
/// ones still decrypt); the phase only records whether every slot has been
/// allocated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntroPhase {
    /// Slots are still being appended.
    #[default]
    Typing,
    /// Every slot is allocated, some are still decrypting.
    Scrambling,
    /// Every slot is resolved; waiting for the settle delay or a gesture.
    Revealed,
    /// The wipe responds to gestures and shrinks toward its target.
    Dismissing,
    /// The splash has completed.
    Done,
}

/// One character position of the target text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSlot {
    pub final_char: char,
    pub resolved: bool,
    pub age_in_frames: u32,
    pub display_char: char,
}

impl CharSlot {
    pub(super) fn scrambled(final_char: char, display_char: char) -> Self {
        Self {
            final_char,
            resolved: false,
            age_in_frames: 0,
            display_char,
        }
    }

    pub(super) fn settled(final_char: char) -> Self {
        Self {
            final_char,
            resolved: true,
            age_in_frames: 0,
            display_char: final_char,
        }
    }

    pub(super) fn resolve(&mut self) {
        self.resolved = true;
        self.display_char = self.final_char;
    }
}

/// Timing and physics constants of the intro.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroTiming {
    pub reveal_interval_ms: u64,
    pub resolve_threshold_frames: u32,
    pub settle_delay_ms: u64,
    pub wipe_open_radius: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub scroll_sensitivity: f64,
}

impl From<&SplashConfig> for IntroTiming {
    fn from(config: &SplashConfig) -> Self {
        Self {
            reveal_interval_ms: config.reveal_interval_ms,
            resolve_threshold_frames: config.resolve_threshold_frames,
            settle_delay_ms: config.settle_delay_ms,
            wipe_open_radius: config.wipe_open_radius,
            stiffness: config.stiffness,
            damping: config.damping,
            scroll_sensitivity: config.scroll_sensitivity,
        }
    }
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self::from(&SplashConfig::default())
    }
}

/// Distance and speed below which the wipe counts as resting.
const REST_EPSILON: f64 = 0.01;

/// Spring-driven radius of the circular wipe, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WipeSpring {
    current: f64,
    target: f64,
    velocity: f64,
}

impl Default for WipeSpring {
    fn default() -> Self {
        Self::at_rest(WIPE_MAX_RADIUS)
    }
}

impl WipeSpring {
    pub fn at_rest(radius: f64) -> Self {
        let radius = radius.clamp(0.0, WIPE_MAX_RADIUS);
        Self {
            current: radius,
            target: radius,
            velocity: 0.0,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Set the target radius, clamped to `0..=WIPE_MAX_RADIUS`.
    pub fn set_target(&mut self, target: f64) {
        self.target = if target.is_nan() {
            self.target
        } else {
            target.clamp(0.0, WIPE_MAX_RADIUS)
        };
    }

    /// Advance one frame.
    ///
    /// The radius stays within `0..=WIPE_MAX_RADIUS`; hitting a bound
    /// absorbs the remaining velocity.
    pub fn step(&mut self, stiffness: f64, damping: f64) {
        let displacement = self.target - self.current;
        let force = displacement * stiffness;
        self.velocity = (self.velocity + force) * damping;
        let next = self.current + self.velocity;
        if !(0.0..=WIPE_MAX_RADIUS).contains(&next) {
            self.velocity = 0.0;
        }
        self.current = next.clamp(0.0, WIPE_MAX_RADIUS);
    }

    /// Close enough to the target, and slow enough, to stop animating.
    pub fn is_at_rest(&self) -> bool {
        (self.target - self.current).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    /// Overlay opacity: opaque above the fade radius, linear to zero below.
    pub fn opacity(&self) -> f64 {
        if self.current > FADE_RADIUS {
            1.0
        } else {
            (self.current / FADE_RADIUS).max(0.0)
        }
    }
}

/// Splash intro state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntroState {
    pub(super) timing: IntroTiming,
    pub(super) target: Vec<char>,
    pub(super) slots: Vec<CharSlot>,
    pub(super) last_reveal_ms: Option<u64>,
    pub(super) phase: IntroPhase,
    pub(super) started: bool,
    pub(super) glitch: bool,
    pub(super) hint_visible: bool,
    pub(super) completed: bool,
    pub(super) wipe: WipeSpring,
}

impl UiState for IntroState {}

impl IntroState {
    pub fn new(target_text: &str, timing: IntroTiming) -> Self {
        Self {
            timing,
            target: target_text.chars().collect(),
            ..Self::default()
        }
    }

    pub fn timing(&self) -> &IntroTiming {
        &self.timing
    }

    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn slots(&self) -> &[CharSlot] {
        &self.slots
    }

    /// Number of allocated slots.
    pub fn revealed_count(&self) -> usize {
        self.slots.len()
    }

    pub fn resolved_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.resolved).count()
    }

    /// Decryption progress in percent.
    ///
    /// Counts resolved slots, not allocated ones, so it trails the visible
    /// typing while slots are still scrambling.
    pub fn progress(&self) -> f64 {
        if self.target.is_empty() {
            return 100.0;
        }
        self.resolved_count() as f64 / self.target.len() as f64 * 100.0
    }

    /// Text as currently displayed, scrambled slots included.
    pub fn display_text(&self) -> String {
        self.slots.iter().map(|slot| slot.display_char).collect()
    }

    pub fn glitch(&self) -> bool {
        self.glitch
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn wipe(&self) -> &WipeSpring {
        &self.wipe
    }

    pub fn opacity(&self) -> f64 {
        self.wipe.opacity()
    }

    /// Upper bound of glyphs the next frame can consume.
    pub fn glyph_demand(&self) -> usize {
        let unresolved = self.slots.len() - self.resolved_count();
        let pending = usize::from(self.slots.len() < self.target.len());
        unresolved + pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_typing_with_no_slots() {
        let state = IntroState::new("abc", IntroTiming::default());
        assert_eq!(state.phase(), IntroPhase::Typing);
        assert_eq!(state.revealed_count(), 0);
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.wipe().current(), WIPE_MAX_RADIUS);
        assert_eq!(state.glyph_demand(), 1);
    }

    #[test]
    fn empty_text_counts_as_fully_decrypted() {
        let state = IntroState::new("", IntroTiming::default());
        assert_eq!(state.progress(), 100.0);
        assert_eq!(state.glyph_demand(), 0);
    }

    #[test]
    fn set_target_clamps() {
        let mut wipe = WipeSpring::default();
        wipe.set_target(-40.0);
        assert_eq!(wipe.target(), 0.0);
        wipe.set_target(900.0);
        assert_eq!(wipe.target(), WIPE_MAX_RADIUS);
        wipe.set_target(f64::NAN);
        assert_eq!(wipe.target(), WIPE_MAX_RADIUS);
    }

    #[test]
    fn opacity_fades_below_fade_radius() {
        assert_eq!(WipeSpring::at_rest(80.0).opacity(), 1.0);
        assert_eq!(WipeSpring::at_rest(10.0).opacity(), 0.5);
        assert_eq!(WipeSpring::at_rest(0.0).opacity(), 0.0);
    }

    #[test]
    fn spring_converges_without_going_negative() {
        let timing = IntroTiming::default();
        let mut wipe = WipeSpring::default();
        wipe.set_target(0.0);

        let mut previous = wipe.current();
        for _ in 0..600 {
            wipe.step(timing.stiffness, timing.damping);
            assert!(wipe.current() >= 0.0);
            assert!(wipe.current() <= previous + 1e-9);
            previous = wipe.current();
        }
        assert!(wipe.current() < 1e-6);
    }

    #[test]
    fn spring_at_rest_stays_put() {
        let mut wipe = WipeSpring::at_rest(70.0);
        wipe.step(0.015, 0.85);
        assert_eq!(wipe.current(), 70.0);
        assert_eq!(wipe.velocity(), 0.0);
    }
}
