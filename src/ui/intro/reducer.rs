//! Reducer for the splash intro.

use crate::ui::mvi::Reducer;

use super::intent::IntroIntent;
use super::state::{CharSlot, IntroPhase, IntroState, WipeSpring};
use super::{COMPLETE_RADIUS, REDRAW_EVERY_FRAMES};

/// Reducer for splash intro state transitions.
///
/// Transition table:
///
/// | from                 | intent          | to                          |
/// |----------------------|-----------------|-----------------------------|
/// | not started          | Start (motion)  | Typing                      |
/// | not started          | Start (reduced) | Done, text fully resolved   |
/// | Typing               | Frame           | Typing / Scrambling / Revealed |
/// | Scrambling           | Frame           | Scrambling / Revealed       |
/// | Revealed             | SettleElapsed   | Dismissing                  |
/// | Revealed, Dismissing | Dismiss, Scroll | Dismissing                  |
/// | Revealed, Dismissing | Frame           | Done once the wipe closes   |
///
/// Every other combination leaves the state untouched.
pub struct IntroReducer;

impl Reducer for IntroReducer {
    type State = IntroState;
    type Intent = IntroIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            IntroIntent::Start { reduce_motion } => start(state, reduce_motion),
            IntroIntent::Frame { now_ms, glyphs } => frame(state, now_ms, glyphs),
            IntroIntent::SettleElapsed => settle(state),
            IntroIntent::Dismiss => gesture(state, |wipe, _| wipe.set_target(0.0)),
            IntroIntent::Scroll { delta_y } => gesture(state, |wipe, sensitivity| {
                wipe.set_target(wipe.target() - delta_y * sensitivity)
            }),
        }
    }
}

fn start(mut state: IntroState, reduce_motion: bool) -> IntroState {
    if state.started {
        return state;
    }
    state.started = true;

    if reduce_motion {
        state.slots = state.target.iter().copied().map(CharSlot::settled).collect();
        state.glitch = true;
        state.wipe = WipeSpring::at_rest(0.0);
        state.phase = IntroPhase::Done;
        state.completed = true;
    }
    state
}

fn frame(mut state: IntroState, now_ms: u64, glyphs: Vec<char>) -> IntroState {
    if !state.started {
        return state;
    }
    let mut glyphs = glyphs.into_iter();

    match state.phase {
        IntroPhase::Typing | IntroPhase::Scrambling => {
            // Order matters: a slot appended this frame ages this frame, and
            // the phase check sees slots resolved this frame.
            reveal_next(&mut state, now_ms, &mut glyphs);
            age_slots(&mut state, &mut glyphs);

            if state.slots.len() == state.target.len() {
                if state.slots.iter().all(|slot| slot.resolved) {
                    state.phase = IntroPhase::Revealed;
                    state.glitch = true;
                } else {
                    state.phase = IntroPhase::Scrambling;
                }
            }
        }
        IntroPhase::Revealed | IntroPhase::Dismissing => {
            let (stiffness, damping) = (state.timing.stiffness, state.timing.damping);
            state.wipe.step(stiffness, damping);
            if !state.completed && state.wipe.current() <= COMPLETE_RADIUS {
                state.completed = true;
                state.phase = IntroPhase::Done;
            }
        }
        IntroPhase::Done => {}
    }
    state
}

fn reveal_next(state: &mut IntroState, now_ms: u64, glyphs: &mut impl Iterator<Item = char>) {
    let index = state.slots.len();
    let Some(&final_char) = state.target.get(index) else {
        return;
    };

    let last = *state.last_reveal_ms.get_or_insert(now_ms);
    if now_ms.saturating_sub(last) > state.timing.reveal_interval_ms {
        let display_char = glyphs.next().unwrap_or(final_char);
        state.slots.push(CharSlot::scrambled(final_char, display_char));
        state.last_reveal_ms = Some(now_ms);
    }
}

fn age_slots(state: &mut IntroState, glyphs: &mut impl Iterator<Item = char>) {
    let threshold = state.timing.resolve_threshold_frames;
    for slot in state.slots.iter_mut().filter(|slot| !slot.resolved) {
        slot.age_in_frames += 1;
        if slot.age_in_frames > threshold {
            slot.resolve();
        } else if slot.age_in_frames % REDRAW_EVERY_FRAMES == 0 {
            if let Some(glyph) = glyphs.next() {
                slot.display_char = glyph;
            }
        }
    }
}

fn settle(mut state: IntroState) -> IntroState {
    if state.phase == IntroPhase::Revealed {
        let open = state.timing.wipe_open_radius;
        state.wipe.set_target(open);
        state.phase = IntroPhase::Dismissing;
        state.hint_visible = true;
    }
    state
}

fn gesture(mut state: IntroState, apply: impl FnOnce(&mut WipeSpring, f64)) -> IntroState {
    if matches!(state.phase, IntroPhase::Revealed | IntroPhase::Dismissing) {
        state.phase = IntroPhase::Dismissing;
        state.hint_visible = true;
        apply(&mut state.wipe, state.timing.scroll_sensitivity);
    }
    state
}
