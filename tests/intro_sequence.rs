mod common;

use common::{fired, seeded_intro, tick_until, FRAME_MS, MAX_FRAMES};
use folio::ui::intro::{IntroPhase, IntroSchedule, WipeSpring, SCRAMBLE_ALPHABET};
use std::time::Duration;

const NAME: &str = "Adon Paul Tomy";

#[test]
fn reveal_is_monotonic_and_bounded() {
    let (mut intro, _) = seeded_intro(NAME, false);
    intro.start();

    let mut now = 0;
    let mut last = 0;
    for _ in 0..MAX_FRAMES {
        now += FRAME_MS;
        intro.tick(now);
        let revealed = intro.state().revealed_count();
        assert!(revealed >= last, "revealed count went from {last} to {revealed}");
        assert!(revealed <= NAME.chars().count());
        last = revealed;
        if intro.phase() == IntroPhase::Revealed {
            break;
        }
    }
    assert_eq!(last, NAME.chars().count());
}

#[test]
fn resolved_slots_never_change() {
    let (mut intro, _) = seeded_intro(NAME, false);
    intro.start();

    let mut settled: Vec<Option<char>> = vec![None; NAME.chars().count()];
    let mut now = 0;
    while intro.phase() != IntroPhase::Revealed {
        now += FRAME_MS;
        intro.tick(now);
        for (index, slot) in intro.state().slots().iter().enumerate() {
            if let Some(expected) = settled[index] {
                assert!(slot.resolved, "slot {index} became unresolved");
                assert_eq!(slot.display_char, expected);
            } else if slot.resolved {
                assert_eq!(slot.display_char, slot.final_char);
                settled[index] = Some(slot.display_char);
            }
        }
        assert!(now < MAX_FRAMES as u64 * FRAME_MS);
    }
    assert!(settled.iter().all(Option::is_some));
}

#[test]
fn scrambled_glyphs_come_from_the_alphabet() {
    let (mut intro, _) = seeded_intro(NAME, false);
    intro.start();

    let mut now = 0;
    while intro.phase() != IntroPhase::Revealed {
        now += FRAME_MS;
        intro.tick(now);
        for slot in intro.state().slots().iter().filter(|slot| !slot.resolved) {
            assert!(SCRAMBLE_ALPHABET.contains(&slot.display_char));
        }
    }
}

#[test]
fn progress_stays_in_range_and_hits_100_only_when_resolved() {
    let (mut intro, _) = seeded_intro(NAME, false);
    intro.start();

    let mut now = 0;
    loop {
        now += FRAME_MS;
        intro.tick(now);
        let progress = intro.progress();
        assert!((0.0..=100.0).contains(&progress));

        let all_resolved = intro.state().resolved_count() == NAME.chars().count();
        assert_eq!(progress == 100.0, all_resolved);
        if all_resolved {
            break;
        }
    }
}

#[test]
fn progress_lags_the_typing_cursor() {
    let (mut intro, _) = seeded_intro(NAME, false);
    intro.start();

    let mut now = 0;
    let mut saw_lag = false;
    while intro.phase() != IntroPhase::Revealed {
        now += FRAME_MS;
        intro.tick(now);
        let state = intro.state();
        assert!(state.resolved_count() <= state.revealed_count());
        saw_lag |= state.resolved_count() < state.revealed_count();
    }
    assert!(saw_lag);
}

#[test]
fn reduced_motion_completes_synchronously() {
    let (mut intro, counter) = seeded_intro(NAME, true);

    assert_eq!(intro.start(), IntroSchedule::Idle);
    assert_eq!(fired(&counter), 1);
    assert_eq!(intro.phase(), IntroPhase::Done);
    assert_eq!(intro.state().display_text(), NAME);
    assert_eq!(intro.progress(), 100.0);
}

#[test]
fn full_run_settles_then_dismisses_once() {
    let (mut intro, counter) = seeded_intro(NAME, false);
    assert_eq!(intro.start(), IntroSchedule::NextFrame);

    // The frame that reaches Revealed asks for the settle timer.
    let mut now = 0;
    let mut settle = None;
    while settle.is_none() {
        now += FRAME_MS;
        if let IntroSchedule::SettleAfter(delay) = intro.tick(now) {
            settle = Some(delay);
        }
        assert!(now < MAX_FRAMES as u64 * FRAME_MS);
    }
    assert_eq!(settle, Some(Duration::from_millis(600)));
    assert_eq!(intro.phase(), IntroPhase::Revealed);

    // The wipe already rests at the open radius, so settling needs no frames.
    assert_eq!(intro.settle_elapsed(), IntroSchedule::Idle);
    assert_eq!(intro.phase(), IntroPhase::Dismissing);
    assert!(intro.state().hint_visible());
    assert_eq!(fired(&counter), 0);

    assert_eq!(intro.request_dismiss(), IntroSchedule::NextFrame);
    let now = tick_until(&mut intro, now, IntroPhase::Done);
    assert_eq!(fired(&counter), 1);
    assert!(intro.state().wipe().current() <= 5.0);

    intro.tick(now + FRAME_MS);
    intro.request_dismiss();
    assert_eq!(fired(&counter), 1);
}

#[test]
fn scroll_moves_the_wipe_target() {
    let (mut intro, _) = seeded_intro(NAME, false);
    intro.start();
    let now = tick_until(&mut intro, 0, IntroPhase::Revealed);

    intro.scroll(100.0);
    assert_eq!(intro.phase(), IntroPhase::Dismissing);
    assert!((intro.state().wipe().target() - 120.0).abs() < 1e-9);

    intro.scroll(-1_000.0);
    assert_eq!(intro.state().wipe().target(), 150.0);

    intro.scroll(10_000.0);
    assert_eq!(intro.state().wipe().target(), 0.0);
    tick_until(&mut intro, now, IntroPhase::Done);
}

#[test]
fn gestures_before_reveal_are_ignored() {
    let (mut intro, _) = seeded_intro(NAME, false);
    intro.start();
    intro.tick(FRAME_MS);

    intro.request_dismiss();
    intro.scroll(500.0);
    assert_eq!(intro.phase(), IntroPhase::Typing);
    assert_eq!(intro.state().wipe().target(), 150.0);
}

#[test]
fn dismiss_spring_converges_without_overshoot() {
    let mut spring = WipeSpring::at_rest(150.0);
    spring.set_target(0.0);

    let mut previous = spring.current();
    for _ in 0..1_000 {
        spring.step(0.015, 0.85);
        assert!(spring.current() >= 0.0);
        assert!(spring.current() <= previous + 1e-9);
        previous = spring.current();
    }
    assert!(spring.current() < 1e-6);
}

#[test]
fn empty_text_reveals_immediately() {
    let (mut intro, counter) = seeded_intro("", false);
    intro.start();
    let schedule = intro.tick(FRAME_MS);
    assert!(matches!(schedule, IntroSchedule::SettleAfter(_)));
    assert_eq!(intro.progress(), 100.0);
    assert_eq!(fired(&counter), 0);
}
