//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use folio::config::{Config, PreferenceHandle};
use folio::ui::intro::{IntroPhase, IntroSchedule, IntroSequencer, IntroTiming};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Frame spacing used when driving sequencers by hand.
pub const FRAME_MS: u64 = 16;

/// Upper bound on frames for any intro run in tests.
pub const MAX_FRAMES: usize = 5_000;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Sequencer with a fixed seed and a counter of completion callbacks.
pub fn seeded_intro(text: &str, reduce_motion: bool) -> (IntroSequencer, Arc<AtomicUsize>) {
    let mut intro = IntroSequencer::with_rng(
        text,
        IntroTiming::default(),
        PreferenceHandle::in_memory(reduce_motion),
        StdRng::seed_from_u64(7),
    );
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    intro.on_complete(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (intro, fired)
}

/// Tick until `phase` is reached. Returns the time of the last frame.
pub fn tick_until(intro: &mut IntroSequencer, mut now_ms: u64, phase: IntroPhase) -> u64 {
    for _ in 0..MAX_FRAMES {
        if intro.phase() == phase {
            return now_ms;
        }
        now_ms += FRAME_MS;
        intro.tick(now_ms);
    }
    panic!("intro never reached {phase:?}, stuck in {:?}", intro.phase());
}

pub fn fired(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

pub fn is_next_frame(schedule: IntroSchedule) -> bool {
    schedule == IntroSchedule::NextFrame
}

pub fn default_config() -> Config {
    Config::default()
}
