use std::time::Duration;

use crate::config::{Config, PreferenceHandle, Preferences};
use crate::schedule::{Scheduler, TimerId};
use crate::ui::intro::{IntroPhase, IntroSchedule, IntroSequencer, IntroState, IntroTiming};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavEffect, NavState, PageId, PageTransitionController};
use crate::ui::settings::{SettingsIntent, SettingsPanelState, SettingsReducer};

/// One-shot timers the shell arms on behalf of the state machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Frame,
    Settle,
    PageTransition,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    prefs: PreferenceHandle,
    intro: IntroSequencer,
    nav: PageTransitionController,
    /// State of the settings panel (MVI pattern).
    settings: SettingsPanelState,
    timers: Scheduler<TimerEvent>,
    frame_timer: Option<TimerId>,
    settle_timer: Option<TimerId>,
    transition_timer: Option<TimerId>,
    frame_interval: Duration,
    wheel_notch_delta: f64,
    splash_done: bool,
    scroll: u16,
}

impl App {
    pub fn new(
        config: &Config,
        prefs: PreferenceHandle,
        on_splash_complete: impl FnOnce() + Send + 'static,
    ) -> Self {
        let mut intro = IntroSequencer::new(
            &config.splash.target_text,
            IntroTiming::from(&config.splash),
            prefs.clone(),
        );
        intro.on_complete(on_splash_complete);
        Self::with_intro(config, prefs, intro)
    }

    /// Build around an already configured sequencer (seeded generator,
    /// completion callback registered by the caller).
    pub fn with_intro(config: &Config, prefs: PreferenceHandle, intro: IntroSequencer) -> Self {
        let nav = PageTransitionController::new(
            prefs.clone(),
            Duration::from_millis(config.transition.duration_ms),
        );
        Self {
            should_quit: false,
            prefs,
            intro,
            nav,
            settings: SettingsPanelState::default(),
            timers: Scheduler::new(),
            frame_timer: None,
            settle_timer: None,
            transition_timer: None,
            frame_interval: Duration::from_millis(config.ui.frame_interval_ms),
            wheel_notch_delta: config.ui.wheel_notch_delta,
            splash_done: false,
            scroll: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs.get()
    }

    pub fn intro(&self) -> &IntroState {
        self.intro.state()
    }

    pub fn nav(&self) -> &NavState {
        self.nav.state()
    }

    pub fn settings(&self) -> &SettingsPanelState {
        &self.settings
    }

    /// True once the completion callback has been delivered back to the shell.
    pub fn splash_done(&self) -> bool {
        self.splash_done
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    /// Earliest pending timer deadline, used to bound the event wait.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn start(&mut self, now_ms: u64) {
        let schedule = self.intro.start();
        self.apply_intro(schedule, now_ms);
    }

    pub fn on_splash_complete(&mut self) {
        if self.splash_done {
            return;
        }
        self.splash_done = true;
        self.cancel_intro_timers();
        tracing::info!(page = ?self.nav.current(), "Showing pages");
    }

    /// Fire every timer whose deadline has passed.
    pub fn on_timers_due(&mut self, now_ms: u64) {
        for (id, event) in self.timers.due(now_ms) {
            match event {
                TimerEvent::Frame => {
                    if self.frame_timer == Some(id) {
                        self.frame_timer = None;
                    }
                    let schedule = self.intro.tick(now_ms);
                    self.apply_intro(schedule, now_ms);
                }
                TimerEvent::Settle => {
                    if self.settle_timer == Some(id) {
                        self.settle_timer = None;
                    }
                    let schedule = self.intro.settle_elapsed();
                    self.apply_intro(schedule, now_ms);
                }
                TimerEvent::PageTransition => {
                    if self.transition_timer == Some(id) {
                        self.transition_timer = None;
                    }
                    let effect = self.nav.transition_elapsed();
                    self.apply_nav(effect, now_ms);
                }
            }
        }
    }

    /// Click or Enter on the splash.
    pub fn dismiss_splash(&mut self, now_ms: u64) {
        if self.splash_done {
            return;
        }
        let schedule = self.intro.request_dismiss();
        self.after_gesture(schedule, now_ms);
    }

    /// Wheel over the splash, in notches (positive = down).
    pub fn scroll_splash(&mut self, notches: f64, now_ms: u64) {
        if self.splash_done {
            return;
        }
        let schedule = self.intro.scroll(notches * self.wheel_notch_delta);
        self.after_gesture(schedule, now_ms);
    }

    pub fn navigate(&mut self, target: PageId, now_ms: u64) {
        if !self.splash_done {
            return;
        }
        let effect = self.nav.navigate(target, None);
        self.apply_nav(effect, now_ms);
    }

    pub fn next_page(&mut self, now_ms: u64) {
        if !self.splash_done {
            return;
        }
        let effect = self.nav.next();
        self.apply_nav(effect, now_ms);
    }

    pub fn previous_page(&mut self, now_ms: u64) {
        if !self.splash_done {
            return;
        }
        let effect = self.nav.previous();
        self.apply_nav(effect, now_ms);
    }

    pub fn scroll_page(&mut self, lines: i16) {
        self.scroll = self.scroll.saturating_add_signed(lines);
    }

    pub fn toggle_theme(&mut self) {
        self.prefs.write().toggle_theme();
        self.refresh_settings();
    }

    pub fn open_settings(&mut self) {
        let fields = self.prefs.read().to_snapshots();
        dispatch_mvi!(self, settings, SettingsReducer, SettingsIntent::Load { fields });
    }

    pub fn close_settings(&mut self) {
        dispatch_mvi!(self, settings, SettingsReducer, SettingsIntent::Close);
    }

    pub fn settings_move_up(&mut self) {
        dispatch_mvi!(self, settings, SettingsReducer, SettingsIntent::MoveUp);
    }

    pub fn settings_move_down(&mut self) {
        dispatch_mvi!(self, settings, SettingsReducer, SettingsIntent::MoveDown);
    }

    /// Toggle the focused field and write it through to the store.
    pub fn settings_toggle(&mut self) {
        dispatch_mvi!(self, settings, SettingsReducer, SettingsIntent::Toggle);
        let Some(snapshot) = self.settings.focused_field().cloned() else {
            return;
        };
        tracing::debug!(field = ?snapshot.field, value = snapshot.value.display(), "Preference changed");
        self.prefs.write().apply(snapshot.field, snapshot.value);
        self.refresh_settings();
    }

    /// Cancel every pending timer. Called once before the shell exits.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.frame_timer = None;
        self.settle_timer = None;
        self.transition_timer = None;
    }

    fn refresh_settings(&mut self) {
        if self.settings.is_visible() {
            self.open_settings();
        }
    }

    fn after_gesture(&mut self, schedule: IntroSchedule, now_ms: u64) {
        // A gesture during Revealed pre-empts the settle timer.
        if self.intro.phase() != IntroPhase::Revealed {
            if let Some(id) = self.settle_timer.take() {
                self.timers.cancel(id);
            }
        }
        self.apply_intro(schedule, now_ms);
    }

    fn apply_intro(&mut self, schedule: IntroSchedule, now_ms: u64) {
        match schedule {
            IntroSchedule::NextFrame => {
                let armed = self.frame_timer.is_some_and(|id| self.timers.is_pending(id));
                if !armed {
                    self.frame_timer =
                        Some(self.timers.arm(now_ms, self.frame_interval, TimerEvent::Frame));
                }
            }
            IntroSchedule::SettleAfter(delay) => {
                self.settle_timer = Some(self.timers.arm(now_ms, delay, TimerEvent::Settle));
            }
            IntroSchedule::Idle => {}
        }
    }

    fn apply_nav(&mut self, effect: Option<NavEffect>, now_ms: u64) {
        match effect {
            Some(NavEffect::ArmTransition(duration)) => {
                self.transition_timer =
                    Some(self.timers.arm(now_ms, duration, TimerEvent::PageTransition));
            }
            Some(NavEffect::ResetScroll) => self.scroll = 0,
            None => {}
        }
    }

    fn cancel_intro_timers(&mut self) {
        for id in [self.frame_timer.take(), self.settle_timer.take()]
            .into_iter()
            .flatten()
        {
            self.timers.cancel(id);
        }
    }
}
