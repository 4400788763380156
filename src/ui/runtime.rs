use crate::config::{Config, PreferenceHandle};
use crate::schedule::Clock;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Longest wait for input when no timer is pending.
const IDLE_WAIT: Duration = Duration::from_millis(250);

pub fn run(config: &Config, prefs: PreferenceHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let clock = Clock::new();
    let events = EventHandler::new();
    let splash_tx = events.sender();
    let mut app = App::new(config, prefs, move || {
        let _ = splash_tx.send(AppEvent::SplashComplete);
    });
    app.start(clock.now_ms());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let now = clock.now_ms();
        let timeout = app
            .next_deadline()
            .map(|deadline| Duration::from_millis(deadline.saturating_sub(now)))
            .unwrap_or(IDLE_WAIT);

        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, clock.now_ms()),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, clock.now_ms()),
            Ok(AppEvent::SplashComplete) => app.on_splash_complete(),
            Ok(AppEvent::Redraw) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        app.on_timers_due(clock.now_ms());
    }

    app.teardown();
    drop(guard);
    Ok(())
}
