use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

/// Poll timeout of the input thread; bounds how long shutdown takes.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized or otherwise needs repainting.
    Redraw,
    /// The splash intro finished; pages take over.
    SplashComplete,
}

/// Forwards terminal input to the UI thread over a channel.
///
/// The input thread never touches application state; it only translates
/// crossterm events into [`AppEvent`]s.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let worker = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                while !stop_flag.load(Ordering::Relaxed) {
                    match event::poll(POLL_INTERVAL) {
                        Ok(true) => {}
                        Ok(false) => continue,
                        Err(err) => {
                            tracing::error!("Terminal poll failed: {}", err);
                            break;
                        }
                    }

                    let forwarded = match event::read() {
                        Ok(Event::Key(key)) => AppEvent::Key(key),
                        Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                        Ok(Event::Resize(..)) | Ok(Event::FocusGained) => AppEvent::Redraw,
                        Ok(_) => continue,
                        Err(err) => {
                            tracing::error!("Terminal read failed: {}", err);
                            break;
                        }
                    };

                    if event_tx.send(forwarded).is_err() {
                        break;
                    }
                }
            })
            .map_err(|err| tracing::error!("Failed to spawn input thread: {}", err))
            .ok();

        Self {
            rx,
            tx,
            stop,
            worker,
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
