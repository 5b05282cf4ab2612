//! Event handling for the TUI
//!
//! Handles keyboard, mouse, and tick events. A background thread polls the
//! terminal and forwards events over a channel; ticks drive the timed
//! phases of the login screen and the drawers.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::SpendError;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler that polls for events
pub struct EventHandler {
    receiver: Receiver<Event>,
    #[allow(dead_code)]
    sender: Sender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let event_sender = sender.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();

            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                // The loop ends when the terminal stops answering or the
                // receiving side is gone.
                let Ok(ready) = event::poll(timeout) else {
                    return;
                };

                if ready {
                    let Ok(raw) = event::read() else {
                        return;
                    };
                    let forwarded = match raw {
                        // Only key presses, not releases or repeats
                        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                        _ => None,
                    };
                    if let Some(event) = forwarded {
                        if event_sender.send(event).is_err() {
                            return;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, sender }
    }

    /// Wait for the next event
    pub fn next(&self) -> anyhow::Result<Event> {
        self.receiver
            .recv()
            .map_err(|_| SpendError::Tui("terminal event channel closed".into()).into())
    }
}
