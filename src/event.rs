use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::net::chat_api::ChatOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(#[allow(dead_code)] u16, #[allow(dead_code)] u16),
    /// Delivered by the chat worker thread when an outbound request ends.
    ChatReply(ChatOutcome),
}

/// Fans terminal input and worker replies into one channel. The input thread
/// doubles as the tick source so the UI loop never blocks on a quiet
/// terminal.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();

        thread::spawn(move || {
            loop {
                let next = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Resize(w, h)) => Some(AppEvent::Resize(w, h)),
                        _ => None,
                    },
                    // Poll timeout and poll failure both degrade to a tick.
                    _ => Some(AppEvent::Tick),
                };
                if let Some(ev) = next {
                    if input_tx.send(ev).is_err() {
                        // Receiver dropped: the UI loop is gone.
                        return;
                    }
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }

    /// Cloneable handle for worker threads that report back into the loop.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
