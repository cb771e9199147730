use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::shutdown::StopSignal;

/// Spawn a thread that watches the terminal for stop keys (End, Esc, q).
///
/// Polling uses a short timeout so the thread also notices a stop
/// requested elsewhere (ctrl-c handler) and exits.
pub fn spawn_key_watcher(stop: Arc<StopSignal>) -> JoinHandle<()> {
    thread::spawn(move || {
        debug!("Key watcher started");

        while !stop.is_requested() {
            if event::poll(Duration::from_millis(100)).unwrap_or(false)
                && let Ok(Event::Key(key)) = event::read()
                && is_stop_key(&key)
            {
                debug!("Stop key pressed: {:?}", key.code);
                stop.request();
                break;
            }
        }

        debug!("Key watcher stopped");
    })
}

/// Check whether the key event should stop the overlay.
fn is_stop_key(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::End | KeyCode::Esc => true,
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => false,
    }
}
