//! Global hotkey chords for queue control.
//!
//! Listens for three Alt+Shift chords on its own thread, independent of any
//! window focus: D completes the running item, S starts the next available
//! item, P toggles pause. Recognized chords are only ever posted as commands
//! into the tracker channel; the listener never touches queue state itself.
//!
//! Chord recognition and debouncing live in `ChordTracker`, a plain state
//! machine over key press/release events, so they can be tested without an
//! OS hook.

use crate::libs::tracker::TrackerCommand;
use crate::msg_debug;
use rdev::{listen, Event, EventType, Key};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;

/// Key-repeat while a chord is held fires press events every few tens of
/// milliseconds; one activation per half second is what an operator means.
pub const CHORD_DEBOUNCE: Duration = Duration::from_millis(500);

/// The three recognized Alt+Shift chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chord {
    Complete,
    StartNext,
    TogglePause,
}

impl Chord {
    pub fn command(self) -> TrackerCommand {
        match self {
            Chord::Complete => TrackerCommand::Complete,
            Chord::StartNext => TrackerCommand::StartNext,
            Chord::TogglePause => TrackerCommand::TogglePause,
        }
    }
}

/// Tracks modifier state and recognizes chords with per-chord debounce.
pub struct ChordTracker {
    alt_held: bool,
    shift_held: bool,
    last_fired: HashMap<Chord, Instant>,
}

impl Default for ChordTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordTracker {
    pub fn new() -> Self {
        Self {
            alt_held: false,
            shift_held: false,
            last_fired: HashMap::new(),
        }
    }

    /// Feeds a key press. Returns the chord to dispatch, if any.
    pub fn on_key_press(&mut self, key: Key, now: Instant) -> Option<Chord> {
        match key {
            Key::Alt | Key::AltGr => {
                self.alt_held = true;
                None
            }
            Key::ShiftLeft | Key::ShiftRight => {
                self.shift_held = true;
                None
            }
            Key::KeyD => self.fire(Chord::Complete, now),
            Key::KeyS => self.fire(Chord::StartNext, now),
            Key::KeyP => self.fire(Chord::TogglePause, now),
            _ => None,
        }
    }

    /// Feeds a key release, clearing modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Alt | Key::AltGr => self.alt_held = false,
            Key::ShiftLeft | Key::ShiftRight => self.shift_held = false,
            _ => {}
        }
    }

    fn fire(&mut self, chord: Chord, now: Instant) -> Option<Chord> {
        if !(self.alt_held && self.shift_held) {
            return None;
        }
        if let Some(last) = self.last_fired.get(&chord) {
            if now.saturating_duration_since(*last) < CHORD_DEBOUNCE {
                return None;
            }
        }
        self.last_fired.insert(chord, now);
        Some(chord)
    }
}

/// Runs the global key listener and marshals chords into the tracker.
pub struct HotkeyDispatcher {
    tx: UnboundedSender<TrackerCommand>,
}

impl HotkeyDispatcher {
    pub fn new(tx: UnboundedSender<TrackerCommand>) -> Self {
        Self { tx }
    }

    /// Spawns the listener thread. The thread exits once the tracker side
    /// of the channel is dropped.
    pub fn spawn(self) {
        std::thread::spawn(move || {
            loop {
                let tx = self.tx.clone();
                let mut chords = ChordTracker::new();
                if let Err(e) = listen(move |event: Event| match event.event_type {
                    EventType::KeyPress(key) => {
                        if let Some(chord) = chords.on_key_press(key, Instant::now()) {
                            let _ = tx.send(chord.command());
                        }
                    }
                    EventType::KeyRelease(key) => chords.on_key_release(key),
                    _ => {}
                }) {
                    msg_debug!(format!("Hotkey listener failed: {:?}, retrying in 1 second", e));
                    std::thread::sleep(Duration::from_secs(1));
                } else {
                    break;
                }
            }
        });
    }
}
