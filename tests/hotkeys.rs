#[cfg(test)]
mod tests {
    use rdev::Key;
    use std::time::{Duration, Instant};
    use traq::libs::hotkeys::{Chord, ChordTracker, CHORD_DEBOUNCE};
    use traq::libs::tracker::TrackerCommand;

    fn held_chords() -> ChordTracker {
        let mut tracker = ChordTracker::new();
        let now = Instant::now();
        tracker.on_key_press(Key::Alt, now);
        tracker.on_key_press(Key::ShiftLeft, now);
        tracker
    }

    #[test]
    fn test_no_chord_without_modifiers() {
        let mut tracker = ChordTracker::new();
        let now = Instant::now();
        assert_eq!(tracker.on_key_press(Key::KeyD, now), None);
        assert_eq!(tracker.on_key_press(Key::KeyS, now), None);
    }

    #[test]
    fn test_single_modifier_is_not_enough() {
        let mut tracker = ChordTracker::new();
        let now = Instant::now();
        tracker.on_key_press(Key::Alt, now);
        assert_eq!(tracker.on_key_press(Key::KeyD, now), None);

        let mut tracker = ChordTracker::new();
        tracker.on_key_press(Key::ShiftRight, now);
        assert_eq!(tracker.on_key_press(Key::KeyP, now), None);
    }

    #[test]
    fn test_chords_fire_with_both_modifiers() {
        let mut tracker = held_chords();
        let now = Instant::now();
        assert_eq!(tracker.on_key_press(Key::KeyD, now), Some(Chord::Complete));
        assert_eq!(tracker.on_key_press(Key::KeyS, now), Some(Chord::StartNext));
        assert_eq!(tracker.on_key_press(Key::KeyP, now), Some(Chord::TogglePause));
    }

    #[test]
    fn test_debounce_swallows_key_repeat() {
        let mut tracker = held_chords();
        let t0 = Instant::now();
        assert_eq!(tracker.on_key_press(Key::KeyD, t0), Some(Chord::Complete));

        // OS key repeat arrives every few tens of milliseconds.
        assert_eq!(tracker.on_key_press(Key::KeyD, t0 + Duration::from_millis(40)), None);
        assert_eq!(tracker.on_key_press(Key::KeyD, t0 + Duration::from_millis(450)), None);
        assert_eq!(tracker.on_key_press(Key::KeyD, t0 + CHORD_DEBOUNCE), Some(Chord::Complete));
    }

    #[test]
    fn test_debounce_is_per_chord() {
        let mut tracker = held_chords();
        let t0 = Instant::now();
        assert_eq!(tracker.on_key_press(Key::KeyD, t0), Some(Chord::Complete));
        // A different chord right after is a deliberate action, not repeat.
        assert_eq!(tracker.on_key_press(Key::KeyS, t0 + Duration::from_millis(50)), Some(Chord::StartNext));
    }

    #[test]
    fn test_release_clears_modifier_state() {
        let mut tracker = held_chords();
        let now = Instant::now();
        tracker.on_key_release(Key::ShiftLeft);
        assert_eq!(tracker.on_key_press(Key::KeyD, now), None);

        tracker.on_key_press(Key::ShiftRight, now);
        assert_eq!(tracker.on_key_press(Key::KeyD, now), Some(Chord::Complete));
    }

    #[test]
    fn test_chord_to_command_mapping() {
        assert_eq!(Chord::Complete.command(), TrackerCommand::Complete);
        assert_eq!(Chord::StartNext.command(), TrackerCommand::StartNext);
        assert_eq!(Chord::TogglePause.command(), TrackerCommand::TogglePause);
    }
}
