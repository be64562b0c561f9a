//! Calendar shift labels.

/// Shift schedule: Morning 06:00-14:00, Afternoon 14:00-22:00, Night
/// 22:00-06:00 (overnight).
const SHIFT_SCHEDULE: &[(&str, u32, u32)] = &[("Morning", 6, 14), ("Afternoon", 14, 22), ("Night", 22, 6)];

/// Maps a clock hour (0-23) to its shift label. Plain table lookup.
pub fn shift_label(hour: u32) -> &'static str {
    for &(label, start, end) in SHIFT_SCHEDULE {
        if start < end {
            if (start..end).contains(&hour) {
                return label;
            }
        } else if hour >= start || hour < end {
            return label;
        }
    }
    "Morning"
}

/// Shift label for the local wall clock right now.
pub fn current_shift_label() -> &'static str {
    use chrono::Timelike;
    shift_label(chrono::Local::now().hour())
}
