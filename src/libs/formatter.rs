//! Time formatting utilities for display.
//!
//! Elapsed work time is shown as "MM:SS" so the operator can watch seconds
//! advance on the running item; aggregate durations in the entries table use
//! the coarser "HH:MM" form.

use std::time::Duration;

/// Formats an elapsed work duration as "MM:SS".
///
/// Minutes are not wrapped at the hour: an item worked for 75 minutes shows
/// as "75:00". Whole seconds only.
///
/// # Examples
///
/// ```rust
/// use traq::libs::formatter::format_elapsed;
/// use std::time::Duration;
///
/// assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00");
/// assert_eq!(format_elapsed(Duration::from_secs(95)), "01:35");
/// assert_eq!(format_elapsed(Duration::from_secs(4500)), "75:00");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Formats a duration in whole seconds as "HH:MM".
///
/// Used for the entries table where second-level precision only adds noise.
/// Seconds are truncated, not rounded.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
}
