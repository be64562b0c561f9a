#[cfg(test)]
mod tests {
    use std::time::Duration;
    use traq::libs::formatter::{format_duration, format_elapsed};

    #[test]
    fn test_format_elapsed_zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
    }

    #[test]
    fn test_format_elapsed_seconds_only() {
        assert_eq!(format_elapsed(Duration::from_secs(5)), "00:05");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "00:59");
    }

    #[test]
    fn test_format_elapsed_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::from_secs(95)), "01:35");
        assert_eq!(format_elapsed(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn test_format_elapsed_does_not_wrap_at_hour() {
        assert_eq!(format_elapsed(Duration::from_secs(4500)), "75:00");
        assert_eq!(format_elapsed(Duration::from_secs(3661)), "61:01");
    }

    #[test]
    fn test_format_elapsed_truncates_subseconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1999)), "00:01");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(59), "00:00");
        assert_eq!(format_duration(60), "00:01");
        assert_eq!(format_duration(3600), "01:00");
        assert_eq!(format_duration(30600), "08:30");
    }

    #[test]
    fn test_format_duration_clamps_negative() {
        assert_eq!(format_duration(-42), "00:00");
    }
}
