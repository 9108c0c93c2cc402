//! Pure formatting helpers for the countdown display.

/// Formats a second count as `MM:SS`.
///
/// Minutes are zero-padded to two digits and grow past two digits for
/// countdowns of 100 minutes or more.
pub fn format_time(remaining_seconds: u32) -> String {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Fraction of the countdown still remaining, in `[0.0, 1.0]`.
///
/// 1.0 is a full ring at the start of a countdown and 0.0 an empty ring at
/// completion. A zero `total_seconds` yields 0.0.
pub fn progress_fraction(remaining_seconds: u32, total_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 0.0;
    }
    (f64::from(remaining_seconds) / f64::from(total_seconds)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(59), "00:59");
    }

    #[test]
    fn test_format_time_long_countdown() {
        assert_eq!(format_time(100 * 60 + 7), "100:07");
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(1500, 1500), 1.0);
        assert_eq!(progress_fraction(0, 1500), 0.0);
        assert_eq!(progress_fraction(750, 1500), 0.5);
    }

    #[test]
    fn test_progress_fraction_degenerate_inputs() {
        assert_eq!(progress_fraction(10, 0), 0.0);
        assert_eq!(progress_fraction(3000, 1500), 1.0);
    }
}
