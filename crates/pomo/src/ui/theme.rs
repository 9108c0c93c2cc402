//! Shared theme utilities for the pomo TUI.
//!
//! Each mode has its own accent colour, used for the progress ring, the
//! header border and the selected mode button.

use pomo_core::Mode;
use ratatui::style::{Color, Modifier, Style};

/// Rose, used while focusing.
pub const FOCUS_COLOR: Color = Color::Rgb(0xf4, 0x3f, 0x5e);

/// Teal, used for short breaks.
pub const SHORT_BREAK_COLOR: Color = Color::Rgb(0x14, 0xb8, 0xa6);

/// Indigo, used for long breaks.
pub const LONG_BREAK_COLOR: Color = Color::Rgb(0x63, 0x66, 0xf1);

/// Unfilled part of the progress ring.
pub const RING_TRACK_COLOR: Color = Color::Rgb(60, 60, 60);

/// Returns the accent colour for a mode.
pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Focus => FOCUS_COLOR,
        Mode::ShortBreak => SHORT_BREAK_COLOR,
        Mode::LongBreak => LONG_BREAK_COLOR,
    }
}

/// Style for the countdown digits.
///
/// Bold while running so the active state is visible at a glance.
pub fn time_style(is_running: bool) -> Style {
    let style = Style::default().fg(Color::White);
    if is_running {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Style for a mode button, inverted when it is the current mode.
pub fn mode_button_style(mode: Mode, current: Mode) -> Style {
    if mode == current {
        Style::default()
            .fg(Color::Black)
            .bg(mode_color(mode))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_colors_are_distinct() {
        assert_eq!(mode_color(Mode::Focus), FOCUS_COLOR);
        assert_eq!(mode_color(Mode::ShortBreak), SHORT_BREAK_COLOR);
        assert_eq!(mode_color(Mode::LongBreak), LONG_BREAK_COLOR);
        assert_ne!(FOCUS_COLOR, SHORT_BREAK_COLOR);
        assert_ne!(SHORT_BREAK_COLOR, LONG_BREAK_COLOR);
    }

    #[test]
    fn test_time_style_bold_when_running() {
        assert!(time_style(true).add_modifier.contains(Modifier::BOLD));
        assert!(!time_style(false).add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_mode_button_style() {
        let selected = mode_button_style(Mode::ShortBreak, Mode::ShortBreak);
        assert_eq!(selected.bg, Some(SHORT_BREAK_COLOR));

        let other = mode_button_style(Mode::Focus, Mode::ShortBreak);
        assert_eq!(other.fg, Some(Color::DarkGray));
        assert_eq!(other.bg, None);
    }
}
