//! Timer modes and the auto-advance policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Countdown mode.
///
/// Each mode has its own default duration (see [`crate::DurationTable`])
/// and its own colour theme in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Work interval (25 minutes by default)
    Focus,

    /// Short pause between focus intervals (5 minutes by default)
    ShortBreak,

    /// Long pause (15 minutes by default)
    LongBreak,
}

impl Mode {
    /// All modes in selector order.
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    /// Returns a human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Returns true for either break mode.
    pub fn is_break(&self) -> bool {
        !matches!(self, Self::Focus)
    }

    /// Mode to switch to after a countdown in this mode completes.
    ///
    /// Focus always goes to a short break and every break returns to
    /// focus. Long breaks are never entered automatically.
    pub fn next_after_completion(&self) -> Mode {
        match self {
            Self::Focus => Self::ShortBreak,
            Self::ShortBreak | Self::LongBreak => Self::Focus,
        }
    }

    /// Next mode in selector order, wrapping around.
    pub fn cycle(&self) -> Mode {
        match self {
            Self::Focus => Self::ShortBreak,
            Self::ShortBreak => Self::LongBreak,
            Self::LongBreak => Self::Focus,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Focus
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
