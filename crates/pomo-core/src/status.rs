//! Human-readable status line derived from the timer state.

use crate::TimerState;
use std::fmt;

/// What the user should be doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Focus countdown running
    Focusing,
    /// Break countdown running
    Relaxing,
    /// Countdown reached zero and was not restarted
    Done,
    /// Idle with time left on the clock
    Ready,
}

impl Status {
    /// Derives the status from a timer snapshot.
    pub fn from_state(state: &TimerState) -> Self {
        if state.is_running {
            if state.mode.is_break() {
                Self::Relaxing
            } else {
                Self::Focusing
            }
        } else if state.remaining_seconds == 0 {
            Self::Done
        } else {
            Self::Ready
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Focusing => "Stay focused...",
            Self::Relaxing => "Take a breather...",
            Self::Done => "Done!",
            Self::Ready => "Ready?",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
