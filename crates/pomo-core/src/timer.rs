//! Countdown state machine.
//!
//! The [`Timer`] owns the current mode, the remaining seconds and the
//! running flag. It is mutated only through four transitions:
//! [`Timer::switch_mode`], [`Timer::toggle_run`], [`Timer::reset`] and
//! [`Timer::tick`]. Reacting to a completion (sound, auto-advance) is the
//! controller's job; the timer only reports it via [`TickOutcome`].

use crate::{DurationTable, Mode};
use tracing::debug;

// ============================================================================
// State Snapshot
// ============================================================================

/// Read-only snapshot of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Current mode.
    pub mode: Mode,

    /// Seconds left in the current countdown. Never above the mode's duration.
    pub remaining_seconds: u32,

    /// Whether the countdown is advancing.
    pub is_running: bool,
}

/// Result of applying one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    Ignored,

    /// One second was taken off; the countdown continues.
    Counting {
        /// Seconds left after this tick.
        remaining_seconds: u32,
    },

    /// This tick brought the countdown to zero. Reported once per countdown.
    Completed {
        /// Mode whose countdown just finished.
        finished: Mode,
    },
}

// ============================================================================
// Timer
// ============================================================================

/// The countdown state machine.
#[derive(Debug, Clone)]
pub struct Timer {
    durations: DurationTable,
    state: TimerState,
}

impl Timer {
    /// Creates an idle timer in [`Mode::Focus`] with a full countdown.
    pub fn new(durations: DurationTable) -> Self {
        let mode = Mode::Focus;
        Self {
            durations,
            state: TimerState {
                mode,
                remaining_seconds: durations.get(mode),
                is_running: false,
            },
        }
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// True once the countdown has reached zero and not been reset.
    pub fn is_finished(&self) -> bool {
        self.state.remaining_seconds == 0
    }

    /// Full length of the current mode's countdown, in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.durations.get(self.state.mode)
    }

    /// The duration table this timer was built with.
    pub fn durations(&self) -> &DurationTable {
        &self.durations
    }

    /// Switches to `mode` with a full, stopped countdown. Valid from any state.
    pub fn switch_mode(&mut self, mode: Mode) {
        debug!(from = %self.state.mode, to = %mode, "Switching mode");
        self.state = TimerState {
            mode,
            remaining_seconds: self.durations.get(mode),
            is_running: false,
        };
    }

    /// Starts or pauses the countdown.
    ///
    /// A finished countdown (zero remaining) cannot be started; the call is
    /// a no-op until the timer is reset or switched. Returns the new running
    /// flag.
    pub fn toggle_run(&mut self) -> bool {
        if self.is_finished() {
            debug!(mode = %self.state.mode, "Ignoring toggle on finished countdown");
            return false;
        }
        self.state.is_running = !self.state.is_running;
        self.state.is_running
    }

    /// Stops the countdown and refills it for the current mode.
    pub fn reset(&mut self) {
        self.state.is_running = false;
        self.state.remaining_seconds = self.durations.get(self.state.mode);
    }

    /// Takes one second off a running countdown, floored at zero.
    ///
    /// The running flag is cleared on the tick that reaches zero, so
    /// `Completed` can only be reported once per countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running {
            return TickOutcome::Ignored;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);

        if self.state.remaining_seconds == 0 {
            self.state.is_running = false;
            TickOutcome::Completed {
                finished: self.state.mode,
            }
        } else {
            TickOutcome::Counting {
                remaining_seconds: self.state.remaining_seconds,
            }
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(DurationTable::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
