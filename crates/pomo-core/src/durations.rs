//! Per-mode countdown lengths.

use crate::{DomainError, DomainResult, Mode};
use serde::{Deserialize, Serialize};

/// Default focus length in seconds (25 minutes).
pub const DEFAULT_FOCUS_SECS: u32 = 25 * 60;

/// Default short break length in seconds (5 minutes).
pub const DEFAULT_SHORT_BREAK_SECS: u32 = 5 * 60;

/// Default long break length in seconds (15 minutes).
pub const DEFAULT_LONG_BREAK_SECS: u32 = 15 * 60;

/// Mapping from [`Mode`] to its countdown length in seconds.
///
/// Every entry is positive. The table is fixed once a timer is built from it.
/// Deserialization goes through [`DurationTable::new`], so zero entries are
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDurationTable")]
pub struct DurationTable {
    focus: u32,
    short_break: u32,
    long_break: u32,
}

impl DurationTable {
    /// Creates a table from explicit second counts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` for the first zero entry.
    pub fn new(focus: u32, short_break: u32, long_break: u32) -> DomainResult<Self> {
        let table = Self {
            focus,
            short_break,
            long_break,
        };
        for mode in Mode::ALL {
            let seconds = table.get(mode);
            if seconds == 0 {
                return Err(DomainError::InvalidDuration { mode, seconds });
            }
        }
        Ok(table)
    }

    /// Creates a table from minute counts, saturating on overflow.
    pub fn from_minutes(focus: u32, short_break: u32, long_break: u32) -> DomainResult<Self> {
        Self::new(
            focus.saturating_mul(60),
            short_break.saturating_mul(60),
            long_break.saturating_mul(60),
        )
    }

    /// Countdown length for `mode`, in seconds.
    pub fn get(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }
}

/// Unvalidated wire form of [`DurationTable`].
#[derive(Deserialize)]
struct RawDurationTable {
    focus: u32,
    short_break: u32,
    long_break: u32,
}

impl TryFrom<RawDurationTable> for DurationTable {
    type Error = DomainError;

    fn try_from(raw: RawDurationTable) -> DomainResult<Self> {
        Self::new(raw.focus, raw.short_break, raw.long_break)
    }
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            focus: DEFAULT_FOCUS_SECS,
            short_break: DEFAULT_SHORT_BREAK_SECS,
            long_break: DEFAULT_LONG_BREAK_SECS,
        }
    }
}
