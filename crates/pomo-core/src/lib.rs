//! pomo Core - Domain types for the pomodoro timer
//!
//! This crate provides the timer state machine and the pure
//! presentation helpers shared by the TUI (pomo-tui) and the binary.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

pub mod display;
pub mod durations;
pub mod error;
pub mod mode;
pub mod stats;
pub mod status;
pub mod timer;

// Re-exports for convenience
pub use display::{format_time, progress_fraction};
pub use durations::DurationTable;
pub use error::{DomainError, DomainResult};
pub use mode::Mode;
pub use stats::{weekly_total_minutes, DailyStat, MockWeek, StatsSource};
pub use status::Status;
pub use timer::{TickOutcome, Timer, TimerState};
