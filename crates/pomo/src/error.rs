//! Error types for the pomo TUI.
//!
//! This module defines TUI-specific errors that can occur during terminal
//! initialization and configuration loading. Audio failures have their own
//! type in [`crate::notifier`] because they never leave the notifier.
//!
//! **Panic-Free Policy:** This module follows the project's panic-free guidelines.
//! No `.unwrap()`, `.expect()`, `panic!()`, `unreachable!()`, or `todo!()`.

use pomo_core::DomainError;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// TUI Error Type
// ============================================================================

/// TUI application errors.
///
/// Represents all errors that can stop the pomo TUI from starting or
/// exiting cleanly. The countdown itself never fails.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Failed to initialize the terminal.
    ///
    /// Common causes include running in a non-TTY environment (pipes,
    /// scripts) or an unsupported terminal emulator.
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    /// Failed to cleanup/restore the terminal.
    ///
    /// The terminal may be left in an inconsistent state; running `reset`
    /// can help recover.
    #[error("Failed to restore terminal: {0}")]
    TerminalCleanup(String),

    /// The configuration file could not be read or parsed.
    #[error("Invalid config {path:?}: {reason}")]
    Config {
        /// File that was being loaded.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Configured durations were rejected by the domain.
    #[error("Invalid durations: {0}")]
    Domain(#[from] DomainError),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Convenience Result type alias for TUI operations.
pub type Result<T> = std::result::Result<T, TuiError>;

// ============================================================================
// Tests
// ============================================================================
