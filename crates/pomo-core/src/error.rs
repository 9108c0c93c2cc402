//! Domain-specific error types following panic-free policy.

use crate::Mode;
use thiserror::Error;

/// Errors that can occur when building domain values.
///
/// Timer transitions themselves are total; only configuration can be invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A mode was configured with a zero-length countdown
    #[error("Invalid duration for {mode}: {seconds}s (expected a positive number of seconds)")]
    InvalidDuration { mode: Mode, seconds: u32 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_duration_display() {
        let error = DomainError::InvalidDuration {
            mode: Mode::LongBreak,
            seconds: 0,
        };
        let display = format!("{error}");
        assert!(display.contains("Long Break"));
        assert!(display.contains("0s"));
    }
}
