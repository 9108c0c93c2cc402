//! pomo TUI - Library modules
//!
//! This library provides the controller, side-effect ports and widgets of the
//! pomo terminal timer.
//!
//! # Architecture
//!
//! The TUI uses an event-driven architecture with three main components:
//!
//! 1. **Keyboard Task**: Polls for keyboard input and sends events to the main loop
//! 2. **Tick Task**: Owned by the [`scheduler::IntervalScheduler`], sends one
//!    tick per period while the countdown runs
//! 3. **Main Event Loop**: Processes events, updates state, and renders the UI
//!
//! All tasks respect a shared `CancellationToken` for graceful shutdown.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod notifier;
pub mod scheduler;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use config::Config;
pub use error::{Result, TuiError};
