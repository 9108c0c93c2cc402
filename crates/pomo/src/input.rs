//! Keyboard input handling for the pomo TUI.
//!
//! This module provides event types and handlers for keyboard input,
//! terminal resizing, and countdown ticks.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pomo_core::Mode;

// ============================================================================
// Event Types
// ============================================================================

/// Events that the TUI can receive and process.
///
/// These events drive the main event loop and include both user input
/// and system-generated events.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input from the user.
    Key(KeyEvent),

    /// Terminal window resize event.
    Resize(u16, u16),

    /// One countdown tick from the tick source of the given generation.
    Tick(u64),
}

// ============================================================================
// Action Types
// ============================================================================

/// Actions that can result from user input.
///
/// These actions are returned by the input handler to signal what
/// the main loop should do in response to user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action required.
    None,

    /// Quit the application.
    Quit,
}

// ============================================================================
// Input Handler
// ============================================================================

/// Handles a keyboard event and updates application state accordingly.
///
/// Returns an `Action` indicating what the main loop should do in response.
///
/// # Key Bindings
///
/// | Key               | Action                                  |
/// |-------------------|-----------------------------------------|
/// | `Ctrl+C`          | Quit the application                    |
/// | `q`, `Q`          | Quit (closes the stats modal if open)   |
/// | `Space`, `Enter`  | Start / pause the countdown             |
/// | `r`, `R`          | Reset the countdown                     |
/// | `1`, `2`, `3`     | Focus / short break / long break        |
/// | `Tab`             | Next mode                               |
/// | `m`, `M`          | Toggle sound                            |
/// | `s`, `S`          | Open / close the stats modal            |
/// | `Esc`             | Close the stats modal                   |
/// | `h`, `l`, arrows  | Move the bar selection (stats modal)    |
///
/// While the stats modal is open, `Esc`/`s`/`q` close it and `h`/`l`/arrows
/// move the selection. Every other key behaves as usual, so the modal never
/// blocks the countdown.
#[must_use]
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    // Ignore key release reports on terminals that send them
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    // Handle Ctrl+C specially as an unconditional quit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Action::Quit;
    }

    if app.stats_visible {
        if let Some(action) = handle_stats_key(key.code, app) {
            return action;
        }
    }

    match key.code {
        // Quit keys
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            Action::Quit
        }

        // Countdown controls
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_run();
            Action::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset();
            Action::None
        }

        // Mode selection
        KeyCode::Char('1') => {
            app.select_mode(Mode::Focus);
            Action::None
        }
        KeyCode::Char('2') => {
            app.select_mode(Mode::ShortBreak);
            Action::None
        }
        KeyCode::Char('3') => {
            app.select_mode(Mode::LongBreak);
            Action::None
        }
        KeyCode::Tab => {
            app.cycle_mode();
            Action::None
        }

        // Utilities
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.toggle_sound();
            Action::None
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.open_stats();
            Action::None
        }

        // Unhandled keys
        _ => Action::None,
    }
}

/// Keys owned by the stats modal. Returns `None` to fall through.
fn handle_stats_key(code: KeyCode, app: &mut App) -> Option<Action> {
    match code {
        KeyCode::Esc
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('q')
        | KeyCode::Char('Q') => {
            app.close_stats();
            Some(Action::None)
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.select_next_day();
            Some(Action::None)
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.select_previous_day();
            Some(Action::None)
        }
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
