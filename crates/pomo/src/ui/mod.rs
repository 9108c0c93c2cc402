//! UI rendering module for the pomo TUI.
//!
//! Orchestrates the layout and the individual widgets. Rendering is a pure
//! function of [`App`]: nothing here mutates state.
//!
//! # Layout Structure
//!
//! ```text
//! +--------------------------------------------------+
//! |  Header: Title and Status Message                |  <- 3 lines
//! +--------------------------------------------------+
//! |                   .-"""-.                        |
//! |                 /  25:00  \                      |  <- fills remaining
//! |                 \  Focus  /                      |
//! |                   '-...-'                        |
//! +--------------------------------------------------+
//! |  [1 Focus]   2 Short Break   3 Long Break        |  <- 3 lines
//! +--------------------------------------------------+
//! |  Footer: Keybinding Hints                        |  <- 3 lines
//! +--------------------------------------------------+
//! ```
//!
//! The stats modal is drawn last, on top of everything else.

pub mod layout;
pub mod mode_selector;
pub mod stats_panel;
pub mod status_bar;
pub mod theme;
pub mod timer_display;

use crate::app::App;
use layout::AppLayout;
use ratatui::Frame;

// Re-export commonly used items
pub use mode_selector::render_mode_selector;
pub use stats_panel::render_stats_panel;
pub use status_bar::{render_footer, render_header};
pub use timer_display::render_timer;

/// Renders the complete TUI interface.
///
/// # Example
///
/// ```ignore
/// terminal.draw(|frame| {
///     ui::render(frame, &app);
/// })?;
/// ```
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header, app);
    render_timer(frame, layout.timer, app);
    render_mode_selector(frame, layout.modes, app);
    render_footer(frame, layout.footer, app);

    if app.stats_visible {
        render_stats_panel(frame, frame.area(), app);
    }
}
