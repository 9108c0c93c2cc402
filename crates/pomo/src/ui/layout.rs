//! Layout helpers for the pomo TUI.
//!
//! Provides the main application layout and a helper for positioning the
//! stats popup.

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Main application layout areas.
///
/// The TUI is divided into four vertical sections:
/// - Header (3 lines): Title and status message
/// - Timer (fills remaining): Progress ring with the countdown
/// - Modes (3 lines): Mode selector
/// - Footer (3 lines): Keybinding help
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area for title and status
    pub header: Rect,
    /// Progress ring and countdown text
    pub timer: Rect,
    /// Mode selector row
    pub modes: Rect,
    /// Footer area for keybindings
    pub footer: Rect,
}

impl AppLayout {
    /// Creates a new AppLayout by splitting the given area.
    pub fn new(area: Rect) -> Self {
        let [header, timer, modes, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Timer (minimum 8 lines)
                Constraint::Length(3), // Modes
                Constraint::Length(3), // Footer
            ])
            .areas(area);

        Self {
            header,
            timer,
            modes,
            footer,
        }
    }
}

/// Returns a rectangle of at most `width` x `height` centred in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
