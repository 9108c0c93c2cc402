//! Header and footer status bar widgets for the pomo TUI.
//!
//! The status bar provides:
//! - Header: Application title and the current status message
//! - Footer: Keybinding hints and the sound indicator

use crate::app::App;
use crate::ui::theme::mode_color;
use pomo_core::Status;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the header bar with title and status message.
///
/// The border takes the current mode's accent colour.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let accent = mode_color(app.mode());
    let status = app.status();

    let header_line = Line::from(vec![
        Span::styled(
            "pomo",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - minimal pomodoro | "),
        Span::styled(status.message(), status_style(status)),
    ]);

    let header = Paragraph::new(header_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    );

    frame.render_widget(header, area);
}

/// Renders the footer bar with keybinding hints.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let sep_style = Style::default().fg(Color::DarkGray);

    let run_hint = if app.state().is_running {
        " pause"
    } else {
        " start"
    };

    let mut hints = vec![
        Span::styled(" space", key_style),
        Span::raw(run_hint),
        Span::styled("  |  ", sep_style),
        Span::styled("r", key_style),
        Span::raw(" reset"),
        Span::styled("  |  ", sep_style),
        Span::styled("1-3", key_style),
        Span::raw(" mode"),
        Span::styled("  |  ", sep_style),
        Span::styled("s", key_style),
        Span::raw(" stats"),
        Span::styled("  |  ", sep_style),
        Span::styled("m", key_style),
    ];

    if app.sound_enabled {
        hints.push(Span::raw(" sound on"));
    } else {
        hints.push(Span::styled(" muted", Style::default().fg(Color::Yellow)));
    }

    hints.push(Span::styled("  |  ", sep_style));
    hints.push(Span::styled("q", key_style));
    hints.push(Span::raw(" quit"));

    let footer = Paragraph::new(Line::from(hints)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

/// Returns the style for a status message.
fn status_style(status: Status) -> Style {
    match status {
        Status::Focusing | Status::Relaxing => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Status::Done => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Status::Ready => Style::default().fg(Color::Gray),
    }
}
