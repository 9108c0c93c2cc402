//! Mode selector row: one button per mode, the current one highlighted.

use crate::app::App;
use crate::ui::theme::mode_button_style;
use pomo_core::Mode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Builds the selector line, e.g. ` 1 Focus     2 Short Break     3 Long Break `.
pub fn mode_selector_line(current: Mode) -> Line<'static> {
    let mut spans = Vec::with_capacity(Mode::ALL.len() * 2);
    for (index, mode) in Mode::ALL.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!(" {} {} ", index + 1, mode.label()),
            mode_button_style(*mode, current),
        ));
    }
    Line::from(spans)
}

pub fn render_mode_selector(frame: &mut Frame, area: Rect, app: &App) {
    let selector = Paragraph::new(mode_selector_line(app.mode()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(selector, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::mode_color;

    #[test]
    fn test_selector_lists_all_modes_in_order() {
        let line = mode_selector_line(Mode::Focus);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " 1 Focus     2 Short Break     3 Long Break ");
    }

    #[test]
    fn test_selector_highlights_current_mode() {
        let line = mode_selector_line(Mode::LongBreak);
        let highlighted: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(mode_color(Mode::LongBreak)))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec![" 3 Long Break "]);
    }
}
