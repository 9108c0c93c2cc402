//! Weekly statistics modal.
//!
//! Shows one bar per day with the exact minute count of the highlighted bar
//! underneath, plus the weekly total in hours. Purely a view: it reads the
//! statistics from [`App`] and never touches the countdown.

use crate::app::App;
use crate::ui::layout::centered_rect;
use crate::ui::theme::mode_color;
use pomo_core::DailyStat;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph},
    Frame,
};

/// Popup width in cells.
const POPUP_WIDTH: u16 = 56;

/// Popup height in cells.
const POPUP_HEIGHT: u16 = 18;

/// Weekly total formatted as hours with one decimal, e.g. `11.6 h`.
pub fn format_hours(minutes: u32) -> String {
    format!("{:.1} h", f64::from(minutes) / 60.0)
}

/// Detail line for the highlighted bar, e.g. `Thu: 200 min`.
pub fn selected_detail(stat: Option<&DailyStat>) -> String {
    match stat {
        Some(stat) => format!("{}: {} min", stat.label, stat.minutes),
        None => "No data".to_string(),
    }
}

fn bar_style(index: usize, selected: usize, highlight: Color) -> Style {
    if index == selected {
        Style::default().fg(highlight)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Builds one bar per day; the selected bar uses `highlight`.
fn build_bars(stats: &[DailyStat], selected: usize, highlight: Color) -> Vec<Bar<'static>> {
    stats
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            Bar::default()
                .value(u64::from(stat.minutes))
                .label(Line::from(stat.label.clone()))
                .text_value(stat.minutes.to_string())
                .style(bar_style(index, selected, highlight))
        })
        .collect()
}

/// Renders the stats modal centred over `area`.
pub fn render_stats_panel(frame: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Weekly focus (minutes) ")
        .title_bottom(Line::from(" h/l select  esc close ").alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [summary_area, chart_area, detail_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(inner);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(" This week: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_hours(app.weekly_total_minutes()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" focused", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(summary, summary_area);

    let highlight = mode_color(app.mode());
    let bars = build_bars(app.stats(), app.selected_day, highlight);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2)
        .value_style(Style::default().fg(Color::Black).bg(Color::Gray))
        .label_style(Style::default().fg(Color::Gray));
    frame.render_widget(chart, chart_area);

    let detail = Paragraph::new(Line::from(Span::styled(
        selected_detail(app.selected_stat()),
        Style::default().fg(highlight).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(detail, detail_area);
}
