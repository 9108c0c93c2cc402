//! Countdown widget: a circular progress ring with the remaining time and
//! mode label in its centre.
//!
//! The ring is drawn with braille points on a [`Canvas`]. Its filled arc
//! starts at 12 o'clock and runs clockwise over `fraction * 360` degrees, so
//! it shrinks as the countdown runs.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::app::App;
use crate::ui::theme::{mode_color, time_style, RING_TRACK_COLOR};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Ring radius in canvas units (the shorter axis spans -1..1).
const RING_RADIUS: f64 = 0.9;

/// Points used for a full circle.
const RING_STEPS: usize = 720;

/// Points along the arc covering `fraction` of a circle of `radius`.
///
/// Starts at the top and proceeds clockwise. An empty fraction yields no
/// points.
pub fn arc_points(fraction: f64, radius: f64, steps: usize) -> Vec<(f64, f64)> {
    let count = (fraction.clamp(0.0, 1.0) * steps as f64).round() as usize;
    (0..count)
        .map(|i| {
            let angle = FRAC_PI_2 - TAU * (i as f64) / (steps as f64);
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Canvas bounds that make a circle look round in a `width` x `height` cell
/// area.
///
/// Terminal cells are roughly twice as tall as they are wide, so the axis
/// with more room gets a wider range and the shorter one spans -1..1.
pub fn canvas_bounds(width: u16, height: u16) -> ([f64; 2], [f64; 2]) {
    if width == 0 || height == 0 {
        return ([-1.0, 1.0], [-1.0, 1.0]);
    }
    let aspect = f64::from(width) / (2.0 * f64::from(height));
    if aspect >= 1.0 {
        ([-aspect, aspect], [-1.0, 1.0])
    } else {
        ([-1.0, 1.0], [-1.0 / aspect, 1.0 / aspect])
    }
}

/// Renders the progress ring and countdown text into `area`.
pub fn render_timer(frame: &mut Frame, area: Rect, app: &App) {
    let accent = mode_color(app.mode());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (x_bounds, y_bounds) = canvas_bounds(inner.width, inner.height);
    let track = arc_points(1.0, RING_RADIUS, RING_STEPS);
    let arc = arc_points(app.progress(), RING_RADIUS, RING_STEPS);

    let ring = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &track,
                color: RING_TRACK_COLOR,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &arc,
                color: accent,
            });
        });
    frame.render_widget(ring, inner);

    let state = app.state();
    let label = Paragraph::new(vec![
        Line::from(Span::styled(app.formatted_time(), time_style(state.is_running))),
        Line::from(Span::styled(
            app.mode().label(),
            Style::default().fg(accent),
        )),
    ])
    .alignment(Alignment::Center);

    let [text_area] = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(inner);
    frame.render_widget(label, text_area);
}
