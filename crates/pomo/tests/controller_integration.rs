//! Integration tests for the root controller.
//!
//! These drive [`App`] through complete focus/break cycles the way the event
//! loop does: key events in through `handle_key_event`, ticks in through
//! `on_tick`.
//!
//! Tests CAN use `.unwrap()` and `.expect()` - this is allowed.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pomo_core::{DurationTable, Mode, Status};
use pomo_tui::input::{handle_key_event, Action, Event};
use pomo_tui::notifier::RecordingNotifier;
use pomo_tui::scheduler::{IntervalScheduler, ManualScheduler};
use pomo_tui::{App, Config};
use tokio::sync::mpsc;
use tokio::time::timeout;

// ============================================================================
// Test Helpers
// ============================================================================

/// Short countdowns: 3s focus, 2s short break, 4s long break.
fn short_durations() -> DurationTable {
    DurationTable::new(3, 2, 4).expect("valid durations")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> Action {
    handle_key_event(key(code), app)
}

/// App wired to fakes, plus handles to inspect them.
fn create_app(durations: DurationTable) -> (App, ManualScheduler, RecordingNotifier) {
    let scheduler = ManualScheduler::new();
    let notifier = RecordingNotifier::new();
    let app = App::new(
        durations,
        Box::new(scheduler.clone()),
        Box::new(notifier.clone()),
    );
    (app, scheduler, notifier)
}

/// Delivers `count` ticks of the scheduler's active generation.
fn run_ticks(app: &mut App, scheduler: &ManualScheduler, count: u32) {
    for _ in 0..count {
        let generation = scheduler
            .active_generation()
            .expect("tick source should be active");
        app.on_tick(generation);
    }
}

// ============================================================================
// Full Cycle Tests
// ============================================================================

#[test]
fn test_focus_break_focus_cycle() {
    let (mut app, scheduler, notifier) = create_app(short_durations());
    assert_eq!(app.status(), Status::Ready);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.status(), Status::Focusing);
    run_ticks(&mut app, &scheduler, 3);

    assert_eq!(app.mode(), Mode::ShortBreak);
    assert_eq!(app.state().remaining_seconds, 2);
    assert!(!app.state().is_running);
    assert_eq!(scheduler.active_generation(), None);
    assert_eq!(notifier.count(), 1);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.status(), Status::Relaxing);
    run_ticks(&mut app, &scheduler, 2);

    assert_eq!(app.mode(), Mode::Focus);
    assert_eq!(app.state().remaining_seconds, 3);
    assert_eq!(notifier.count(), 2);
}

#[test]
fn test_long_break_returns_to_focus() {
    let (mut app, scheduler, notifier) = create_app(short_durations());

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.formatted_time(), "00:04");

    press(&mut app, KeyCode::Char(' '));
    run_ticks(&mut app, &scheduler, 4);

    assert_eq!(app.mode(), Mode::Focus);
    assert_eq!(app.formatted_time(), "00:03");
    assert_eq!(notifier.count(), 1);
}

#[test]
fn test_muted_completion_still_switches_mode() {
    let (mut app, scheduler, notifier) = create_app(short_durations());

    press(&mut app, KeyCode::Char('m'));
    assert!(!app.sound_enabled);

    press(&mut app, KeyCode::Char(' '));
    run_ticks(&mut app, &scheduler, 3);

    assert_eq!(app.mode(), Mode::ShortBreak);
    assert_eq!(notifier.count(), 0);
}

#[test]
fn test_pause_resume_keeps_remaining() {
    let (mut app, scheduler, _notifier) = create_app(short_durations());

    press(&mut app, KeyCode::Char(' '));
    run_ticks(&mut app, &scheduler, 1);
    press(&mut app, KeyCode::Char(' '));

    assert_eq!(app.status(), Status::Ready);
    assert_eq!(app.state().remaining_seconds, 2);
    assert_eq!(scheduler.active_generation(), None);

    press(&mut app, KeyCode::Char(' '));
    run_ticks(&mut app, &scheduler, 2);
    assert_eq!(app.mode(), Mode::ShortBreak);
}

// ============================================================================
// Stale Tick Tests
// ============================================================================

#[test]
fn test_switch_mode_mid_countdown_drops_pending_tick() {
    let (mut app, scheduler, notifier) = create_app(short_durations());

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char(' '));
    let pending = scheduler.active_generation().unwrap();
    app.on_tick(pending);
    assert_eq!(app.state().remaining_seconds, 1);

    press(&mut app, KeyCode::Char('3'));
    // A tick queued before the switch arrives late
    app.on_tick(pending);

    assert_eq!(app.mode(), Mode::LongBreak);
    assert_eq!(app.state().remaining_seconds, 4);
    assert!(!app.state().is_running);
    assert_eq!(notifier.count(), 0);
}

#[test]
fn test_reset_drops_pending_tick() {
    let (mut app, scheduler, _notifier) = create_app(short_durations());

    press(&mut app, KeyCode::Char(' '));
    let pending = scheduler.active_generation().unwrap();
    press(&mut app, KeyCode::Char('r'));
    app.on_tick(pending);

    assert_eq!(app.state().remaining_seconds, 3);
    assert_eq!(app.status(), Status::Ready);
}

#[test]
fn test_ticks_after_completion_do_not_start_next_countdown() {
    let (mut app, scheduler, notifier) = create_app(short_durations());

    press(&mut app, KeyCode::Char(' '));
    let generation = scheduler.active_generation().unwrap();
    for _ in 0..10 {
        app.on_tick(generation);
    }

    assert_eq!(app.mode(), Mode::ShortBreak);
    assert_eq!(app.state().remaining_seconds, 2);
    assert_eq!(notifier.count(), 1);
}

// ============================================================================
// Stats Modal Tests
// ============================================================================

#[test]
fn test_stats_modal_does_not_block_countdown() {
    let (mut app, scheduler, _notifier) = create_app(short_durations());

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('s'));
    assert!(app.stats_visible);

    run_ticks(&mut app, &scheduler, 1);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Esc);

    assert!(!app.stats_visible);
    assert!(app.state().is_running);
    assert_eq!(app.state().remaining_seconds, 2);
}

#[test]
fn test_quit_from_main_view() {
    let (mut app, scheduler, _notifier) = create_app(short_durations());

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    assert_eq!(scheduler.active_generation(), None);
}

// ============================================================================
// Config-Driven Tests
// ============================================================================

#[test]
fn test_config_durations_drive_countdown() {
    let mut config = Config::default();
    config.durations.focus = 1;
    config.durations.short_break = 2;

    let (mut app, scheduler, _notifier) = create_app(config.duration_table().unwrap());
    assert_eq!(app.formatted_time(), "01:00");

    press(&mut app, KeyCode::Char(' '));
    run_ticks(&mut app, &scheduler, 60);

    assert_eq!(app.mode(), Mode::ShortBreak);
    assert_eq!(app.formatted_time(), "02:00");
}

#[test]
fn test_config_zero_duration_rejected() {
    let mut config = Config::default();
    config.durations.long_break = 0;
    assert!(config.duration_table().is_err());
}

// ============================================================================
// Real Tick Source Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_interval_scheduler_drives_full_countdown() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let notifier = RecordingNotifier::new();
    let mut app = App::new(
        short_durations(),
        Box::new(IntervalScheduler::with_default_period(event_tx)),
        Box::new(notifier.clone()),
    );

    app.toggle_run();
    for _ in 0..3 {
        match event_rx.recv().await {
            Some(Event::Tick(generation)) => app.on_tick(generation),
            other => panic!("expected tick, got {other:?}"),
        }
    }

    assert_eq!(app.mode(), Mode::ShortBreak);
    assert_eq!(notifier.count(), 1);

    // Completion cancelled the tick source
    let next = timeout(Duration::from_secs(5), event_rx.recv()).await;
    assert!(next.is_err(), "no tick expected after completion");
}

#[tokio::test(start_paused = true)]
async fn test_interval_scheduler_pause_stops_ticks() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let mut app = App::new(
        short_durations(),
        Box::new(IntervalScheduler::with_default_period(event_tx)),
        Box::new(RecordingNotifier::new()),
    );

    app.toggle_run();
    if let Some(Event::Tick(generation)) = event_rx.recv().await {
        app.on_tick(generation);
    }
    app.toggle_run();

    let next = timeout(Duration::from_secs(5), event_rx.recv()).await;
    assert!(next.is_err(), "no tick expected while paused");
    assert_eq!(app.state().remaining_seconds, 2);
}
