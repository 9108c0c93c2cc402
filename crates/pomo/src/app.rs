//! Root controller for the pomo TUI.
//!
//! [`App`] owns the countdown, the UI flags (sound, stats modal) and the two
//! side-effect ports (tick [`Scheduler`] and completion [`Notifier`]). Every
//! user intent and every tick goes through one of its methods, one at a
//! time, so the timer is never observed half-updated.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

use chrono::{Datelike, Local};
use pomo_core::{
    format_time, progress_fraction, weekly_total_minutes, DailyStat, DurationTable, MockWeek,
    Mode, StatsSource, Status, TickOutcome, Timer, TimerState,
};
use tracing::{debug, info};

use crate::notifier::Notifier;
use crate::scheduler::Scheduler;

// ============================================================================
// Application
// ============================================================================

/// Core application state for the pomo TUI.
pub struct App {
    /// The countdown state machine.
    timer: Timer,

    /// Whether completions play the alert.
    pub sound_enabled: bool,

    /// Whether the stats modal is open.
    pub stats_visible: bool,

    /// Weekly focus data shown in the stats modal.
    stats: Vec<DailyStat>,

    /// Index of the highlighted bar in the stats modal.
    pub selected_day: usize,

    /// Flag indicating the application should quit.
    pub should_quit: bool,

    /// Current tick generation; bumped on every start and stop.
    generation: u64,

    scheduler: Box<dyn Scheduler>,
    notifier: Box<dyn Notifier>,
}

impl App {
    /// Creates an idle Focus countdown with sound on and mock statistics.
    pub fn new(
        durations: DurationTable,
        scheduler: Box<dyn Scheduler>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let stats = MockWeek.weekly();
        let today = Local::now().weekday().num_days_from_monday() as usize;
        Self {
            timer: Timer::new(durations),
            sound_enabled: true,
            stats_visible: false,
            selected_day: today.min(stats.len().saturating_sub(1)),
            stats,
            should_quit: false,
            generation: 0,
            scheduler,
            notifier,
        }
    }

    /// Sets the initial sound toggle.
    #[must_use]
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Replaces the statistics with data from `source`.
    #[must_use]
    pub fn with_stats(mut self, source: &dyn StatsSource) -> Self {
        self.stats = source.weekly();
        self.clamp_day_selection();
        self
    }

    // ------------------------------------------------------------------------
    // Timer intents
    // ------------------------------------------------------------------------

    /// Starts or pauses the countdown.
    ///
    /// Starting opens a new tick generation; pausing cancels the tick source.
    /// A finished countdown stays idle.
    pub fn toggle_run(&mut self) {
        if self.timer.toggle_run() {
            self.start_ticks();
            info!(mode = %self.timer.mode(), remaining = self.timer.remaining_seconds(), "Countdown started");
        } else {
            self.stop_ticks();
            info!(mode = %self.timer.mode(), remaining = self.timer.remaining_seconds(), "Countdown paused");
        }
    }

    /// Stops and refills the current mode's countdown.
    pub fn reset(&mut self) {
        self.stop_ticks();
        self.timer.reset();
        info!(mode = %self.timer.mode(), "Countdown reset");
    }

    /// Switches to `mode` with a full, stopped countdown.
    pub fn select_mode(&mut self, mode: Mode) {
        self.stop_ticks();
        self.timer.switch_mode(mode);
        info!(mode = %mode, "Mode selected");
    }

    /// Switches to the next mode in selector order.
    pub fn cycle_mode(&mut self) {
        self.select_mode(self.timer.mode().cycle());
    }

    /// Applies a tick from the tick source tagged `generation`.
    ///
    /// Ticks from an older generation were queued before a pause, reset or
    /// mode switch and are dropped.
    pub fn on_tick(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Dropping stale tick");
            return;
        }

        match self.timer.tick() {
            TickOutcome::Completed { finished } => self.complete(finished),
            TickOutcome::Counting { .. } => {}
            TickOutcome::Ignored => {
                debug!(generation, "Tick while idle ignored");
            }
        }
    }

    /// Starts a tick source under a fresh generation.
    fn start_ticks(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.scheduler.start(self.generation);
    }

    /// Cancels the tick source and retires its generation, so ticks it
    /// already queued are recognised as stale.
    fn stop_ticks(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.scheduler.cancel();
    }

    /// Handles a countdown reaching zero: stop ticking, alert, auto-advance.
    fn complete(&mut self, finished: Mode) {
        self.stop_ticks();

        if self.sound_enabled {
            self.notifier.notify();
        }

        let next = finished.next_after_completion();
        self.timer.switch_mode(next);
        info!(finished = %finished, next = %next, "Countdown complete");
    }

    // ------------------------------------------------------------------------
    // UI flag intents
    // ------------------------------------------------------------------------

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        info!(sound = self.sound_enabled, "Sound toggled");
    }

    pub fn open_stats(&mut self) {
        self.stats_visible = true;
    }

    /// Closes the stats modal. Never touches the countdown.
    pub fn close_stats(&mut self) {
        self.stats_visible = false;
    }

    /// Highlights the next day, wrapping around.
    pub fn select_next_day(&mut self) {
        let count = self.stats.len();
        if count == 0 {
            self.selected_day = 0;
            return;
        }
        self.selected_day = (self.selected_day.saturating_add(1)) % count;
    }

    /// Highlights the previous day, wrapping around.
    pub fn select_previous_day(&mut self) {
        let count = self.stats.len();
        if count == 0 {
            self.selected_day = 0;
        } else if self.selected_day == 0 {
            self.selected_day = count.saturating_sub(1);
        } else {
            self.selected_day = self.selected_day.saturating_sub(1);
        }
    }

    fn clamp_day_selection(&mut self) {
        let count = self.stats.len();
        if count == 0 {
            self.selected_day = 0;
        } else if self.selected_day >= count {
            self.selected_day = count.saturating_sub(1);
        }
    }

    /// Sets the quit flag to true, signaling the application should exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
        self.stop_ticks();
    }

    // ------------------------------------------------------------------------
    // Derived view data
    // ------------------------------------------------------------------------

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn mode(&self) -> Mode {
        self.timer.mode()
    }

    /// Remaining time as `MM:SS`.
    pub fn formatted_time(&self) -> String {
        format_time(self.timer.remaining_seconds())
    }

    /// Remaining fraction of the current countdown, 1.0 when full.
    pub fn progress(&self) -> f64 {
        progress_fraction(self.timer.remaining_seconds(), self.timer.total_seconds())
    }

    pub fn status(&self) -> Status {
        Status::from_state(&self.timer.state())
    }

    pub fn stats(&self) -> &[DailyStat] {
        &self.stats
    }

    /// The highlighted day in the stats modal.
    pub fn selected_stat(&self) -> Option<&DailyStat> {
        self.stats.get(self.selected_day)
    }

    /// Total focus minutes across the week.
    pub fn weekly_total_minutes(&self) -> u32 {
        weekly_total_minutes(&self.stats)
    }

    /// Generation a tick must carry to be applied.
    pub fn current_generation(&self) -> u64 {
        self.generation
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("timer", &self.timer)
            .field("sound_enabled", &self.sound_enabled)
            .field("stats_visible", &self.stats_visible)
            .field("selected_day", &self.selected_day)
            .field("should_quit", &self.should_quit)
            .field("generation", &self.generation)
            .field("scheduler_active", &self.scheduler.is_active())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
