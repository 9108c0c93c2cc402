//! Clock tick source for the countdown.
//!
//! The controller talks to a [`Scheduler`] port instead of a timer API so the
//! state machine can be driven without real time passing:
//!
//! - [`IntervalScheduler`] spawns a tokio task that sends
//!   [`Event::Tick`](crate::input::Event::Tick) into the event loop once per
//!   period.
//! - [`ManualScheduler`] only records what was asked of it; tests deliver
//!   ticks by hand.
//!
//! Every start carries a generation number that is echoed back in each tick.
//! A tick may already sit in the event channel when its source is cancelled,
//! so the controller drops ticks whose generation is not the current one.
//!
//! **Panic-Free Policy:** No `.unwrap()`, `.expect()`, `panic!()`,
//! `unreachable!()`, or `todo!()`.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::input::Event;

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// Scheduler Port
// ============================================================================

/// A cancellable repeating tick source.
///
/// At most one source is active at a time: `start` cancels any previous one.
pub trait Scheduler {
    /// Starts emitting ticks tagged with `generation`, one per period.
    fn start(&mut self, generation: u64);

    /// Stops the active source, if any. Idempotent.
    fn cancel(&mut self);

    /// Whether a source is currently emitting.
    fn is_active(&self) -> bool;
}

// ============================================================================
// Tokio Interval Scheduler
// ============================================================================

/// Tick source backed by `tokio::time::interval`.
///
/// Must be started from within a tokio runtime.
pub struct IntervalScheduler {
    /// Time between ticks.
    period: Duration,

    /// Channel into the main event loop.
    event_tx: mpsc::UnboundedSender<Event>,

    /// Token of the running tick task.
    active: Option<CancellationToken>,
}

impl IntervalScheduler {
    #[must_use]
    pub fn new(period: Duration, event_tx: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            period,
            event_tx,
            active: None,
        }
    }

    /// Creates a scheduler with the default one-second period.
    #[must_use]
    pub fn with_default_period(event_tx: mpsc::UnboundedSender<Event>) -> Self {
        Self::new(TICK_PERIOD, event_tx)
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, generation: u64) {
        self.cancel();

        let token = CancellationToken::new();
        let task_token = token.clone();
        let event_tx = self.event_tx.clone();
        let period = self.period;

        tokio::spawn(async move {
            // First tick one full period after start, not immediately
            let now = Instant::now();
            let mut interval = interval_at(now.checked_add(period).unwrap_or(now), period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = task_token.cancelled() => {
                        trace!(generation, "Tick task cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if event_tx.send(Event::Tick(generation)).is_err() {
                            debug!("Event channel closed, tick task exiting");
                            break;
                        }
                    }
                }
            }
        });

        debug!(generation, period_ms = period.as_millis() as u64, "Tick source started");
        self.active = Some(token);
    }

    fn cancel(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
            debug!("Tick source cancelled");
        }
    }

    fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ============================================================================
// Manual Scheduler
// ============================================================================

#[derive(Debug, Default)]
struct ManualLog {
    active: Option<u64>,
    starts: Vec<u64>,
    cancels: usize,
}

/// Scheduler that never ticks on its own.
///
/// Clones share the same log, so a test can keep one clone for inspection
/// and hand the other to the controller.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    log: Arc<Mutex<ManualLog>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the active source, if one is running.
    pub fn active_generation(&self) -> Option<u64> {
        self.with_log(|log| log.active)
    }

    /// Generations passed to `start`, in call order.
    pub fn starts(&self) -> Vec<u64> {
        self.with_log(|log| log.starts.clone())
    }

    /// Number of `cancel` calls that stopped an active source.
    pub fn cancels(&self) -> usize {
        self.with_log(|log| log.cancels)
    }

    fn with_log<T>(&self, f: impl FnOnce(&mut ManualLog) -> T) -> T {
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut log)
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, generation: u64) {
        self.with_log(|log| {
            if log.active.is_some() {
                log.cancels += 1;
            }
            log.active = Some(generation);
            log.starts.push(generation);
        });
    }

    fn cancel(&mut self) {
        self.with_log(|log| {
            if log.active.take().is_some() {
                log.cancels += 1;
            }
        });
    }

    fn is_active(&self) -> bool {
        self.active_generation().is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_ticks(rx: &mut mpsc::UnboundedReceiver<Event>) -> Vec<u64> {
        let mut ticks = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let Event::Tick(generation) = event {
                ticks.push(generation);
            }
        }
        ticks
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_emits_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = IntervalScheduler::with_default_period(tx);

        scheduler.start(7);
        assert!(scheduler.is_active());

        tokio::time::sleep(Duration::from_millis(3500)).await;

        assert_eq!(drain_ticks(&mut rx), vec![7, 7, 7]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_first_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = IntervalScheduler::with_default_period(tx);

        scheduler.start(1);
        tokio::time::sleep(Duration::from_millis(900)).await;

        assert!(drain_ticks(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = IntervalScheduler::with_default_period(tx);

        scheduler.start(1);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        scheduler.cancel();
        assert!(!scheduler.is_active());

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(drain_ticks(&mut rx), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_source() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = IntervalScheduler::with_default_period(tx);

        scheduler.start(1);
        tokio::time::sleep(Duration::from_millis(500)).await;
        scheduler.start(2);
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Only the second source survives
        assert_eq!(drain_ticks(&mut rx), vec![2, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_source() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut scheduler = IntervalScheduler::with_default_period(tx);
            scheduler.start(3);
        }

        tokio::time::sleep(Duration::from_secs(3)).await;

        assert!(drain_ticks(&mut rx).is_empty());
    }

    #[test]
    fn test_manual_scheduler_records_calls() {
        let probe = ManualScheduler::new();
        let mut scheduler = probe.clone();

        assert!(!scheduler.is_active());
        scheduler.start(1);
        scheduler.start(2);
        assert_eq!(probe.active_generation(), Some(2));
        assert_eq!(probe.starts(), vec![1, 2]);
        assert_eq!(probe.cancels(), 1);

        scheduler.cancel();
        scheduler.cancel();
        assert!(!probe.is_active());
        assert_eq!(probe.cancels(), 2);
    }
}
