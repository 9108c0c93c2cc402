//! Completion alert.
//!
//! [`ToneNotifier`] plays a short 880 Hz sine tone whose gain decays
//! exponentially from 0.1 to near silence over half a second. With the
//! `audio` feature the tone goes through the default output device via
//! `rodio`; without it the terminal bell is rung instead.
//!
//! Audio is best-effort. A missing or broken device is logged and
//! otherwise ignored: [`Notifier::notify`] never fails and never blocks the
//! event loop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while producing the alert.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No usable output device, or it failed to initialize
    #[error("audio unavailable: {0}")]
    Unavailable(String),

    /// The device opened but playback failed
    #[error("audio playback failed: {0}")]
    Playback(String),
}

// ============================================================================
// Notifier Port
// ============================================================================

/// Something that can alert the user that a countdown finished.
pub trait Notifier {
    /// Fires the alert. Must not fail or block.
    fn notify(&self);
}

// ============================================================================
// Tone
// ============================================================================

/// Parameters and sample generator for the completion tone.
///
/// Yields mono `f32` samples. The gain follows an exponential ramp from
/// `start_gain` to `end_gain` over `duration`.
#[derive(Debug, Clone)]
pub struct Tone {
    frequency: f32,
    duration: Duration,
    start_gain: f32,
    end_gain: f32,
    sample_rate: u32,
    position: u64,
}

impl Tone {
    pub const FREQUENCY_HZ: f32 = 880.0;
    pub const DURATION: Duration = Duration::from_millis(500);
    pub const START_GAIN: f32 = 0.1;
    pub const END_GAIN: f32 = 0.000_01;
    pub const SAMPLE_RATE: u32 = 44_100;

    /// The tone played when a countdown completes.
    #[must_use]
    pub fn completion() -> Self {
        Self {
            frequency: Self::FREQUENCY_HZ,
            duration: Self::DURATION,
            start_gain: Self::START_GAIN,
            end_gain: Self::END_GAIN,
            sample_rate: Self::SAMPLE_RATE,
            position: 0,
        }
    }

    /// Total number of samples in the tone.
    pub fn sample_count(&self) -> u64 {
        (self.duration.as_secs_f64() * f64::from(self.sample_rate)).round() as u64
    }

    /// Gain at `t` seconds from the start.
    pub fn gain_at(&self, t: f64) -> f32 {
        let length = self.duration.as_secs_f64();
        if length <= 0.0 {
            return self.end_gain;
        }
        let progress = (t / length).clamp(0.0, 1.0);
        let ratio = f64::from(self.end_gain) / f64::from(self.start_gain);
        (f64::from(self.start_gain) * ratio.powf(progress)) as f32
    }
}

impl Iterator for Tone {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.position >= self.sample_count() {
            return None;
        }
        let t = self.position as f64 / f64::from(self.sample_rate);
        self.position += 1;

        let phase = 2.0 * std::f64::consts::PI * f64::from(self.frequency) * t;
        Some(self.gain_at(t) * phase.sin() as f32)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.sample_count().saturating_sub(self.position) as usize;
        (left, Some(left))
    }
}

#[cfg(feature = "audio")]
impl rodio::Source for Tone {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.duration)
    }
}

// ============================================================================
// Tone Notifier
// ============================================================================

/// Production notifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneNotifier;

impl ToneNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ToneNotifier {
    #[cfg(feature = "audio")]
    fn notify(&self) {
        // The output stream must outlive playback, so it lives on its own thread
        let spawned = std::thread::Builder::new()
            .name("pomo-tone".to_string())
            .spawn(|| match play_tone(Tone::completion()) {
                Ok(()) => debug!("Completion tone played"),
                Err(e) => warn!(error = %e, "Completion tone skipped"),
            });
        if let Err(e) = spawned {
            warn!(error = %e, "Failed to spawn audio thread");
        }
    }

    #[cfg(not(feature = "audio"))]
    fn notify(&self) {
        // Written inline: the event loop is the only other stdout writer
        match ring_bell() {
            Ok(()) => debug!("Terminal bell rung"),
            Err(e) => warn!(error = %e, "Completion bell skipped"),
        }
    }
}

#[cfg(feature = "audio")]
fn play_tone(tone: Tone) -> Result<(), AudioError> {
    let (_stream, handle) =
        rodio::OutputStream::try_default().map_err(|e| AudioError::Unavailable(e.to_string()))?;
    let sink = rodio::Sink::try_new(&handle).map_err(|e| AudioError::Playback(e.to_string()))?;
    sink.append(tone);
    sink.sleep_until_end();
    Ok(())
}

#[cfg(not(feature = "audio"))]
fn ring_bell() -> Result<(), AudioError> {
    use std::io::Write;

    let mut stdout = std::io::stdout();
    stdout
        .write_all(b"\x07")
        .and_then(|()| stdout.flush())
        .map_err(|e| AudioError::Unavailable(e.to_string()))
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// Notifier that only counts calls.
///
/// Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    calls: Arc<AtomicUsize>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `notify` calls so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_length() {
        let tone = Tone::completion();
        assert_eq!(tone.sample_count(), 22_050);
        assert_eq!(tone.count(), 22_050);
    }

    #[test]
    fn test_tone_gain_envelope() {
        let tone = Tone::completion();
        assert!((tone.gain_at(0.0) - 0.1).abs() < 1e-6);
        assert!((tone.gain_at(0.5) - 0.000_01).abs() < 1e-7);
        // Exponential ramp: halfway in time is the geometric mean
        assert!((tone.gain_at(0.25) - 0.001).abs() < 1e-5);
    }

    #[test]
    fn test_tone_samples_stay_within_gain() {
        let tone = Tone::completion();
        let peak = tone.fold(0.0_f32, |acc, s| acc.max(s.abs()));
        assert!(peak > 0.05);
        assert!(peak <= 0.1 + 1e-6);
    }

    #[test]
    fn test_tone_decays() {
        let samples: Vec<f32> = Tone::completion().collect();
        let head = samples.iter().take(1000).fold(0.0_f32, |acc, s| acc.max(s.abs()));
        let tail = samples.iter().rev().take(1000).fold(0.0_f32, |acc, s| acc.max(s.abs()));
        assert!(tail < head / 100.0);
    }

    #[test]
    fn test_recording_notifier_counts_across_clones() {
        let notifier = RecordingNotifier::new();
        let probe = notifier.clone();
        notifier.notify();
        notifier.notify();
        assert_eq!(probe.count(), 2);
    }

    #[test]
    fn test_audio_error_display() {
        let error = AudioError::Unavailable("no default output device".to_string());
        assert!(format!("{error}").contains("audio unavailable"));
        let error = AudioError::Playback("stream closed".to_string());
        assert!(format!("{error}").contains("stream closed"));
    }
}
