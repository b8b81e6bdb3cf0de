//! Latest-value microphone amplitude shared between the audio callback and
//! the frame scheduler.
//!
//! The handoff is a single-slot "latest value wins" cell: one `AtomicU64`
//! packing the f32 amplitude bits and a u32 millisecond timestamp, so a
//! reader can never observe a torn sample and never blocks. There is no
//! queue on purpose; a stale amplitude is acceptable, backlog is not.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use instant::Instant;

/// One smoothed amplitude reading. `value` is normalized loudness in
/// [0, 1]; `at_millis` counts from tracker creation (wraps after ~49 days).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AmplitudeSample {
    pub value: f32,
    pub at_millis: u32,
}

fn pack(value: f32, millis: u32) -> u64 {
    (u64::from(value.to_bits()) << 32) | u64::from(millis)
}

fn unpack(raw: u64) -> AmplitudeSample {
    AmplitudeSample {
        value: f32::from_bits((raw >> 32) as u32),
        at_millis: raw as u32,
    }
}

struct Slot {
    cell: AtomicU64,
    epoch: Instant,
}

/// Producer half, owned by the audio-capture callback. Holds the smoothing
/// state so the cell only ever contains filtered values.
pub struct AmplitudeSink {
    slot: Arc<Slot>,
    smoothed: f32,
    ceiling: f32,
    alpha: f32,
}

/// Consumer half, read once per frame by the scheduler.
pub struct AmplitudeTracker {
    slot: Arc<Slot>,
}

/// Creates a connected sink/tracker pair. Dropping the sink (for instance
/// when no audio device exists) leaves the tracker reading a constant zero,
/// which is the degraded visual-only mode.
pub fn amplitude_pair(ceiling: f32, alpha: f32) -> (AmplitudeSink, AmplitudeTracker) {
    let slot = Arc::new(Slot {
        cell: AtomicU64::new(pack(0.0, 0)),
        epoch: Instant::now(),
    });
    (
        AmplitudeSink {
            slot: Arc::clone(&slot),
            smoothed: 0.0,
            ceiling,
            alpha,
        },
        AmplitudeTracker { slot },
    )
}

impl AmplitudeSink {
    /// Feeds one raw capture buffer: RMS, normalize against the reference
    /// ceiling, exponential moving average, publish. Called at the device's
    /// callback cadence, independent of the frame rate.
    pub fn push_buffer(&mut self, samples: &[f32]) {
        if samples.is_empty() {
            return;
        }
        let mean_sq = samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32;
        let rms = mean_sq.sqrt();
        if !rms.is_finite() {
            log::warn!("discarding non-finite audio buffer");
            return;
        }
        let normalized = (rms / self.ceiling).clamp(0.0, 1.0);
        self.smoothed = self.alpha * normalized + (1.0 - self.alpha) * self.smoothed;
        let millis = self.slot.epoch.elapsed().as_millis() as u32;
        self.slot
            .cell
            .store(pack(self.smoothed, millis), Ordering::Release);
    }

    /// Current filter output, without publishing. Mostly for tests.
    pub fn smoothed(&self) -> f32 {
        self.smoothed
    }
}

impl AmplitudeTracker {
    /// Non-blocking read of the most recent smoothed sample.
    pub fn latest(&self) -> AmplitudeSample {
        unpack(self.slot.cell.load(Ordering::Acquire))
    }

    /// Just the amplitude value, for callers that ignore the timestamp.
    pub fn value(&self) -> f32 {
        self.latest().value
    }
}
