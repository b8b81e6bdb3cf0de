//! Fixed-tick driver tying the pieces together.
//!
//! One scheduler instance owns all mutation of the orb parameters and the
//! particle buffers; the audio callback and event producers only ever
//! write into their lock-free handoffs. [`FrameScheduler::step`] is the
//! pure, clock-free path that tests drive directly; [`FrameScheduler::run`]
//! adds the wall-clock cadence with overrun skip-ahead.

use std::time::Duration;

use glam::{Vec2, Vec3};
use instant::Instant;

use crate::amplitude::AmplitudeTracker;
use crate::config::{ConfigError, OrbConfig};
use crate::events::EventQueue;
use crate::orb::{OrbMode, OrbStateMachine};
use crate::particles::{Edge, ParticleField};

/// Everything the external draw layer needs for one frame. Borrowed from
/// the scheduler's pre-allocated buffers; rendering-API-agnostic.
pub struct FrameSnapshot<'a> {
    pub positions: &'a [Vec3],
    pub edges: &'a [Edge],
    pub color: Vec3,
    pub glow: f32,
    pub offset: Vec2,
    pub mode: OrbMode,
    pub amplitude: f32,
}

pub struct FrameScheduler {
    orb: OrbStateMachine,
    field: ParticleField,
    tracker: AmplitudeTracker,
    queue: EventQueue,
    interval: Duration,
}

impl FrameScheduler {
    pub fn new(
        cfg: &OrbConfig,
        tracker: AmplitudeTracker,
        queue: EventQueue,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            orb: OrbStateMachine::new(cfg),
            field: ParticleField::new(cfg),
            tracker,
            queue,
            interval: cfg.frame_interval,
        })
    }

    pub fn orb(&self) -> &OrbStateMachine {
        &self.orb
    }

    /// One animation tick: drain pending events into the state machine,
    /// read the latest amplitude, advance the orb and the field, and
    /// expose the renderable snapshot.
    pub fn step(&mut self, dt: Duration) -> FrameSnapshot<'_> {
        for event in self.queue.drain() {
            self.orb.apply(event);
        }
        let amplitude = self.tracker.value();
        let dt_sec = dt.as_secs_f32();
        let params = self.orb.tick(dt_sec, amplitude);
        self.field.advance(dt_sec, &params);
        FrameSnapshot {
            positions: self.field.positions(),
            edges: self.field.edges(),
            color: params.color,
            glow: params.glow,
            offset: params.offset,
            mode: self.orb.mode(),
            amplitude,
        }
    }

    /// Drives [`step`](Self::step) at the configured interval until
    /// `callback` returns false. A tick that overruns its budget skips
    /// ahead to the next wall-clock-aligned deadline instead of queueing
    /// catch-up frames, trading a dropped frame for sustained
    /// responsiveness.
    pub fn run<F>(&mut self, mut callback: F)
    where
        F: FnMut(&FrameSnapshot) -> bool,
    {
        let interval = self.interval;
        let mut last = Instant::now();
        let mut deadline = last + interval;
        loop {
            let now = Instant::now();
            let dt = now - last;
            last = now;
            let snapshot = self.step(dt);
            if !callback(&snapshot) {
                break;
            }
            let after = Instant::now();
            if after >= deadline {
                log::warn!(
                    "frame overran its budget by {:?}, skipping ahead",
                    after - deadline
                );
                while deadline <= after {
                    deadline += interval;
                }
            } else {
                std::thread::sleep(deadline - after);
                deadline += interval;
            }
        }
    }
}
