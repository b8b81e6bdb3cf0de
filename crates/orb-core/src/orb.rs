//! The orb state machine: fuses boundary events and the amplitude stream
//! into one set of smoothly-converging visual parameters.
//!
//! All target mutation happens inside [`OrbStateMachine::apply`] and
//! [`OrbStateMachine::tick`]; everything else reads snapshots. A mode
//! switch snaps *targets* instantly while *current* values glide toward
//! them over the configured transition duration, so a transition never
//! causes a visual pop.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::config::OrbConfig;
use crate::constants::{
    ACTION_COLOR, ACTION_OFFSET, ACTION_SCALE, BASE_GLOW, BREATH_AMPLITUDE, BREATH_RATE,
    IDLE_COLOR, LISTENING_COLOR, LISTEN_GLOW_GAIN, MIN_RADIUS, PULSE_AMPLITUDE, PULSE_RATE,
    SPEAKING_COLOR, SPEAK_GLOW,
};
use crate::easing::{ease, sine_wave, Easing, Interpolate};
use crate::events::OrbEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbMode {
    Idle,
    Listening,
    Speaking,
    Action,
}

/// Rendered appearance of the orb for one frame. Values are sanitized
/// before export: radius floored, color and glow clamped to [0, 1], never
/// NaN.
#[derive(Clone, Copy, Debug)]
pub struct OrbParameters {
    pub radius: f32,
    pub color: Vec3,
    pub offset: Vec2,
    pub glow: f32,
}

/// A value gliding toward its target along an easing curve. Retargeting
/// restarts the glide from the current value, so a continuously-moving
/// target degrades gracefully into per-tick smoothing while a held target
/// converges in exactly the configured duration.
#[derive(Clone, Copy, Debug)]
struct Animated<T: Interpolate> {
    from: T,
    current: T,
    target: T,
    elapsed: f32,
}

impl<T: Interpolate> Animated<T> {
    fn new(value: T) -> Self {
        Self {
            from: value,
            current: value,
            target: value,
            elapsed: f32::MAX,
        }
    }

    fn retarget(&mut self, target: T) {
        if target != self.target {
            self.from = self.current;
            self.target = target;
            self.elapsed = 0.0;
        }
    }

    fn advance(&mut self, dt: f32, duration: f32, kind: Easing) {
        self.elapsed += dt;
        let t = self.elapsed / duration.max(f32::EPSILON);
        if t >= 1.0 {
            self.current = self.target;
            self.from = self.target;
        } else {
            self.current = self.from.blend(self.target, ease(kind, t));
        }
    }
}

pub struct OrbStateMachine {
    mode: OrbMode,
    radius: Animated<f32>,
    color: Animated<Vec3>,
    offset: Animated<Vec2>,
    glow: Animated<f32>,
    breath_phase: f32,
    pulse_phase: f32,
    base_radius: f32,
    listen_expansion: f32,
    listen_max_scale: f32,
    transition_secs: f32,
}

impl OrbStateMachine {
    pub fn new(cfg: &OrbConfig) -> Self {
        Self {
            mode: OrbMode::Idle,
            radius: Animated::new(cfg.base_radius),
            color: Animated::new(Vec3::from(IDLE_COLOR)),
            offset: Animated::new(Vec2::ZERO),
            glow: Animated::new(BASE_GLOW),
            breath_phase: 0.0,
            pulse_phase: 0.0,
            base_radius: cfg.base_radius,
            listen_expansion: cfg.listen_expansion,
            listen_max_scale: cfg.listen_max_scale,
            transition_secs: cfg.transition.as_secs_f32(),
        }
    }

    pub fn mode(&self) -> OrbMode {
        self.mode
    }

    /// Radius the current mode is steering toward. Mostly for tests.
    pub fn target_radius(&self) -> f32 {
        self.radius.target
    }

    /// Applies one boundary event to the transition table. Pairs outside
    /// the table (late completions, toggles mid-speech, informational
    /// recognition events) leave the mode unchanged; a stale event is
    /// never an error.
    pub fn apply(&mut self, event: OrbEvent) {
        use OrbEvent::*;
        use OrbMode::*;
        let next = match (self.mode, event) {
            (Idle, HotkeyToggle) => Some(Listening),
            (Listening, HotkeyToggle) => Some(Idle),
            (Listening, Silence) => Some(Idle),
            (Listening, FinalTranscript) => Some(Speaking),
            // A recognition finalized after listening was toggled off still
            // delivers its response; transition off Idle as well.
            (Idle, FinalTranscript) => Some(Speaking),
            (Speaking, SpeakingFinished) => Some(Idle),
            (Speaking, ActionStarted(_)) => Some(Action),
            (Action, ActionCompleted(_)) => Some(Idle),
            _ => None,
        };
        if let Some(next) = next {
            self.enter(next);
        }
    }

    fn enter(&mut self, mode: OrbMode) {
        log::info!("orb mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        match mode {
            OrbMode::Idle => {
                self.breath_phase = 0.0;
                self.radius.retarget(self.base_radius);
                self.color.retarget(Vec3::from(IDLE_COLOR));
                self.offset.retarget(Vec2::ZERO);
                self.glow.retarget(BASE_GLOW);
            }
            OrbMode::Listening => {
                self.radius.retarget(self.base_radius);
                self.color.retarget(Vec3::from(LISTENING_COLOR));
                self.offset.retarget(Vec2::ZERO);
                self.glow.retarget(BASE_GLOW);
            }
            OrbMode::Speaking => {
                self.pulse_phase = 0.0;
                self.radius.retarget(self.base_radius);
                self.color.retarget(Vec3::from(SPEAKING_COLOR));
                self.offset.retarget(Vec2::ZERO);
                self.glow.retarget(SPEAK_GLOW);
            }
            OrbMode::Action => {
                self.radius.retarget(self.base_radius * ACTION_SCALE);
                self.color.retarget(Vec3::from(ACTION_COLOR));
                self.offset.retarget(Vec2::from(ACTION_OFFSET));
                self.glow.retarget(BASE_GLOW);
            }
        }
    }

    /// Advances one frame. `amplitude` is the latest smoothed microphone
    /// level in [0, 1]; it only steers the orb while Listening. Never
    /// blocks; callable at any fixed cadence.
    pub fn tick(&mut self, dt: f32, amplitude: f32) -> OrbParameters {
        let amplitude = if amplitude.is_finite() {
            amplitude.clamp(0.0, 1.0)
        } else {
            log::warn!("non-finite amplitude sample, treating as silence");
            0.0
        };

        match self.mode {
            OrbMode::Idle => {
                self.breath_phase = (self.breath_phase + BREATH_RATE * dt) % TAU;
                let breath = 1.0 + sine_wave(self.breath_phase, BREATH_AMPLITUDE);
                self.radius.retarget(self.base_radius * breath);
            }
            OrbMode::Listening => {
                let scale =
                    (1.0 + amplitude * self.listen_expansion).min(self.listen_max_scale);
                self.radius.retarget(self.base_radius * scale);
                self.glow
                    .retarget((BASE_GLOW + amplitude * LISTEN_GLOW_GAIN).min(1.0));
            }
            OrbMode::Speaking => {
                self.pulse_phase = (self.pulse_phase + PULSE_RATE * dt) % TAU;
                let pulse = 1.0 + PULSE_AMPLITUDE * self.pulse_phase.sin().abs();
                self.radius.retarget(self.base_radius * pulse);
            }
            OrbMode::Action => {}
        }

        let dur = self.transition_secs;
        self.radius.advance(dt, dur, Easing::QuadOut);
        self.color.advance(dt, dur, Easing::QuadOut);
        self.offset.advance(dt, dur, Easing::QuadOut);
        self.glow.advance(dt, dur, Easing::QuadOut);
        self.parameters()
    }

    /// Sanitized snapshot of the current visual parameters.
    pub fn parameters(&self) -> OrbParameters {
        OrbParameters {
            radius: sanitize(self.radius.current, MIN_RADIUS, f32::MAX, "radius"),
            color: Vec3::new(
                sanitize(self.color.current.x, 0.0, 1.0, "color.r"),
                sanitize(self.color.current.y, 0.0, 1.0, "color.g"),
                sanitize(self.color.current.z, 0.0, 1.0, "color.b"),
            ),
            offset: Vec2::new(
                sanitize(self.offset.current.x, -10.0, 10.0, "offset.x"),
                sanitize(self.offset.current.y, -10.0, 10.0, "offset.y"),
            ),
            glow: sanitize(self.glow.current, 0.0, 1.0, "glow"),
        }
    }
}

fn sanitize(value: f32, min: f32, max: f32, what: &str) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        log::warn!("non-finite {what}, clamping to safe minimum");
        min
    }
}
