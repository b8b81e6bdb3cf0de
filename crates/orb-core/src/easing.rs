//! Pure interpolation primitives.
//!
//! Every component that glides a value toward a target goes through these.
//! All kinds satisfy `ease(0) = 0`, `ease(1) = 1` and are monotonic
//! non-decreasing on [0, 1]; inputs outside the unit interval are clamped.

use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    Cubic,
}

pub fn ease(kind: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match kind {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                (4.0 - 2.0 * t) * t - 1.0
            }
        }
        Easing::Cubic => 1.0 - (1.0 - t).powi(3),
    }
}

/// Hermite interpolation between 0 and 1.
pub fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Sine oscillation helper for the idle/speaking envelopes.
pub fn sine_wave(phase: f32, amplitude: f32) -> f32 {
    amplitude * phase.sin()
}

/// Types that can be linearly blended, so [`lerp`] and the animated
/// parameter machinery work uniformly over scalars and vectors.
pub trait Interpolate: Copy + PartialEq {
    fn blend(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn blend(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec2 {
    fn blend(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl Interpolate for Vec3 {
    fn blend(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// `a + (b - a) * t`, for scalars and vectors alike.
pub fn lerp<T: Interpolate>(a: T, b: T, t: f32) -> T {
    a.blend(b, t)
}

/// Lerp with an easing curve applied to the progress fraction.
pub fn eased<T: Interpolate>(a: T, b: T, kind: Easing, t: f32) -> T {
    a.blend(b, ease(kind, t))
}
