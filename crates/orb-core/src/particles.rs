//! Fixed-size particle field forming the orb's visual substance.
//!
//! N particles are laid out once on a Fibonacci sphere and reused for the
//! process lifetime. Every frame their world positions are recomputed from
//! the base layout (spin about +Y, radius scaling from the current orb
//! parameters, small per-particle sinusoidal drift) and the connectivity
//! edges are rebuilt from scratch. All buffers are sized at startup; the
//! advance path performs no allocation.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use rand::prelude::*;

use crate::config::OrbConfig;
use crate::constants::{DRIFT_AMPLITUDE, DRIFT_FREQUENCY, SPIN_RATE};
use crate::orb::OrbParameters;

// The drift components run at 1.0x, 0.9x and 1.1x of the base frequency,
// so the combined pattern repeats every ten base cycles. Wrapping the
// clock there keeps sine precision over long uptimes without a visible
// jump.
const DRIFT_WRAP: f32 = 10.0 * TAU / DRIFT_FREQUENCY;

/// Index pair connecting two nearby particles. Pod so frontends can cast
/// the edge slice straight into an index buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
}

pub struct ParticleField {
    base: Vec<Vec3>,
    positions: Vec<Vec3>,
    phases: Vec<f32>,
    edges: Vec<Edge>,
    spin: f32,
    time: f32,
    connect_distance: f32,
}

impl ParticleField {
    pub fn new(cfg: &OrbConfig) -> Self {
        let n = cfg.particle_count;
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        // Fibonacci sphere: evenly spread points with no clustering at the
        // poles.
        let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
        let base: Vec<Vec3> = (0..n)
            .map(|i| {
                let y = 1.0 - (i as f32 / (n - 1).max(1) as f32) * 2.0;
                let ring = (1.0 - y * y).max(0.0).sqrt();
                let theta = golden_angle * i as f32;
                Vec3::new(theta.cos() * ring, y, theta.sin() * ring)
            })
            .collect();
        let phases = (0..n).map(|_| rng.gen::<f32>() * TAU).collect();

        let mut field = Self {
            positions: vec![Vec3::ZERO; n],
            base,
            phases,
            // Upper bound on pair count, so rebuilds never reallocate.
            edges: Vec::with_capacity(n.saturating_sub(1) * n / 2),
            spin: 0.0,
            time: 0.0,
            connect_distance: cfg.connect_distance,
        };
        field.advance(
            0.0,
            &OrbParameters {
                radius: cfg.base_radius,
                color: Vec3::ZERO,
                offset: Vec2::ZERO,
                glow: 0.0,
            },
        );
        field
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Rewrites every particle position and the edge list for this frame.
    pub fn advance(&mut self, dt: f32, params: &OrbParameters) {
        self.time = (self.time + dt) % DRIFT_WRAP;
        self.spin = (self.spin + SPIN_RATE * dt) % TAU;
        let (sin_a, cos_a) = self.spin.sin_cos();
        // Base layout is the unit sphere, so the scale factor is the radius
        // itself.
        let scale = params.radius;

        for i in 0..self.base.len() {
            let p = self.base[i];
            let rotated = Vec3::new(
                p.x * cos_a - p.z * sin_a,
                p.y,
                p.x * sin_a + p.z * cos_a,
            );
            let w = self.time * DRIFT_FREQUENCY + self.phases[i];
            let drift =
                Vec3::new(w.sin(), (w * 0.9).cos(), (w * 1.1).sin()) * DRIFT_AMPLITUDE;
            self.positions[i] = rotated * scale + drift;
        }
        self.rebuild_edges();
    }

    fn rebuild_edges(&mut self) {
        self.edges.clear();
        let limit_sq = self.connect_distance * self.connect_distance;
        for i in 0..self.positions.len() {
            for j in (i + 1)..self.positions.len() {
                if self.positions[i].distance_squared(self.positions[j]) < limit_sq {
                    self.edges.push(Edge {
                        a: i as u32,
                        b: j as u32,
                    });
                }
            }
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Edges derived for the current frame only; recomputed on every
    /// advance, never cached across frames.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Perspective-projects world positions into 2D screen space using a
/// `1 / (2 + z)` depth factor, then applies the orb's screen offset.
/// Output is written into `out` to keep frame paths allocation-free.
pub fn project(positions: &[Vec3], offset: Vec2, out: &mut Vec<Vec2>) {
    out.clear();
    out.reserve(positions.len());
    for p in positions {
        let persp = 1.0 / (2.0 + p.z);
        out.push(Vec2::new(p.x * persp, p.y * persp) + offset);
    }
}
