use std::time::Duration;

use thiserror::Error;

use crate::constants;

/// Startup configuration for the animation core.
///
/// These are cosmetic tuning values; `Default` pulls them from
/// [`constants`]. `validate` rejects the values that would break the tick
/// math (a zero transition duration would divide by zero in the easing
/// progress computation).
#[derive(Clone, Debug)]
pub struct OrbConfig {
    pub particle_count: usize,
    pub base_radius: f32,
    pub connect_distance: f32,
    pub frame_interval: Duration,
    pub transition: Duration,
    pub listen_expansion: f32,
    pub listen_max_scale: f32,
    pub amplitude_ceiling: f32,
    pub smoothing_alpha: f32,
    pub seed: u64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            particle_count: constants::PARTICLE_COUNT,
            base_radius: constants::BASE_RADIUS,
            connect_distance: constants::CONNECT_DISTANCE,
            frame_interval: Duration::from_millis(constants::FRAME_INTERVAL_MS),
            transition: Duration::from_secs_f32(constants::TRANSITION_SECS),
            listen_expansion: constants::LISTEN_EXPANSION,
            listen_max_scale: constants::LISTEN_MAX_SCALE,
            amplitude_ceiling: constants::AMPLITUDE_CEILING,
            smoothing_alpha: constants::SMOOTHING_ALPHA,
            seed: 42,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("particle count must be non-zero")]
    ZeroParticles,
    #[error("base radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("transition duration must be positive, got {0:?}")]
    NonPositiveTransition(Duration),
    #[error("frame interval must be positive, got {0:?}")]
    NonPositiveInterval(Duration),
    #[error("smoothing alpha must be in (0, 1], got {0}")]
    AlphaOutOfRange(f32),
    #[error("amplitude ceiling must be positive, got {0}")]
    NonPositiveCeiling(f32),
}

impl OrbConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if !(self.base_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.base_radius));
        }
        if self.transition.is_zero() {
            return Err(ConfigError::NonPositiveTransition(self.transition));
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::NonPositiveInterval(self.frame_interval));
        }
        if !(self.smoothing_alpha > 0.0 && self.smoothing_alpha <= 1.0) {
            return Err(ConfigError::AlphaOutOfRange(self.smoothing_alpha));
        }
        if !(self.amplitude_ceiling > 0.0) {
            return Err(ConfigError::NonPositiveCeiling(self.amplitude_ceiling));
        }
        Ok(())
    }
}
