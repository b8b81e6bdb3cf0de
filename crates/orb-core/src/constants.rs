// Shared animation tuning constants used by the core and frontends.

// Particle field
pub const PARTICLE_COUNT: usize = 150;
pub const BASE_RADIUS: f32 = 1.2;
pub const CONNECT_DISTANCE: f32 = 0.9; // edge threshold in world units
pub const SPIN_RATE: f32 = 0.85; // radians per second about +Y
pub const DRIFT_AMPLITUDE: f32 = 0.04;
pub const DRIFT_FREQUENCY: f32 = 1.3; // radians per second

// Frame cadence
pub const FRAME_INTERVAL_MS: u64 = 16; // ~60 Hz

// Mode transitions
pub const TRANSITION_SECS: f32 = 0.35;
pub const MIN_RADIUS: f32 = 0.05; // floor applied to every exported radius

// Listening
pub const LISTEN_EXPANSION: f32 = 0.3; // radius gain at full amplitude
pub const LISTEN_MAX_SCALE: f32 = 1.3; // hard ceiling on radius / base radius
pub const BASE_GLOW: f32 = 0.3;
pub const LISTEN_GLOW_GAIN: f32 = 0.7;

// Idle breathing
pub const BREATH_AMPLITUDE: f32 = 0.09;
pub const BREATH_RATE: f32 = 1.6; // radians per second

// Speaking pulse (synthetic envelope; the microphone is not the source here)
pub const PULSE_AMPLITUDE: f32 = 0.18;
pub const PULSE_RATE: f32 = 11.0; // radians per second
pub const SPEAK_GLOW: f32 = 0.8;

// Action mode
pub const ACTION_OFFSET: [f32; 2] = [0.65, 0.0]; // lateral slide while executing
pub const ACTION_SCALE: f32 = 0.6;

// Amplitude tracker
pub const AMPLITUDE_CEILING: f32 = 0.15; // RMS treated as full loudness
pub const SMOOTHING_ALPHA: f32 = 0.3;

// Event queue
pub const EVENT_QUEUE_CAPACITY: usize = 64;

// Mode palette over the orange base (idle gold, listening green,
// speaking yellow, action cyan)
pub const IDLE_COLOR: [f32; 3] = [1.0, 0.84, 0.5];
pub const LISTENING_COLOR: [f32; 3] = [0.0, 1.0, 0.5];
pub const SPEAKING_COLOR: [f32; 3] = [1.0, 1.0, 0.59];
pub const ACTION_COLOR: [f32; 3] = [0.0, 0.78, 1.0];
