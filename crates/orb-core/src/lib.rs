//! Animation core for an audio-reactive 3D particle orb.
//!
//! The orb's appearance (radius, color, glow, screen offset) reacts to three
//! asynchronous input streams: microphone amplitude, speech-recognition
//! status, and discrete action events. This crate fuses them into one
//! smoothly-interpolated visual state per frame tick. It carries no audio
//! capture or GPU code of its own; frontends feed the [`AmplitudeSink`] and
//! [`EventSender`] and consume [`FrameSnapshot`]s.

pub mod amplitude;
pub mod config;
pub mod constants;
pub mod easing;
pub mod events;
pub mod orb;
pub mod particles;
pub mod scheduler;

pub use amplitude::*;
pub use config::*;
pub use easing::*;
pub use events::*;
pub use orb::*;
pub use particles::*;
pub use scheduler::*;
