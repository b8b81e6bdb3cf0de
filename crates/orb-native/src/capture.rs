//! Microphone capture feeding the core's amplitude sink.
//!
//! Failure never propagates: a missing device or unsupported format logs
//! one warning and returns `None`, leaving the orb animating on zero
//! amplitude (visual-only mode).

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::SampleFormat;
use orb_core::AmplitudeSink;

/// Builds and starts the default input stream. The returned stream must be
/// kept alive for capture to continue.
pub fn start_microphone(mut sink: AmplitudeSink) -> Option<cpal::Stream> {
    let host = cpal::default_host();
    let device = match host.default_input_device() {
        Some(d) => d,
        None => {
            log::warn!("no audio input device found, running visual-only");
            return None;
        }
    };
    let name = device.name().unwrap_or_else(|_| String::from("unnamed"));

    let config = match device.default_input_config() {
        Ok(c) if c.sample_format() == SampleFormat::F32 => c,
        Ok(c) => {
            log::warn!(
                "input device {name} delivers {:?} samples, not f32; running visual-only",
                c.sample_format()
            );
            return None;
        }
        Err(e) => {
            log::warn!("could not query input config for {name}: {e}, running visual-only");
            return None;
        }
    };

    // RMS over interleaved channels is close enough to a mono loudness
    // meter; no need to deinterleave in the callback.
    let stream = device.build_input_stream(
        &config.into(),
        move |data: &[f32], _| sink.push_buffer(data),
        |err| log::warn!("audio input stream error: {err}"),
        None,
    );

    match stream {
        Ok(stream) => match stream.play() {
            Ok(()) => {
                log::info!("capturing microphone input from {name}");
                Some(stream)
            }
            Err(e) => {
                log::warn!("could not start capture on {name}: {e}, running visual-only");
                None
            }
        },
        Err(e) => {
            log::warn!("could not open input stream on {name}: {e}, running visual-only");
            None
        }
    }
}
