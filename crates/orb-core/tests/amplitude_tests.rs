// Tests for the RMS amplitude tracker and its lock-free handoff cell.

use orb_core::amplitude_pair;

const CEILING: f32 = 0.15;
const ALPHA: f32 = 0.3;

#[test]
fn tracker_reads_zero_before_any_capture() {
    let (_sink, tracker) = amplitude_pair(CEILING, ALPHA);
    assert_eq!(tracker.value(), 0.0);
    assert_eq!(tracker.latest().at_millis, 0);
}

#[test]
fn tracker_reads_zero_forever_without_a_device() {
    // Dropping the sink models a missing audio device: the animation side
    // must keep reading a constant zero rather than failing.
    let (sink, tracker) = amplitude_pair(CEILING, ALPHA);
    drop(sink);
    for _ in 0..100 {
        assert_eq!(tracker.value(), 0.0);
    }
}

#[test]
fn rms_of_a_constant_buffer_normalizes_against_the_ceiling() {
    let (mut sink, tracker) = amplitude_pair(CEILING, ALPHA);
    // A buffer pinned at the ceiling has RMS equal to the ceiling, so the
    // normalized level is exactly 1 and the first EMA step lands on alpha.
    let buffer = vec![CEILING; 1024];
    sink.push_buffer(&buffer);
    assert!((tracker.value() - ALPHA).abs() < 1e-5);
}

#[test]
fn repeated_loud_buffers_converge_to_full_amplitude() {
    let (mut sink, tracker) = amplitude_pair(CEILING, ALPHA);
    let buffer = vec![0.5_f32; 1024]; // well above the ceiling, clamps to 1
    for _ in 0..60 {
        sink.push_buffer(&buffer);
    }
    assert!(
        tracker.value() > 0.999,
        "EMA should converge to 1, got {}",
        tracker.value()
    );
}

#[test]
fn silence_decays_the_smoothed_level() {
    let (mut sink, tracker) = amplitude_pair(CEILING, ALPHA);
    sink.push_buffer(&vec![0.5_f32; 256]);
    let loud = tracker.value();
    for _ in 0..60 {
        sink.push_buffer(&vec![0.0_f32; 256]);
    }
    assert!(
        tracker.value() < loud * 0.01,
        "silence should decay toward zero, got {}",
        tracker.value()
    );
}

#[test]
fn smoothing_suppresses_single_buffer_spikes() {
    let (mut sink, tracker) = amplitude_pair(CEILING, ALPHA);
    sink.push_buffer(&vec![1.0_f32; 256]);
    assert!(
        tracker.value() <= ALPHA + 1e-5,
        "one spike must not exceed the alpha step, got {}",
        tracker.value()
    );
}

#[test]
fn value_is_always_in_unit_range() {
    let (mut sink, tracker) = amplitude_pair(CEILING, ALPHA);
    for amp in [0.0_f32, 0.01, 0.1, 0.5, 1.0, 10.0] {
        sink.push_buffer(&vec![amp; 128]);
        let v = tracker.value();
        assert!((0.0..=1.0).contains(&v), "value {v} out of range for {amp}");
    }
}

#[test]
fn empty_and_non_finite_buffers_are_ignored() {
    let (mut sink, tracker) = amplitude_pair(CEILING, ALPHA);
    sink.push_buffer(&vec![0.5_f32; 128]);
    let before = tracker.value();

    sink.push_buffer(&[]);
    assert_eq!(tracker.value(), before, "empty buffer must not publish");

    sink.push_buffer(&[f32::NAN; 16]);
    assert_eq!(
        tracker.value(),
        before,
        "non-finite buffer must be discarded"
    );
}
