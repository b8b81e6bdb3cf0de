// Property tests for the easing primitives.

use glam::Vec3;
use orb_core::easing::{ease, eased, lerp, sine_wave, smooth_step, Easing};

const ALL_KINDS: [Easing; 5] = [
    Easing::Linear,
    Easing::QuadIn,
    Easing::QuadOut,
    Easing::QuadInOut,
    Easing::Cubic,
];

#[test]
fn every_kind_hits_both_endpoints() {
    for kind in ALL_KINDS {
        assert_eq!(ease(kind, 0.0), 0.0, "{kind:?} must map 0 to 0");
        assert!(
            (ease(kind, 1.0) - 1.0).abs() < 1e-6,
            "{kind:?} must map 1 to 1, got {}",
            ease(kind, 1.0)
        );
    }
}

#[test]
fn every_kind_is_monotonic_non_decreasing() {
    for kind in ALL_KINDS {
        let mut prev = ease(kind, 0.0);
        for i in 1..=1000 {
            let t = i as f32 / 1000.0;
            let v = ease(kind, t);
            assert!(
                v >= prev - 1e-6,
                "{kind:?} decreased at t={t}: {prev} -> {v}"
            );
            prev = v;
        }
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    for kind in ALL_KINDS {
        assert_eq!(ease(kind, -3.0), 0.0);
        assert!((ease(kind, 7.5) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn quad_out_midpoint() {
    // 1 - (1 - 0.5)^2
    assert!((ease(Easing::QuadOut, 0.5) - 0.75).abs() < 1e-6);
}

#[test]
fn quad_in_out_is_continuous_at_the_seam() {
    let below = ease(Easing::QuadInOut, 0.4999);
    let above = ease(Easing::QuadInOut, 0.5001);
    assert!((above - below).abs() < 1e-3, "seam jump: {below} -> {above}");
    assert!((ease(Easing::QuadInOut, 0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn lerp_scalar_and_vector() {
    assert!((lerp(2.0_f32, 6.0, 0.25) - 3.0).abs() < 1e-6);
    let v = lerp(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), 0.5);
    assert!((v - Vec3::new(0.5, 1.0, 1.5)).length() < 1e-6);
}

#[test]
fn eased_lerp_applies_the_curve() {
    // QuadOut(0.5) = 0.75, so the blend should sit three quarters along.
    let v = eased(0.0_f32, 4.0, Easing::QuadOut, 0.5);
    assert!((v - 3.0).abs() < 1e-6);
}

#[test]
fn smooth_step_endpoints_and_midpoint() {
    assert_eq!(smooth_step(0.0), 0.0);
    assert_eq!(smooth_step(1.0), 1.0);
    assert!((smooth_step(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn sine_wave_scales_amplitude() {
    assert!((sine_wave(std::f32::consts::FRAC_PI_2, 0.09) - 0.09).abs() < 1e-6);
    assert_eq!(sine_wave(0.0, 1.0), 0.0);
}
