//! End-to-end tests exercising the public integrate-then-play pipeline.
//!
//! Module-level behavior is covered by the inline unit tests; these tests
//! check the properties that only show up when the pieces are wired together:
//! the exact recurrence ordering, determinism at the full default workload,
//! trail indexing on a real buffer, and rebind safety across buffers of very
//! different lengths.

use aizawa::prelude::*;
use std::sync::Arc;

/// Scalar re-derivation of the recurrence, kept deliberately independent of
/// the library's vector implementation.
fn reference_steps(params: &AizawaParams, steps: usize, dt: f64) -> Vec<[f64; 3]> {
    let (a, b, c, d, e, f) = (params.a, params.b, params.c, params.d, params.e, params.f);
    let (mut x, mut y, mut z) = (0.1, 0.0, 0.0);
    let mut out = Vec::with_capacity(steps);
    for _ in 0..steps {
        let dx = (z - b) * x - d * y;
        let dy = d * x + (z - b) * y;
        let dz = c + a * z - z * z * z / 3.0 - (x * x + y * y) * (1.0 + e * z) + f * z * x * x * x;
        x += dx * dt;
        y += dy * dt;
        z += dz * dt;
        out.push([x, y, z]);
    }
    out
}

#[test]
fn three_step_sequence_matches_hand_derived_recurrence() {
    let params = AizawaParams::default();
    let traj = integrate(&params, DEFAULT_INITIAL_STATE, 3, 0.01).unwrap();

    // First point, fully by hand from the defaults:
    //   dx = (0 - 0.7)*0.1 = -0.07      -> x = 0.1 - 0.0007 = 0.0993
    //   dy = 3.5*0.1       =  0.35      -> y = 0.0035
    //   dz = 0.6 - 0.01    =  0.59      -> z = 0.0059
    let p0 = traj.point(0);
    assert!((p0.x as f64 - 0.0993).abs() < 1e-7);
    assert!((p0.y as f64 - 0.0035).abs() < 1e-7);
    assert!((p0.z as f64 - 0.0059).abs() < 1e-7);

    // All three points against the scalar reference.
    let reference = reference_steps(&params, 3, 0.01);
    for (i, expected) in reference.iter().enumerate() {
        let p = traj.point(i);
        assert!((p.x as f64 - expected[0]).abs() < 1e-6, "x at step {}", i);
        assert!((p.y as f64 - expected[1]).abs() < 1e-6, "y at step {}", i);
        assert!((p.z as f64 - expected[2]).abs() < 1e-6, "z at step {}", i);
    }
}

#[test]
fn default_workload_is_deterministic() {
    let params = AizawaParams::default();
    let first = integrate_default(&params).unwrap();
    let second = integrate_default(&params).unwrap();
    assert_eq!(first.len(), DEFAULT_STEPS);
    assert_eq!(first.positions(), second.positions());
}

#[test]
fn trail_wraps_at_the_low_end_of_a_full_buffer() {
    let traj = Arc::new(integrate_default(&AizawaParams::default()).unwrap());
    let mut playback = Playback::new(traj.clone());
    playback.advance(0.005); // cursor at index 5

    let trail = playback.trail(200);
    assert_eq!(trail.len(), 200);
    // Indices 5 down to 0, then wrapped from the top of the buffer.
    for i in 0..=5 {
        assert_eq!(trail[i], traj.point(5 - i));
    }
    assert_eq!(trail[6], traj.point(49_999));
    assert_eq!(trail[7], traj.point(49_998));
    assert_eq!(trail[199], traj.point(49_806));
}

#[test]
fn rebind_to_shorter_buffer_is_safe() {
    let long = Arc::new(
        integrate(&AizawaParams::default(), DEFAULT_INITIAL_STATE, 1_000, 0.01).unwrap(),
    );
    let short =
        Arc::new(integrate(&AizawaParams::default(), DEFAULT_INITIAL_STATE, 10, 0.01).unwrap());

    let mut playback = Playback::new(long);
    playback.advance(0.9);
    assert_eq!(playback.cursor(), 900.0);

    playback.bind(short.clone());
    assert_eq!(playback.cursor(), 0.0);
    assert_eq!(playback.current_position(), short.point(0));
    assert_eq!(playback.trail(200).len(), 200);
}

#[test]
fn parameter_edit_produces_a_different_curve() {
    let defaults = AizawaParams::default();
    let mut edited = defaults;
    edited.d = 4.0;

    let base = integrate(&defaults, DEFAULT_INITIAL_STATE, 500, 0.01).unwrap();
    let changed = integrate(&edited, DEFAULT_INITIAL_STATE, 500, 0.01).unwrap();
    assert_ne!(base.positions(), changed.positions());
}

#[test]
fn playback_survives_a_diverged_buffer() {
    // Coefficients far outside the randomization bands blow the state up;
    // the sampler must keep answering queries over the NaN tail.
    let wild = AizawaParams {
        a: 1e6,
        b: 0.0,
        c: 0.0,
        d: 1e6,
        e: 1.0,
        f: 1.0,
    };
    let traj = Arc::new(integrate(&wild, DVec3::new(1.0, 1.0, 1.0), 200, 0.01).unwrap());
    assert!(traj.points().any(|p| !p.is_finite()));

    let mut playback = Playback::new(traj);
    for _ in 0..500 {
        playback.advance(1.0 / 60.0);
        let _ = playback.current_position();
        assert_eq!(playback.trail(DEFAULT_TRAIL_LEN).len(), DEFAULT_TRAIL_LEN);
    }
}
