//! # Random Tour
//!
//! Randomizes the coefficients a few times, re-integrating and rebinding the
//! sampler after each edit - the same control path a parameter slider drives.
//! The sampler keeps serving whatever buffer it holds until the new one is
//! complete and bound.
//!
//! Run with: `cargo run --example random_tour`

use aizawa::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::Arc;

fn main() -> Result<(), InvalidParameter> {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut params = AizawaParams::default();

    println!("=== Aizawa Random Tour ===");

    let mut playback = Playback::new(Arc::new(integrate_default(&params)?));
    let mut time = Time::new();
    time.set_fixed_delta(Some(1.0 / 60.0));

    for round in 0..5 {
        // Half a second of playback on the current curve.
        for _ in 0..30 {
            playback.advance(time.update());
        }
        let p = playback.current_position();
        println!(
            "round {}  a={:.3} b={:.3} c={:.3} d={:.3} e={:.3} f={:.3}  marker=({:.3}, {:.3}, {:.3})",
            round, params.a, params.b, params.c, params.d, params.e, params.f, p.x, p.y, p.z
        );

        params.randomize(&mut rng);
        playback.bind(Arc::new(integrate_default(&params)?));
    }

    Ok(())
}
