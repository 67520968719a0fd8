//! # Headless Flythrough
//!
//! Integrates the default attractor and plays it back for a few simulated
//! seconds, printing the marker position once per second. Shows the whole
//! pipeline - integrate, bind, tick - without a renderer attached.
//!
//! Run with: `cargo run --example flythrough`

use aizawa::prelude::*;
use std::sync::Arc;

fn main() -> Result<(), InvalidParameter> {
    let params = AizawaParams::default();
    let trajectory = Arc::new(integrate_default(&params)?);

    println!("=== Aizawa Flythrough ===");
    println!("Points: {}", trajectory.len());
    println!("Center: {:?}", trajectory.center());
    println!();

    let mut playback = Playback::new(trajectory);
    let mut time = Time::new();
    // Deterministic 60 Hz stepping instead of real frame timing.
    time.set_fixed_delta(Some(1.0 / 60.0));

    for frame in 0..600 {
        playback.advance(time.update());

        if frame % 60 == 0 {
            let p = playback.current_position();
            println!(
                "t={:>2}s  cursor={:>7.1}  marker=({:>8.4}, {:>8.4}, {:>8.4})",
                frame / 60,
                playback.cursor(),
                p.x,
                p.y,
                p.z
            );
        }
    }

    let trail = playback.trail(DEFAULT_TRAIL_LEN);
    println!();
    println!(
        "Trail window: {} points, newest at ({:.4}, {:.4}, {:.4})",
        trail.len(),
        trail[0].x,
        trail[0].y,
        trail[0].z
    );

    Ok(())
}
