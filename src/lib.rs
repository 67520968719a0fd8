//! # Aizawa - attractor trajectory engine
//!
//! Deterministic integration and smooth playback for the Aizawa strange
//! attractor. The crate turns six coefficients and an initial condition into
//! a large ordered point buffer, then animates a marker along it with an
//! interpolated position and a fading trail - everything a renderer needs,
//! and nothing it owns.
//!
//! ## Quick Start
//!
//! ```ignore
//! use aizawa::prelude::*;
//! use std::sync::Arc;
//!
//! let mut params = AizawaParams::default();
//! let mut playback = Playback::new(Arc::new(integrate_default(&params)?));
//! let mut time = Time::new();
//!
//! loop {
//!     playback.advance(time.update());
//!
//!     let marker = playback.current_position();
//!     let trail = playback.trail(DEFAULT_TRAIL_LEN);
//!     // Hand `marker`, `trail`, and playback.trajectory().as_bytes()
//!     // to your renderer.
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Trajectory
//!
//! [`integrate`] runs fixed-step forward-Euler over the Aizawa equations and
//! records every post-step state into a flat f32 buffer ([`Trajectory`]).
//! The function is pure: the same inputs reproduce the same bits, so callers
//! can cache buffers freely. Inputs are validated up front and rejected with
//! [`InvalidParameter`]; divergence mid-run is not an error - the buffer is
//! always complete, NaNs and all.
//!
//! ### Playback
//!
//! [`Playback`] owns a fractional cursor into one shared [`Trajectory`]. Each
//! frame, [`advance`](Playback::advance) moves the cursor by wall-clock time
//! (1000 points/sec at speed 1), [`current_position`](Playback::current_position)
//! interpolates the marker between neighboring points, and
//! [`trail`](Playback::trail) returns the recently visited window, newest
//! first. Re-integrating after a parameter edit means building a fresh buffer
//! and calling [`bind`](Playback::bind), which swaps the handle and resets the
//! cursor in one step.
//!
//! ### Parameters
//!
//! [`AizawaParams`] holds the six coefficients. Edit the fields directly, or
//! use [`reset`](AizawaParams::reset) / [`randomize`](AizawaParams::randomize);
//! the integrator does not care where an edit came from and only re-runs when
//! you call it.
//!
//! ## egui Support
//!
//! With the `egui` feature, [`ui::params_panel`] and [`ui::playback_panel`]
//! provide ready-made control widgets in the host's egui context.

mod error;
mod integrator;
mod params;
mod playback;
pub mod time;
mod trajectory;
#[cfg(feature = "egui")]
pub mod ui;

pub use bytemuck;
pub use error::InvalidParameter;
pub use glam::{DVec3, Vec3};
pub use integrator::{
    derivative, integrate, integrate_default, DEFAULT_DT, DEFAULT_INITIAL_STATE, DEFAULT_STEPS,
};
pub use params::{AizawaParams, PARAM_RANGES, RANDOMIZE_RANGES};
pub use playback::{Playback, BASE_RATE, DEFAULT_TRAIL_LEN, MAX_SPEED, MIN_SPEED};
pub use trajectory::Trajectory;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use aizawa::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::InvalidParameter;
    pub use crate::integrator::{
        derivative, integrate, integrate_default, DEFAULT_DT, DEFAULT_INITIAL_STATE, DEFAULT_STEPS,
    };
    pub use crate::params::AizawaParams;
    pub use crate::playback::{Playback, BASE_RATE, DEFAULT_TRAIL_LEN, MAX_SPEED, MIN_SPEED};
    pub use crate::time::Time;
    pub use crate::trajectory::Trajectory;
    pub use crate::{DVec3, Vec3};
}
