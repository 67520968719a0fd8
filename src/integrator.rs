//! Forward-Euler integration of the Aizawa system.
//!
//! [`integrate`] is a pure function: identical inputs reproduce bit-identical
//! buffers, which makes the output cheap to cache and trivial to test. The
//! recurrence runs entirely in f64; values are narrowed to f32 only at the
//! storage write, so rounding error never feeds back into the next step.

use crate::error::InvalidParameter;
use crate::params::AizawaParams;
use crate::trajectory::Trajectory;
use glam::DVec3;

/// Default number of integration steps.
pub const DEFAULT_STEPS: usize = 50_000;

/// Default time step.
pub const DEFAULT_DT: f64 = 0.01;

/// Default initial state.
pub const DEFAULT_INITIAL_STATE: DVec3 = DVec3::new(0.1, 0.0, 0.0);

/// Right-hand side of the Aizawa system at `state`.
///
/// ```text
/// dx/dt = (z - b)x - dy
/// dy/dt = dx + (z - b)y
/// dz/dt = c + az - z^3/3 - (x^2 + y^2)(1 + ez) + fzx^3
/// ```
#[inline]
pub fn derivative(params: &AizawaParams, state: DVec3) -> DVec3 {
    let DVec3 { x, y, z } = state;
    let AizawaParams { a, b, c, d, e, f } = *params;

    DVec3::new(
        (z - b) * x - d * y,
        d * x + (z - b) * y,
        c + a * z - z * z * z / 3.0 - (x * x + y * y) * (1.0 + e * z) + f * z * x * x * x,
    )
}

/// Integrate the Aizawa system for `steps` fixed-size Euler steps.
///
/// The point recorded at index `i` is the state *after* step `i + 1`; the
/// initial state itself is never recorded. Rejects non-finite coefficients or
/// initial state, `steps == 0`, and non-positive `dt` with
/// [`InvalidParameter`] - validation happens before any point is written, so
/// an error never leaves a partial buffer behind.
///
/// There is no bound on the state magnitude: coefficient combinations that
/// blow up produce non-finite points for the remaining steps instead of an
/// error, leaving a complete buffer to inspect.
///
/// # Example
///
/// ```ignore
/// use aizawa::prelude::*;
///
/// let params = AizawaParams::default();
/// let traj = integrate(&params, DEFAULT_INITIAL_STATE, 50_000, 0.01)?;
/// assert_eq!(traj.len(), 50_000);
/// ```
pub fn integrate(
    params: &AizawaParams,
    initial_state: DVec3,
    steps: usize,
    dt: f64,
) -> Result<Trajectory, InvalidParameter> {
    params.validate()?;
    for (name, value) in ["x0", "y0", "z0"].into_iter().zip(initial_state.to_array()) {
        if !value.is_finite() {
            return Err(InvalidParameter::NonFinite { name, value });
        }
    }
    if steps == 0 {
        return Err(InvalidParameter::ZeroSteps);
    }
    if !(dt.is_finite() && dt > 0.0) {
        return Err(InvalidParameter::BadTimeStep(dt));
    }

    let mut positions = Vec::with_capacity(steps * 3);
    let mut state = initial_state;
    for _ in 0..steps {
        state += derivative(params, state) * dt;
        positions.push(state.x as f32);
        positions.push(state.y as f32);
        positions.push(state.z as f32);
    }
    Ok(Trajectory::from_flat(positions))
}

/// [`integrate`] with the default initial state, step count, and time step.
///
/// This is the call a parameter-edit path makes: six scalars in, a fresh
/// 50,000-point buffer out.
pub fn integrate_default(params: &AizawaParams) -> Result<Trajectory, InvalidParameter> {
    integrate(params, DEFAULT_INITIAL_STATE, DEFAULT_STEPS, DEFAULT_DT)
}
