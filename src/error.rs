//! Error types for the trajectory engine.
//!
//! Integration inputs are validated up front, before any point is written.
//! Nothing in this crate fails mid-run: once a trajectory starts, it always
//! completes, even if the system diverges to non-finite values.

use std::fmt;

/// A rejected integration input.
///
/// Returned by [`integrate`](crate::integrate) when a coefficient, the initial
/// state, the step count, or the time step is outside its documented range.
/// Raised synchronously; the output buffer is never partially written.
///
/// Divergence to NaN/infinity *during* integration is expected behavior for
/// unstable coefficient combinations and is never reported through this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidParameter {
    /// A coefficient or initial-state component is NaN or infinite.
    NonFinite {
        /// Which input was rejected (`"a"`..`"f"`, or `"x0"`/`"y0"`/`"z0"`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The step count must be at least 1.
    ZeroSteps,
    /// The time step must be positive and finite.
    BadTimeStep(f64),
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidParameter::NonFinite { name, value } => {
                write!(f, "Input '{}' must be finite, got {}", name, value)
            }
            InvalidParameter::ZeroSteps => {
                write!(f, "Step count must be at least 1")
            }
            InvalidParameter::BadTimeStep(dt) => {
                write!(f, "Time step must be positive and finite, got {}", dt)
            }
        }
    }
}

impl std::error::Error for InvalidParameter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_input() {
        let err = InvalidParameter::NonFinite {
            name: "d",
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("'d'"));
        assert!(msg.contains("NaN"));
    }

    #[test]
    fn test_display_bad_time_step() {
        let msg = InvalidParameter::BadTimeStep(-0.01).to_string();
        assert!(msg.contains("-0.01"));
    }
}
