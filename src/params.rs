//! Coefficients of the Aizawa system.
//!
//! Six independent scalars drive the attractor's right-hand side. Edits arrive
//! as plain field updates - a slider, [`randomize`](AizawaParams::randomize),
//! or [`reset`](AizawaParams::reset) all look the same to the integrator,
//! which only re-runs when the caller asks it to.

use crate::error::InvalidParameter;
use rand::Rng;
use std::ops::RangeInclusive;

/// Coefficients {a, b, c, d, e, f} of the Aizawa system.
///
/// The defaults produce the classic attractor shape. Any finite combination
/// is accepted by the integrator; combinations that blow up simply produce a
/// diverging (but complete) trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AizawaParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

/// Slider range for each coefficient, in field order a..f.
///
/// These are editing ranges for UI widgets, not validity bounds - the
/// integrator accepts any finite value.
pub const PARAM_RANGES: [RangeInclusive<f64>; 6] = [
    0.0..=2.0, // a
    0.0..=2.0, // b
    0.0..=2.0, // c
    0.0..=5.0, // d
    0.0..=1.0, // e
    0.0..=1.0, // f
];

/// Randomization range for each coefficient, in field order a..f.
///
/// Narrower than [`PARAM_RANGES`]: draws from these bands stay in the regime
/// where the attractor keeps an interesting shape instead of collapsing or
/// diverging immediately.
pub const RANDOMIZE_RANGES: [RangeInclusive<f64>; 6] = [
    0.7..=1.2,   // a
    0.5..=0.9,   // b
    0.3..=0.9,   // c
    2.5..=4.5,   // d
    0.1..=0.4,   // e
    0.05..=0.25, // f
];

impl AizawaParams {
    /// Field names in declaration order, matching [`PARAM_RANGES`].
    pub const FIELD_NAMES: [&'static str; 6] = ["a", "b", "c", "d", "e", "f"];

    /// Restore the classic defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Draw every coefficient uniformly from its [`RANDOMIZE_RANGES`] band.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let [a, b, c, d, e, f] = RANDOMIZE_RANGES;
        self.a = rng.gen_range(a);
        self.b = rng.gen_range(b);
        self.c = rng.gen_range(c);
        self.d = rng.gen_range(d);
        self.e = rng.gen_range(e);
        self.f = rng.gen_range(f);
    }

    /// Coefficients in field order a..f.
    pub fn as_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Mutable references to the coefficients, paired with their names.
    ///
    /// Lets widget code iterate the fields instead of spelling each one out.
    pub fn fields_mut(&mut self) -> [(&'static str, &mut f64); 6] {
        [
            ("a", &mut self.a),
            ("b", &mut self.b),
            ("c", &mut self.c),
            ("d", &mut self.d),
            ("e", &mut self.e),
            ("f", &mut self.f),
        ]
    }

    /// Reject NaN/infinite coefficients before integration starts.
    pub(crate) fn validate(&self) -> Result<(), InvalidParameter> {
        for (name, value) in Self::FIELD_NAMES.into_iter().zip(self.as_array()) {
            if !value.is_finite() {
                return Err(InvalidParameter::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

impl Default for AizawaParams {
    fn default() -> Self {
        Self {
            a: 0.95,
            b: 0.7,
            c: 0.6,
            d: 3.5,
            e: 0.25,
            f: 0.1,
        }
    }
}
