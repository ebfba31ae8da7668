use crate::{VpError, VpResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> VpResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VpError::NonFinite { what, value: v })
    }
}

/// Inclusive containment: `lower <= v <= upper`.
///
/// NaN is never contained.
#[inline]
pub fn within_closed(v: Real, lower: Real, upper: Real) -> bool {
    v >= lower && v <= upper
}
