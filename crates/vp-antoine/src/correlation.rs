//! Antoine correlation evaluator.
//!
//! `log P = A - B / (C + T)`, where `log` is base 10 or natural depending on
//! the convention the coefficients were fitted with.

use crate::error::AntoineResult;
use vp_core::numeric::{Real, ensure_finite};

/// Logarithm convention the coefficients were fitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogBase {
    /// `log10 P = A - B / (C + T)`
    #[default]
    Log10,
    /// `ln P = A - B / (C + T)`
    Natural,
}

impl LogBase {
    /// Logarithm of `value` in this base.
    pub fn log(self, value: Real) -> Real {
        match self {
            LogBase::Log10 => value.log10(),
            LogBase::Natural => value.ln(),
        }
    }

    /// Inverse of [`LogBase::log`]: raises the base to `exponent`.
    pub fn pow(self, exponent: Real) -> Real {
        match self {
            LogBase::Log10 => 10.0_f64.powf(exponent),
            LogBase::Natural => exponent.exp(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LogBase::Log10 => "log base 10",
            LogBase::Natural => "natural log",
        }
    }
}

/// Saturation pressure from coefficients `a`, `b`, `c` at `temperature`.
///
/// No validity interval is applied here. Keeping units consistent is the
/// caller's job. A zero `c + temperature` (or any other non-finite
/// intermediate) is reported as a numeric error rather than returned as
/// `inf`/`NaN`.
pub fn saturation_pressure(
    a: Real,
    b: Real,
    c: Real,
    temperature: Real,
    log_base: LogBase,
) -> AntoineResult<Real> {
    let exponent = ensure_finite(a - b / (c + temperature), "correlation exponent")?;
    Ok(ensure_finite(log_base.pow(exponent), "saturation pressure")?)
}

/// Correlation solved for temperature: `T = B / (A - log P) - C`.
///
/// Non-positive pressures and `log P == A` have no finite solution and are
/// reported as numeric errors.
pub fn saturation_temperature(
    a: Real,
    b: Real,
    c: Real,
    pressure: Real,
    log_base: LogBase,
) -> AntoineResult<Real> {
    let log_p = ensure_finite(log_base.log(pressure), "log of pressure")?;
    Ok(ensure_finite(b / (a - log_p) - c, "saturation temperature")?)
}
