//! Coefficient sets and their validity intervals.

use std::fmt;
use vp_core::numeric::{Real, Tolerances, nearly_equal, within_closed};

/// Selector for one of the three correlation coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coefficient {
    A,
    B,
    C,
}

impl Coefficient {
    pub const ALL: [Coefficient; 3] = [Coefficient::A, Coefficient::B, Coefficient::C];

    pub fn key(&self) -> &'static str {
        match self {
            Coefficient::A => "A",
            Coefficient::B => "B",
            Coefficient::C => "C",
        }
    }
}

impl std::str::FromStr for Coefficient {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Coefficient::A),
            "B" => Ok(Coefficient::B),
            "C" => Ok(Coefficient::C),
            _ => Err("unknown coefficient"),
        }
    }
}

/// One calibrated `(a, b, c)` triple valid over `[lower_limit, upper_limit]`.
///
/// `lower_limit <= upper_limit` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoefficientSet {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub lower_limit: Real,
    pub upper_limit: Real,
}

impl CoefficientSet {
    pub fn new(a: Real, b: Real, c: Real, lower_limit: Real, upper_limit: Real) -> Self {
        Self {
            a,
            b,
            c,
            lower_limit,
            upper_limit,
        }
    }

    /// Inclusive check of `temperature` against the validity interval.
    pub fn contains(&self, temperature: Real) -> bool {
        within_closed(temperature, self.lower_limit, self.upper_limit)
    }

    pub fn coefficient(&self, which: Coefficient) -> Real {
        match which {
            Coefficient::A => self.a,
            Coefficient::B => self.b,
            Coefficient::C => self.c,
        }
    }

    /// `temperature` if it lies in the interval, with values within `tol` of
    /// a limit replaced by that limit; `None` otherwise.
    pub fn snap_to_interval(&self, temperature: Real, tol: Tolerances) -> Option<Real> {
        if self.lower_limit > self.upper_limit {
            None
        } else if nearly_equal(temperature, self.lower_limit, tol) {
            Some(self.lower_limit)
        } else if nearly_equal(temperature, self.upper_limit, tol) {
            Some(self.upper_limit)
        } else if self.contains(temperature) {
            Some(temperature)
        } else {
            None
        }
    }
}

impl fmt::Display for CoefficientSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={} B={} C={} [{}, {}]",
            self.a, self.b, self.c, self.lower_limit, self.upper_limit
        )
    }
}
