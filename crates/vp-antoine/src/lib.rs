//! vp-antoine: Antoine-form vapor pressure correlations.
//!
//! Provides:
//! - The correlation evaluator (`log P = A - B / (C + T)`), in base 10 or base e
//! - Temperature-range-qualified coefficient sets
//! - A per-source coefficient library keyed by species name
//!
//! Units are labels only. Every set in one library is assumed to share the
//! library's temperature unit, pressure unit, and logarithm convention.
//!
//! # Example
//!
//! ```
//! use vp_antoine::{CoefficientLibrary, LibraryConfig};
//!
//! let mut lib = CoefficientLibrary::new(LibraryConfig::new(
//!     "Celsius",
//!     "mmHg",
//!     "T. Boublik, V. Fried, and E. Hala, Vapour Pressures of Pure Substances, 1973",
//! ));
//! lib.register("methanol", 8.08097, 1582.271, 239.726, 14.9, 83.7);
//!
//! let p = lib.get_saturation_pressure("methanol", 50.0).unwrap();
//! println!("{p:.1} {}", lib.pressure_units());
//! ```

pub mod coefficients;
pub mod correlation;
pub mod error;
pub mod library;

pub use coefficients::{Coefficient, CoefficientSet};
pub use correlation::{LogBase, saturation_pressure, saturation_temperature};
pub use error::{AntoineError, AntoineResult};
pub use library::{CoefficientLibrary, LibraryConfig};
