//! vp-core: shared foundation for the vapor-pressure workspace.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared numeric/invariant error type)

pub mod error;
pub mod numeric;

pub use error::{VpError, VpResult};
pub use numeric::*;
