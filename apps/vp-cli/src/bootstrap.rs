//! Built-in coefficient libraries.

use vp_antoine::{CoefficientLibrary, LibraryConfig};

pub const CELSIUS: &str = "Celsius";
pub const MMHG: &str = "mmHg";

pub const BOUBLIK_1973: &str = "T. Boublik, V. Fried, and E. Hala, \
    Vapour Pressures of Pure Substances, Elsevier, Amsterdam, 1973";

/// Boublik, Fried and Hala (1973): log10, °C, mmHg.
pub fn boublik_et_al() -> CoefficientLibrary {
    let mut lib = CoefficientLibrary::new(LibraryConfig::new(CELSIUS, MMHG, BOUBLIK_1973));
    lib.register("methanol", 8.08097, 1582.271, 239.726, 14.9, 83.7);
    lib.register("benzene", 6.90565, 1211.033, 220.790, 8.0, 103.0);
    tracing::debug!(species = lib.len(), source = lib.source(), "loaded built-in library");
    lib
}
