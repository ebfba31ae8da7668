//! Per-source library of Antoine coefficient sets keyed by species name.

use crate::coefficients::{Coefficient, CoefficientSet};
use crate::correlation::{LogBase, saturation_pressure, saturation_temperature};
use crate::error::{AntoineError, AntoineResult};
use std::collections::BTreeMap;
use vp_core::VpError;
use vp_core::numeric::{Real, Tolerances};

/// Construction-time description of a coefficient library.
///
/// The unit labels are documentation for callers; nothing is converted.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LibraryConfig {
    pub temperature_units: String,
    pub pressure_units: String,
    /// Citation for the source all coefficients were taken from.
    pub source: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub log_base: LogBase,
}

impl LibraryConfig {
    /// Config with the default base-10 convention.
    pub fn new(
        temperature_units: impl Into<String>,
        pressure_units: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            temperature_units: temperature_units.into(),
            pressure_units: pressure_units.into(),
            source: source.into(),
            log_base: LogBase::default(),
        }
    }

    pub fn with_log_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }
}

/// Coefficient sets from a single source, grouped by species.
///
/// Each species holds its sets in registration order. Lookups return the
/// first set whose interval contains the queried temperature, so earlier
/// registrations win where intervals overlap.
///
/// All sets are assumed to share the config's units and log convention.
/// The library does not check this.
#[derive(Debug, Clone, Default)]
pub struct CoefficientLibrary {
    config: LibraryConfig,
    entries: BTreeMap<String, Vec<CoefficientSet>>,
}

impl CoefficientLibrary {
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            config,
            entries: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn temperature_units(&self) -> &str {
        &self.config.temperature_units
    }

    pub fn pressure_units(&self) -> &str {
        &self.config.pressure_units
    }

    pub fn source(&self) -> &str {
        &self.config.source
    }

    pub fn log_base(&self) -> LogBase {
        self.config.log_base
    }

    /// Append a coefficient set for `species`.
    ///
    /// Interval ordering and overlap with existing sets are not validated.
    pub fn register(
        &mut self,
        species: impl Into<String>,
        a: Real,
        b: Real,
        c: Real,
        lower_limit: Real,
        upper_limit: Real,
    ) {
        self.register_set(species, CoefficientSet::new(a, b, c, lower_limit, upper_limit));
    }

    pub fn register_set(&mut self, species: impl Into<String>, set: CoefficientSet) {
        let species = species.into();
        tracing::debug!(
            species = %species,
            a = set.a,
            b = set.b,
            c = set.c,
            lower_limit = set.lower_limit,
            upper_limit = set.upper_limit,
            "registering coefficient set"
        );
        self.entries.entry(species).or_default().push(set);
    }

    pub fn contains_species(&self, species: &str) -> bool {
        self.entries.contains_key(species)
    }

    /// Registered species names, sorted.
    pub fn species(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// All sets for `species` in registration order.
    pub fn coefficient_sets(&self, species: &str) -> AntoineResult<&[CoefficientSet]> {
        self.entries
            .get(species)
            .map(Vec::as_slice)
            .ok_or_else(|| species_not_found(species))
    }

    /// Number of registered species.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First registered set for `species` whose interval contains `temperature`.
    pub fn resolve(&self, species: &str, temperature: Real) -> AntoineResult<&CoefficientSet> {
        let sets = self.coefficient_sets(species)?;

        match sets.iter().find(|set| set.contains(temperature)) {
            Some(set) => {
                tracing::trace!(species, temperature, %set, "resolved coefficient set");
                Ok(set)
            }
            None => {
                tracing::debug!(
                    species,
                    temperature,
                    sets = sets.len(),
                    "no coefficient set covers temperature"
                );
                Err(AntoineError::TemperatureOutOfRange {
                    temperature,
                    units: self.config.temperature_units.clone(),
                })
            }
        }
    }

    pub fn get_coefficient(
        &self,
        species: &str,
        temperature: Real,
        which: Coefficient,
    ) -> AntoineResult<Real> {
        Ok(self.resolve(species, temperature)?.coefficient(which))
    }

    pub fn get_a(&self, species: &str, temperature: Real) -> AntoineResult<Real> {
        self.get_coefficient(species, temperature, Coefficient::A)
    }

    pub fn get_b(&self, species: &str, temperature: Real) -> AntoineResult<Real> {
        self.get_coefficient(species, temperature, Coefficient::B)
    }

    pub fn get_c(&self, species: &str, temperature: Real) -> AntoineResult<Real> {
        self.get_coefficient(species, temperature, Coefficient::C)
    }

    /// Saturation pressure of `species` at `temperature`, in the library's
    /// pressure units.
    pub fn get_saturation_pressure(&self, species: &str, temperature: Real) -> AntoineResult<Real> {
        if !self.contains_species(species) {
            return Err(species_not_found(species));
        }

        let set = self.resolve(species, temperature)?;

        // resolve only returns covering sets
        if !set.contains(temperature) {
            tracing::error!(species, temperature, %set, "resolved set does not cover temperature");
            return Err(VpError::Invariant {
                what: "resolved coefficient set covers queried temperature",
            }
            .into());
        }

        saturation_pressure(set.a, set.b, set.c, temperature, self.config.log_base)
    }

    /// Saturation (boiling) temperature of `species` at `pressure`.
    ///
    /// Sets are tried in registration order; the first whose solution lies
    /// inside its own interval wins. A set with no finite solution is skipped.
    /// Solutions within float round-off of a limit snap to that limit.
    pub fn get_saturation_temperature(&self, species: &str, pressure: Real) -> AntoineResult<Real> {
        let sets = self.coefficient_sets(species)?;
        let tol = Tolerances::default();

        for set in sets {
            match saturation_temperature(set.a, set.b, set.c, pressure, self.config.log_base) {
                Ok(temperature) => match set.snap_to_interval(temperature, tol) {
                    Some(temperature) => return Ok(temperature),
                    None => {
                        tracing::trace!(
                            species,
                            pressure,
                            temperature,
                            %set,
                            "solution outside interval"
                        );
                    }
                },
                Err(err) => {
                    tracing::debug!(species, pressure, %set, error = %err, "no finite solution");
                }
            }
        }

        Err(AntoineError::PressureOutOfRange {
            pressure,
            units: self.config.pressure_units.clone(),
        })
    }
}

fn species_not_found(species: &str) -> AntoineError {
    tracing::debug!(species, "species not registered");
    AntoineError::SpeciesNotFound {
        species: species.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vp_core::numeric::nearly_equal;

    fn boublik() -> CoefficientLibrary {
        let mut lib = CoefficientLibrary::new(LibraryConfig::new(
            "Celsius",
            "mmHg",
            "T. Boublik, V. Fried, and E. Hala, Vapour Pressures of Pure Substances, 1973",
        ));
        lib.register("methanol", 8.08097, 1582.271, 239.726, 14.9, 83.7);
        lib
    }

    #[test]
    fn config_defaults_to_log10() {
        let lib = boublik();
        assert_eq!(lib.log_base(), LogBase::Log10);
        assert_eq!(lib.temperature_units(), "Celsius");
        assert_eq!(lib.pressure_units(), "mmHg");
        assert!(lib.source().contains("Boublik"));
    }

    #[test]
    fn register_creates_and_appends() {
        let mut lib = boublik();
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.coefficient_sets("methanol").unwrap().len(), 1);

        lib.register("methanol", 7.0, 1500.0, 230.0, 84.0, 120.0);
        assert_eq!(lib.len(), 1);
        let sets = lib.coefficient_sets("methanol").unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[1].a, 7.0);
    }

    #[test]
    fn species_names_are_case_sensitive() {
        let lib = boublik();
        assert!(lib.contains_species("methanol"));
        assert!(!lib.contains_species("Methanol"));
        assert!(matches!(
            lib.get_a("Methanol", 50.0),
            Err(AntoineError::SpeciesNotFound { .. })
        ));
    }

    #[test]
    fn resolve_returns_covering_set() {
        let mut lib = boublik();
        lib.register("methanol", 7.0, 1500.0, 230.0, 84.0, 120.0);

        assert_eq!(lib.resolve("methanol", 50.0).unwrap().a, 8.08097);
        assert_eq!(lib.resolve("methanol", 100.0).unwrap().a, 7.0);
    }

    #[test]
    fn accessors_return_each_coefficient() {
        let lib = boublik();
        assert_eq!(lib.get_a("methanol", 50.0).unwrap(), 8.08097);
        assert_eq!(lib.get_b("methanol", 50.0).unwrap(), 1582.271);
        assert_eq!(lib.get_c("methanol", 50.0).unwrap(), 239.726);
    }

    #[test]
    fn empty_library() {
        let lib = CoefficientLibrary::default();
        assert!(lib.is_empty());
        assert_eq!(lib.species().count(), 0);
        assert!(matches!(
            lib.resolve("water", 25.0),
            Err(AntoineError::SpeciesNotFound { .. })
        ));
    }

    #[test]
    fn zero_denominator_propagates_from_pressure() {
        let mut lib = boublik();
        lib.register("odd", 1.0, 100.0, -50.0, 0.0, 100.0);
        assert!(matches!(
            lib.get_saturation_pressure("odd", 50.0),
            Err(AntoineError::Numeric(VpError::NonFinite { .. }))
        ));
    }

    #[test]
    fn saturation_temperature_at_normal_boiling_point() {
        let lib = boublik();
        let t = lib.get_saturation_temperature("methanol", 760.0).unwrap();
        // methanol boils near 64.7 °C
        assert!(t > 64.0 && t < 65.5);

        let p = lib.get_saturation_pressure("methanol", t).unwrap();
        assert!(nearly_equal(p, 760.0, Tolerances { abs: 1e-8, rel: 1e-10 }));
    }

    #[test]
    fn saturation_temperature_out_of_range() {
        let lib = boublik();
        let err = lib.get_saturation_temperature("methanol", 1.0e6).unwrap_err();
        assert!(matches!(
            err,
            AntoineError::PressureOutOfRange { ref units, .. } if units == "mmHg"
        ));

        // log(0) has no finite solution in any set
        assert!(matches!(
            lib.get_saturation_temperature("methanol", 0.0),
            Err(AntoineError::PressureOutOfRange { .. })
        ));
    }

    #[test]
    fn saturation_temperature_skips_set_without_solution() {
        let mut lib = boublik();
        // log10(1000) equals a, so the first set has no usable solution
        lib.register("mixed", 3.0, 1500.0, 230.0, 0.0, 200.0);
        lib.register("mixed", 8.08097, 1582.271, 239.726, 14.9, 83.7);

        let t = lib.get_saturation_temperature("mixed", 1000.0).unwrap();
        let expected = 1582.271 / (8.08097 - 3.0) - 239.726;
        assert!(nearly_equal(t, expected, Tolerances::default()));
    }

    #[test]
    fn saturation_temperature_skips_set_with_solution_out_of_interval() {
        let mut lib = boublik();
        // same correlation, first interval excludes the ~64.5 °C solution
        lib.register("split", 8.08097, 1582.271, 239.726, 0.0, 40.0);
        lib.register("split", 8.08097, 1582.271, 239.726, 40.0, 100.0);
        lib.register("split", 7.0, 1500.0, 230.0, 0.0, 200.0);

        let t = lib.get_saturation_temperature("split", 760.0).unwrap();
        let expected = 1582.271 / (8.08097 - 760f64.log10()) - 239.726;
        assert!(nearly_equal(t, expected, Tolerances::default()));
        assert!(t > 64.0 && t < 65.5);
    }

    #[test]
    fn saturation_temperature_first_in_range_set_wins() {
        let mut lib = boublik();
        lib.register("twice", 8.08097, 1582.271, 239.726, 0.0, 100.0);
        lib.register("twice", 7.0, 1500.0, 230.0, 0.0, 200.0);

        let t = lib.get_saturation_temperature("twice", 760.0).unwrap();
        let expected = 1582.271 / (8.08097 - 760f64.log10()) - 239.726;
        assert!(nearly_equal(t, expected, Tolerances::default()));
    }

    #[test]
    fn saturation_temperature_natural_log_round_trip() {
        let mut lib = CoefficientLibrary::new(
            LibraryConfig::new("Kelvin", "kPa", "ln-form fit").with_log_base(LogBase::Natural),
        );
        lib.register("methanol", 16.5785, 3638.27, -33.65, 288.0, 357.0);

        let p = lib.get_saturation_pressure("methanol", 320.0).unwrap();
        let t = lib.get_saturation_temperature("methanol", p).unwrap();
        assert!(nearly_equal(t, 320.0, Tolerances { abs: 1e-8, rel: 1e-10 }));

        let expected = 3638.27 / (16.5785 - p.ln()) + 33.65;
        assert!(nearly_equal(t, expected, Tolerances::default()));
    }

    #[test]
    fn saturation_temperature_at_interval_limit_snaps() {
        let lib = boublik();
        let p = lib.get_saturation_pressure("methanol", 83.7).unwrap();
        assert_eq!(lib.get_saturation_temperature("methanol", p).unwrap(), 83.7);

        let p = lib.get_saturation_pressure("methanol", 14.9).unwrap();
        assert_eq!(lib.get_saturation_temperature("methanol", p).unwrap(), 14.9);
    }
}
