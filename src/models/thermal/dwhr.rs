//! Drain water heat recovery (DWHR) models.
//!
//! [`DwhrSavings`] is the [`twine_core::Model`] for this domain: it maps a
//! [`DrawSeries`] to per-draw and total heat recovery in each
//! [`Configuration`]. The computation lives in the internal `core` module,
//! whose public types are re-exported here.
//!
//! ```
//! use dwhr_models::models::thermal::dwhr::{
//!     Configuration, DrawSeries, DwhrSavings, PerformanceCoefficients, ProcessorConfig,
//!     QuarticMap, SurfaceMap,
//! };
//! use twine_core::Model;
//!
//! let coefficients = PerformanceCoefficients {
//!     equal_flow: QuarticMap::new([0.0, 0.0, 0.0, 0.0, 1.0]),
//!     unequal_flow: SurfaceMap::new(vec![1.0]).unwrap(),
//! };
//! let model = DwhrSavings::new(ProcessorConfig::new(coefficients));
//!
//! // Five minutes at 2.5 gal/min, 1 gal/min of it hot, with 55 °F mains.
//! let series = DrawSeries::from_customary_rows([[2.5, 5.0, 55.0, 1.0]]).unwrap();
//! let results = model.call(&series).unwrap();
//!
//! assert!(results.fixture.is_converged());
//! assert!(results.savings.get(Configuration::Equal) > 0.0);
//! ```

pub(crate) mod core;

pub use core::{
    Action, Configuration, DeviceParameters, DomainError, Draw, DrawError, DrawResult, DrawSeries,
    EffectivenessBounds, EqualFlowCorrelation, Event, FixtureDiagnostics, FixtureSolveError,
    FixtureSolverConfig, FixtureSummary, MapError, ParametersError, PerformanceCoefficients,
    ProcessError, ProcessorConfig, ProfileSavings, QuarticMap, SeriesError, SeriesResults, Status,
    SurfaceMap, WaterProperties, cold_fraction, cold_side_flow, evaluate_quartic,
    evaluate_surface, heat_quantity, process, process_observed, process_profiles,
    unequal_flow_correction,
};

use twine_core::Model;

/// Heat recovery model for a DWHR device.
///
/// Holds a [`ProcessorConfig`] and evaluates draw series against it.
/// The model is immutable, so one instance can serve many threads.
#[derive(Debug, Clone, PartialEq)]
pub struct DwhrSavings {
    config: ProcessorConfig,
}

impl DwhrSavings {
    /// Creates a model from a processing configuration.
    #[must_use]
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Returns the processing configuration.
    #[must_use]
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Evaluates several draw profiles, one result per profile.
    #[must_use]
    pub fn call_profiles(
        &self,
        profiles: &[DrawSeries],
    ) -> Vec<Result<SeriesResults, ProcessError>> {
        process_profiles(profiles, &self.config)
    }
}

impl Model for DwhrSavings {
    type Input = DrawSeries;
    type Output = SeriesResults;
    type Error = ProcessError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        process(input, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    use approx::assert_relative_eq;

    fn model() -> DwhrSavings {
        DwhrSavings::new(ProcessorConfig::new(PerformanceCoefficients {
            equal_flow: QuarticMap::new([0.0, 0.0, 0.0, 0.0, 1.0]),
            unequal_flow: SurfaceMap::new(vec![1.0]).unwrap(),
        }))
    }

    fn profile() -> DrawSeries {
        DrawSeries::from_customary_rows([
            [2.5, 5.0, 55.0, 1.0],
            [1.8, 8.0, 60.0, 0.6],
            [0.0, 1.0, 55.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn model_matches_free_function() {
        let model = model();
        let series = profile();

        assert_eq!(
            model.call(&series).unwrap(),
            process(&series, model.config()).unwrap()
        );
    }

    #[test]
    fn fixture_recovers_least_with_a_constant_map() {
        // A constant surface removes the map's flow dependence, leaving only
        // how much water passes the device's cold side.
        let results = model().call(&profile()).unwrap();
        let savings = results.savings;

        assert!(savings.savings_unequal_fixture < savings.savings_equal);
        assert!(savings.savings_unequal_water_heater < savings.savings_equal);
        assert_relative_eq!(
            savings.savings_equal,
            results.equal.iter().map(|r| r.heat_recovered).sum::<f64>() / 100_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DwhrSavings>();
        assert_send_sync::<SeriesResults>();
        assert_send_sync::<ProcessError>();

        let model = &model();
        let profiles = vec![profile(); 4];
        let serial = model.call_profiles(&profiles);

        let parallel: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = profiles
                .iter()
                .map(|series| scope.spawn(move || model.call(series)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(serial, parallel);
    }
}
