//! Series processing across all three configurations.

mod error;

pub use error::ProcessError;

use tracing::debug;
use twine_core::Observer;
use uom::si::temperature_interval::degree_fahrenheit as delta_fahrenheit;

use crate::support::units::TemperatureDifference;

use super::{
    Action, Configuration, DomainError, DrawResult, DrawSeries, Event, ProcessorConfig,
    ProfileSavings, SeriesResults, evaluate,
    fixture::{self, FixtureSolution},
    resolved::{Context, ResolvedDraw},
};

/// Computes per-draw and total heat recovery for a draw series.
///
/// # Errors
///
/// Returns a [`ProcessError`] naming the configuration and draw that left
/// the numeric domain.
pub fn process(
    series: &DrawSeries,
    config: &ProcessorConfig,
) -> Result<SeriesResults, ProcessError> {
    process_observed(series, config, ())
}

/// Like [`process`], with an observer attached to the fixture solver.
///
/// # Errors
///
/// Returns a [`ProcessError`] naming the configuration and draw that left
/// the numeric domain.
pub fn process_observed<Obs>(
    series: &DrawSeries,
    config: &ProcessorConfig,
    observer: Obs,
) -> Result<SeriesResults, ProcessError>
where
    Obs: Observer<Event, Action>,
{
    let context = Context::new(config);
    let draws: Vec<ResolvedDraw> = series.draws().iter().map(ResolvedDraw::new).collect();

    let equal = evaluate_each(Configuration::Equal, &draws, |draw| {
        evaluate::equal(draw, &context)
    })?;
    let unequal_water_heater = evaluate_each(Configuration::UnequalWaterHeater, &draws, |draw| {
        evaluate::unequal_water_heater(draw, &context)
    })?;
    let FixtureSolution {
        results: unequal_fixture,
        summary: fixture,
    } = fixture::solve(&draws, &context, &config.solver, observer)?;

    let savings = ProfileSavings::from_results(&equal, &unequal_water_heater, &unequal_fixture);
    let available_heat = available_heat(series, config);

    debug!(
        draws = draws.len(),
        savings_equal = savings.savings_equal,
        savings_unequal_water_heater = savings.savings_unequal_water_heater,
        savings_unequal_fixture = savings.savings_unequal_fixture,
        fixture_iters = fixture.iters,
        "processed draw series"
    );

    Ok(SeriesResults {
        equal,
        unequal_water_heater,
        unequal_fixture,
        fixture,
        savings,
        available_heat,
    })
}

/// Processes several draw profiles against one configuration.
///
/// Profiles are independent, so one failing does not affect the others.
#[must_use]
pub fn process_profiles(
    profiles: &[DrawSeries],
    config: &ProcessorConfig,
) -> Vec<Result<SeriesResults, ProcessError>> {
    profiles
        .iter()
        .map(|series| process(series, config))
        .collect()
}

fn evaluate_each(
    configuration: Configuration,
    draws: &[ResolvedDraw],
    evaluator: impl Fn(&ResolvedDraw) -> Result<DrawResult, DomainError>,
) -> Result<Vec<DrawResult>, ProcessError> {
    draws
        .iter()
        .enumerate()
        .map(|(index, draw)| {
            if draw.is_idle() {
                return Ok(idle_result());
            }
            evaluator(draw).map_err(|source| ProcessError::Domain {
                configuration,
                draw: index,
                source,
            })
        })
        .collect()
}

fn idle_result() -> DrawResult {
    DrawResult {
        effectiveness: 0.0,
        cold_side_flow: 0.0,
        heat_recovery_rate: 0.0,
        heat_recovered: 0.0,
        cold_side_outlet_temperature: None,
    }
}

/// Heat a perfect device would recover from the series, Btu.
fn available_heat(series: &DrawSeries, config: &ProcessorConfig) -> f64 {
    let drain = config.parameters.drain_inlet_temperature();
    let capacity = config.water.volumetric_heat_capacity();
    series
        .draws()
        .iter()
        .map(|draw| {
            let rise = drain.minus(draw.mains_temperature()).get::<delta_fahrenheit>();
            ResolvedDraw::new(draw).volume() * capacity * rise
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

    use crate::models::thermal::dwhr::core::{
        DeviceParameters, EqualFlowCorrelation, FixtureSolveError, Status,
        test_support::{constant_config, sample_config, series},
    };

    #[test]
    fn constant_quartic_reproduces_rated_savings() {
        let config = ProcessorConfig {
            correlation: EqualFlowCorrelation::Quartic,
            ..constant_config()
        };
        let draws = series(&[[2.51, 5.0, 55.0, 1.5]]);

        let results = process(&draws, &config).unwrap();

        let expected = 0.42 * 2.51 * 5.0 * 8.3176 * 0.998 * (100.4 - 55.0);
        assert_relative_eq!(results.equal[0].heat_recovered, expected, max_relative = 1e-12);
        assert_relative_eq!(
            results.savings.savings_equal,
            expected / 100_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn results_line_up_with_draws() {
        let config = sample_config();
        let draws = series(&[
            [2.5, 5.0, 55.0, 1.0],
            [0.0, 1.0, 55.0, 0.0],
            [1.8, 8.0, 60.0, 0.6],
        ]);

        let results = process(&draws, &config).unwrap();

        for configuration in Configuration::ALL {
            assert_eq!(results.results(configuration).len(), 3);
            assert_eq!(results.results(configuration)[1].heat_recovered, 0.0);
        }
        assert_eq!(results.fixture.diagnostics.len(), 3);
        assert!(results.fixture.is_converged());
    }

    #[test]
    fn savings_sum_per_draw_heat() {
        let config = sample_config();
        let draws = series(&[[2.5, 5.0, 55.0, 1.0], [1.8, 8.0, 60.0, 0.6]]);

        let results = process(&draws, &config).unwrap();

        for configuration in Configuration::ALL {
            let total: f64 = results
                .results(configuration)
                .iter()
                .map(|r| r.heat_recovered)
                .sum();
            assert_relative_eq!(
                results.savings.get(configuration),
                total / 100_000.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn recovery_never_exceeds_available_heat() {
        let config = sample_config();
        let draws = series(&[
            [2.5, 5.0, 55.0, 1.0],
            [1.8, 8.0, 60.0, 0.6],
            [4.0, 2.0, 48.0, 2.2],
        ]);

        let results = process(&draws, &config).unwrap();

        let expected_available: f64 = [(2.5 * 5.0, 45.4), (1.8 * 8.0, 40.4), (4.0 * 2.0, 52.4)]
            .iter()
            .map(|(volume, rise)| volume * 8.3176 * 0.998 * rise)
            .sum();
        assert_relative_eq!(results.available_heat, expected_available, max_relative = 1e-9);
        assert_relative_eq!(
            results.available_therms(),
            expected_available / 100_000.0,
            max_relative = 1e-9
        );

        for configuration in Configuration::ALL {
            assert!(results.savings.get(configuration) > 0.0);
            assert!(results.savings.get(configuration) < results.available_therms());
        }
    }

    #[test]
    fn processing_is_repeatable() {
        let config = sample_config();
        let draws = series(&[[2.5, 5.0, 55.0, 1.0], [1.8, 8.0, 60.0, 0.6]]);

        assert_eq!(process(&draws, &config), process(&draws, &config));
    }

    #[test]
    fn water_heater_failure_names_the_draw() {
        // Drain water hotter than the water heater, so mains at the heater
        // temperature still has a temperature rise.
        let fahrenheit = |value| ThermodynamicTemperature::new::<degree_fahrenheit>(value);
        let config = ProcessorConfig {
            parameters: DeviceParameters::new(
                0.42,
                fahrenheit(120.0),
                fahrenheit(105.0),
                fahrenheit(115.0),
            )
            .unwrap(),
            ..constant_config()
        };
        let draws = series(&[[2.5, 5.0, 55.0, 1.0], [2.0, 1.0, 115.0, 0.5]]);

        let error = process(&draws, &config).unwrap_err();

        assert!(matches!(
            error,
            ProcessError::Domain {
                configuration: Configuration::UnequalWaterHeater,
                draw: 1,
                source: DomainError::ZeroTemperatureSpan { .. },
            }
        ));
        assert_eq!(error.draw(), 1);
    }

    #[test]
    fn warm_mains_fails_instead_of_reporting_negative_savings() {
        let config = constant_config();
        let draws = series(&[[2.5, 5.0, 55.0, 1.0], [2.5, 5.0, 102.0, 1.0]]);

        let error = process(&draws, &config).unwrap_err();

        assert!(matches!(
            error,
            ProcessError::Domain {
                configuration: Configuration::Equal,
                draw: 1,
                source: DomainError::MainsAboveDrain { .. },
            }
        ));
    }

    #[test]
    fn small_cold_share_with_cold_mains_keeps_every_total() {
        let config = sample_config();
        let draws = series(&[[2.5, 5.0, 35.0, 2.475], [2.5, 5.0, 55.0, 1.0]]);

        let results = process(&draws, &config).unwrap();

        assert!(results.fixture.is_converged());
        for configuration in Configuration::ALL {
            assert!(results.savings.get(configuration) > 0.0);
            assert!(results.savings.get(configuration) < results.available_therms());
        }
    }

    #[test]
    fn all_hot_draw_fails_the_fixture_solver() {
        let config = constant_config();
        let draws = series(&[[1.2, 1.0, 55.0, 1.2]]);

        let error = process(&draws, &config).unwrap_err();

        assert_eq!(
            error,
            ProcessError::Fixture(FixtureSolveError::Domain {
                draw: 0,
                source: DomainError::VanishingColdFlow { flow: 0.0 },
            })
        );
    }

    #[test]
    fn observer_sees_every_pass() {
        let config = sample_config();
        let draws = series(&[[2.5, 5.0, 55.0, 1.0]]);

        let mut passes = 0;
        let results = process_observed(&draws, &config, |event: &Event| -> Option<Action> {
            passes = event.iter;
            None
        })
        .unwrap();

        assert_eq!(results.fixture.status, Status::Converged);
        assert_eq!(passes, results.fixture.iters);
    }

    #[test]
    fn profiles_fail_independently() {
        let config = constant_config();
        let profiles = [
            series(&[[2.5, 5.0, 55.0, 1.0]]),
            series(&[[1.2, 1.0, 55.0, 1.2]]),
            series(&[[1.8, 8.0, 60.0, 0.6]]),
        ];

        let results = process_profiles(&profiles, &config);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(results[1].as_ref().map_err(ProcessError::draw), Err(0));
        assert_eq!(
            results[2].as_ref().unwrap(),
            &process(&profiles[2], &config).unwrap()
        );
    }
}
