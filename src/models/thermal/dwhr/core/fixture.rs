//! Fixed-point solver for the [`Configuration::UnequalFixture`] arrangement.
//!
//! With the device feeding only the fixture's cold supply, the cold-side flow
//! sets the device outlet temperature, and the outlet temperature sets how
//! much cold water the fixture blends in. Each pass updates every active draw:
//!
//! 1. Equal-flow effectiveness at the current cold-side estimate.
//! 2. Equal-flow recovery rate on the smaller of the drain and cold flows.
//! 3. Manouchehri correction for the drain-to-cold flow ratio.
//! 4. Cold-side outlet temperature from the corrected rate, bounded by the
//!    drain inlet temperature. The correction can overshoot when the cold
//!    estimate is a small share of the draw; a bounded outlet keeps the next
//!    cold share positive, and the rate is reduced to match.
//! 5. New cold-side estimate from the fixture energy balance at that outlet.
//!
//! Passes repeat until the largest change in any draw's estimate falls below
//! [`FixtureSolverConfig::flow_tol`]. Idle draws are never iterated.

mod config;
mod error;
mod event;
mod solution;

pub use config::FixtureSolverConfig;
pub use error::FixtureSolveError;
pub use event::{Action, Event};
pub use solution::{FixtureDiagnostics, FixtureSummary, Status};

pub(super) use solution::FixtureSolution;

use tracing::{debug, warn};
use twine_core::Observer;
use uom::si::volume_rate::gallon_per_minute;

use super::{
    Configuration, DomainError, DrawResult,
    energy_balance::{cold_side_flow, heat_quantity, unequal_flow_correction},
    resolved::{Context, ResolvedDraw},
};

/// Change assigned to an active draw before its first pass, gal/min.
const INITIAL_FLOW_DELTA: f64 = 9999.0;

/// Solves the fixture arrangement for every draw in a series.
///
/// The observer sees an [`Event`] after each pass and may stop the solver
/// with [`Action::StopEarly`]. Hitting the iteration cap is not an error:
/// the last estimates are returned with [`Status::MaxIters`].
///
/// # Errors
///
/// Returns [`FixtureSolveError::Domain`] for the first draw whose pass
/// leaves the numeric domain, such as a cold-side estimate reaching zero.
pub(super) fn solve<Obs>(
    draws: &[ResolvedDraw],
    context: &Context<'_>,
    config: &FixtureSolverConfig,
    mut observer: Obs,
) -> Result<FixtureSolution, FixtureSolveError>
where
    Obs: Observer<Event, Action>,
{
    let flow_tol = config.flow_tol.get::<gallon_per_minute>();
    let min_cold_flow = config.min_cold_flow.get::<gallon_per_minute>();

    let mut iterates: Vec<Iterate> = draws.iter().map(Iterate::new).collect();
    let mut max_flow_delta = max_delta(&iterates);
    let mut iter = 0;

    let status = loop {
        if max_flow_delta < flow_tol {
            break Status::Converged;
        }
        if iter >= config.max_iters {
            warn!(
                iters = iter,
                max_flow_delta, "fixture solver reached the iteration limit"
            );
            break Status::MaxIters;
        }
        iter += 1;

        for (index, (draw, iterate)) in draws.iter().zip(&mut iterates).enumerate() {
            if draw.is_idle() {
                continue;
            }
            iterate
                .advance(draw, context, min_cold_flow)
                .map_err(|source| FixtureSolveError::Domain {
                    draw: index,
                    source,
                })?;
            iterate.converged_at = if iterate.flow_delta < flow_tol {
                iterate.converged_at.or(Some(iter))
            } else {
                None
            };
        }

        max_flow_delta = max_delta(&iterates);
        let unconverged = iterates
            .iter()
            .filter(|iterate| iterate.flow_delta >= flow_tol)
            .count();
        debug!(iter, max_flow_delta, unconverged, "fixture pass");

        let event = Event {
            iter,
            max_flow_delta,
            unconverged,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            if unconverged > 0 {
                debug!(iter, "fixture solver stopped by observer");
                break Status::StoppedByObserver;
            }
        }
    };

    let (results, diagnostics): (Vec<_>, Vec<_>) = iterates
        .iter()
        .map(|iterate| (iterate.result(), iterate.diagnostics()))
        .unzip();

    Ok(FixtureSolution {
        results,
        summary: FixtureSummary {
            status,
            iters: iter,
            max_flow_delta,
            diagnostics,
        },
    })
}

fn max_delta(iterates: &[Iterate]) -> f64 {
    iterates
        .iter()
        .map(|iterate| iterate.flow_delta)
        .fold(0.0, f64::max)
}

/// Per-draw solver state.
#[derive(Debug, Clone, Copy)]
struct Iterate {
    cold_flow: f64,
    effectiveness: f64,
    heat_recovery_rate: f64,
    heat_recovered: f64,
    outlet_temperature: f64,
    flow_ratio: Option<f64>,
    flow_delta: f64,
    converged_at: Option<usize>,
}

impl Iterate {
    /// Seeds the cold-side estimate with the fixture's cold water flow.
    fn new(draw: &ResolvedDraw) -> Self {
        let idle = draw.is_idle();
        Self {
            cold_flow: draw.flow - draw.hot_flow,
            effectiveness: 0.0,
            heat_recovery_rate: 0.0,
            heat_recovered: 0.0,
            outlet_temperature: draw.mains_temperature,
            flow_ratio: None,
            flow_delta: if idle { 0.0 } else { INITIAL_FLOW_DELTA },
            converged_at: idle.then_some(0),
        }
    }

    fn advance(
        &mut self,
        draw: &ResolvedDraw,
        context: &Context<'_>,
        min_cold_flow: f64,
    ) -> Result<(), DomainError> {
        let max_rise = context.temperature_rise(draw)?;

        let cold_flow = self.cold_flow;
        if cold_flow.is_nan() || cold_flow <= min_cold_flow {
            return Err(DomainError::VanishingColdFlow { flow: cold_flow });
        }

        let effectiveness = context.equal_flow_effectiveness(cold_flow);
        let equal_flow_rate = heat_quantity(
            effectiveness,
            draw.flow.min(cold_flow),
            context.drain_inlet_temperature,
            draw.mains_temperature,
            &context.water,
        );

        let flow_ratio = draw.flow / cold_flow;
        let corrected_rate = DomainError::check_finite(
            "heat recovery rate",
            equal_flow_rate * unequal_flow_correction(flow_ratio)?,
        )?;

        let capacity_rate = cold_flow * context.water.volumetric_heat_capacity();
        let rise = DomainError::check_finite(
            "cold-side temperature rise",
            corrected_rate / capacity_rate,
        )?;
        let (heat_recovery_rate, outlet_temperature) = if rise > max_rise {
            (capacity_rate * max_rise, context.drain_inlet_temperature)
        } else {
            (corrected_rate, draw.mains_temperature + rise)
        };

        let next_cold_flow = cold_side_flow(
            Configuration::UnequalFixture,
            draw.flow,
            outlet_temperature,
            context.shower_temperature,
            context.water_heater_temperature,
        )?;

        *self = Self {
            cold_flow: next_cold_flow,
            effectiveness,
            heat_recovery_rate,
            heat_recovered: heat_recovery_rate * draw.duration,
            outlet_temperature,
            flow_ratio: Some(flow_ratio),
            flow_delta: (next_cold_flow - cold_flow).abs(),
            converged_at: self.converged_at,
        };
        Ok(())
    }

    fn result(&self) -> DrawResult {
        DrawResult {
            effectiveness: self.effectiveness,
            cold_side_flow: self.cold_flow,
            heat_recovery_rate: self.heat_recovery_rate,
            heat_recovered: self.heat_recovered,
            cold_side_outlet_temperature: Some(self.outlet_temperature),
        }
    }

    fn diagnostics(&self) -> FixtureDiagnostics {
        FixtureDiagnostics {
            flow_ratio: self.flow_ratio,
            flow_delta: self.flow_delta,
            converged_at: self.converged_at,
        }
    }
}
