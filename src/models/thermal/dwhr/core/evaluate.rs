//! Evaluators for the non-iterative configurations.
//!
//! Each draw is a deterministic function of its inputs; no state carries
//! between draws.

use super::{
    Configuration, DomainError, DrawResult,
    energy_balance::{cold_side_flow, heat_quantity},
    resolved::{Context, ResolvedDraw},
};

/// Evaluates a draw with the device in the [`Configuration::Equal`] arrangement.
///
/// # Errors
///
/// Returns [`DomainError::MainsAboveDrain`] if the mains water is warmer than
/// the drain water, or [`DomainError::NonFinite`] if the recovered heat is
/// not finite.
pub(super) fn equal(draw: &ResolvedDraw, context: &Context<'_>) -> Result<DrawResult, DomainError> {
    let effectiveness = context.equal_flow_effectiveness(draw.flow);
    recovered(effectiveness, draw.flow, draw, context)
}

/// Evaluates a draw with the device in the [`Configuration::UnequalWaterHeater`] arrangement.
///
/// # Errors
///
/// Returns a [`DomainError`] if the energy balance is undefined (mains at
/// the water heater temperature), the mains water is warmer than the drain
/// water, or the recovered heat is not finite.
pub(super) fn unequal_water_heater(
    draw: &ResolvedDraw,
    context: &Context<'_>,
) -> Result<DrawResult, DomainError> {
    let cold_flow = cold_side_flow(
        Configuration::UnequalWaterHeater,
        draw.flow,
        draw.mains_temperature,
        context.shower_temperature,
        context.water_heater_temperature,
    )?;
    let effectiveness = context.unequal_flow_effectiveness(draw.flow, cold_flow);
    recovered(effectiveness, cold_flow, draw, context)
}

fn recovered(
    effectiveness: f64,
    cold_flow: f64,
    draw: &ResolvedDraw,
    context: &Context<'_>,
) -> Result<DrawResult, DomainError> {
    context.temperature_rise(draw)?;

    let heat = |flow_or_volume| {
        heat_quantity(
            effectiveness,
            flow_or_volume,
            context.drain_inlet_temperature,
            draw.mains_temperature,
            &context.water,
        )
    };

    let heat_recovery_rate = DomainError::check_finite("heat recovery rate", heat(cold_flow))?;
    let heat_recovered =
        DomainError::check_finite("heat recovered", heat(cold_flow * draw.duration))?;

    Ok(DrawResult {
        effectiveness,
        cold_side_flow: cold_flow,
        heat_recovery_rate,
        heat_recovered,
        cold_side_outlet_temperature: None,
    })
}
