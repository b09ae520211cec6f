//! Fixture energy balance and heat quantities.
//!
//! All temperatures are °F, flows gal/min, volumes gal, and heat Btu.

use super::{DomainError, WaterProperties};

/// Slope of the Manouchehri unequal-flow correction.
const UNEQUAL_FLOW_SLOPE: f64 = 0.3452;

/// Physical installation of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Configuration {
    /// The device preheats all water delivered to the fixture.
    Equal,

    /// The device preheats make-up water for the water heater.
    UnequalWaterHeater,

    /// The device preheats the cold supply to the fixture only.
    UnequalFixture,
}

impl Configuration {
    /// Every configuration, in reporting order.
    pub const ALL: [Self; 3] = [Self::Equal, Self::UnequalWaterHeater, Self::UnequalFixture];
}

/// Returns the fraction of the fixture flow that passes the device's cold side.
///
/// The fixture blends cold water at `cold_inlet_temperature` with hot water
/// at `water_heater_temperature` to reach `shower_temperature`, so the cold
/// share is `(T_shower − T_heater) / (T_cold − T_heater)`:
///
/// - [`Configuration::Equal`]: always 1.
/// - [`Configuration::UnequalWaterHeater`]: the hot share, `1 − cold share`,
///   since the device feeds the water heater.
/// - [`Configuration::UnequalFixture`]: the cold share. Inside the fixture
///   solver `cold_inlet_temperature` is the current device outlet estimate,
///   not the mains temperature.
///
/// The result is clamped to `[0, 1]`.
///
/// # Errors
///
/// Returns [`DomainError::ZeroTemperatureSpan`] if the cold inlet and water
/// heater temperatures are equal, or [`DomainError::NonFinite`] if the
/// inputs are not finite.
pub fn cold_fraction(
    configuration: Configuration,
    cold_inlet_temperature: f64,
    shower_temperature: f64,
    water_heater_temperature: f64,
) -> Result<f64, DomainError> {
    if configuration == Configuration::Equal {
        return Ok(1.0);
    }

    let span = cold_inlet_temperature - water_heater_temperature;
    if span == 0.0 {
        return Err(DomainError::ZeroTemperatureSpan {
            inlet_temperature: cold_inlet_temperature,
        });
    }

    let cold_share = DomainError::check_finite(
        "cold fraction",
        (shower_temperature - water_heater_temperature) / span,
    )?
    .clamp(0.0, 1.0);

    Ok(match configuration {
        Configuration::UnequalWaterHeater => 1.0 - cold_share,
        Configuration::UnequalFixture | Configuration::Equal => cold_share,
    })
}

/// Returns the flow through the device's cold side for a fixture flow.
///
/// # Errors
///
/// Propagates errors from [`cold_fraction`].
pub fn cold_side_flow(
    configuration: Configuration,
    total_flow: f64,
    cold_inlet_temperature: f64,
    shower_temperature: f64,
    water_heater_temperature: f64,
) -> Result<f64, DomainError> {
    let fraction = cold_fraction(
        configuration,
        cold_inlet_temperature,
        shower_temperature,
        water_heater_temperature,
    )?;
    Ok(total_flow * fraction)
}

/// Returns `effectiveness · ρ · flow_or_volume · c_p · (T_in − T_out)`.
///
/// Pass a volume (gal) for heat in Btu or a flow (gal/min) for a rate in
/// Btu/min.
#[must_use]
pub fn heat_quantity(
    effectiveness: f64,
    flow_or_volume: f64,
    inlet_temperature: f64,
    outlet_temperature: f64,
    water: &WaterProperties,
) -> f64 {
    let mass = flow_or_volume * water.density();
    effectiveness * mass * water.specific_heat() * (inlet_temperature - outlet_temperature)
}

/// Returns the Manouchehri factor `0.3452 · ln(ratio) + 1` that scales an
/// equal-flow heat recovery rate to unequal flow.
///
/// `ratio` is drain-side flow over cold-side flow.
///
/// # Errors
///
/// Returns [`DomainError::InvalidFlowRatio`] unless `ratio` is positive and finite.
pub fn unequal_flow_correction(ratio: f64) -> Result<f64, DomainError> {
    if !(ratio > 0.0 && ratio.is_finite()) {
        return Err(DomainError::InvalidFlowRatio { ratio });
    }
    Ok(UNEQUAL_FLOW_SLOPE * ratio.ln() + 1.0)
}
