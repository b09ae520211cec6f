use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

use crate::support::constraint::{Constrained, ConstraintError, UnitInterval};

/// Errors in device, bound, or fluid parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParametersError {
    /// The rated effectiveness lies outside `[0, 1]`.
    #[error("invalid rated effectiveness")]
    RatedEffectiveness(#[source] ConstraintError),

    /// A plumbing temperature is NaN or infinite.
    #[error("{name} temperature is not finite")]
    Temperature {
        /// Which temperature failed.
        name: &'static str,
    },

    /// A flow bound is not strictly positive.
    #[error("invalid flow bound")]
    FlowBound(#[source] ConstraintError),

    /// The flow bounds are not strictly increasing.
    #[error("minimum flow {min} gal/min must be below maximum flow {max} gal/min")]
    InvertedFlowBounds {
        /// Lower bound, gal/min.
        min: f64,
        /// Upper bound, gal/min.
        max: f64,
    },

    /// A water density or specific heat is not strictly positive.
    #[error("invalid water property")]
    WaterProperty(#[source] ConstraintError),
}

/// Device and plumbing parameters shared by every draw in a run.
///
/// The rated effectiveness is measured at 2.51 gal/min (CSA B55.1 or
/// IAPMO IGC 346-2017); the performance maps scale it to other flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceParameters {
    rated_effectiveness: Constrained<f64, UnitInterval>,
    drain_inlet_temperature: ThermodynamicTemperature,
    shower_temperature: ThermodynamicTemperature,
    water_heater_temperature: ThermodynamicTemperature,
}

impl DeviceParameters {
    /// Constructs validated device parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParametersError`] if the rated effectiveness lies outside
    /// `[0, 1]` or any temperature is not finite.
    pub fn new(
        rated_effectiveness: f64,
        drain_inlet_temperature: ThermodynamicTemperature,
        shower_temperature: ThermodynamicTemperature,
        water_heater_temperature: ThermodynamicTemperature,
    ) -> Result<Self, ParametersError> {
        let rated_effectiveness =
            UnitInterval::new(rated_effectiveness).map_err(ParametersError::RatedEffectiveness)?;

        for (name, temperature) in [
            ("drain inlet", drain_inlet_temperature),
            ("shower", shower_temperature),
            ("water heater", water_heater_temperature),
        ] {
            if !temperature.get::<degree_fahrenheit>().is_finite() {
                return Err(ParametersError::Temperature { name });
            }
        }

        Ok(Self {
            rated_effectiveness,
            drain_inlet_temperature,
            shower_temperature,
            water_heater_temperature,
        })
    }

    /// Returns a copy with a different rated effectiveness.
    ///
    /// # Errors
    ///
    /// Returns [`ParametersError::RatedEffectiveness`] if the value lies outside `[0, 1]`.
    pub fn with_rated_effectiveness(mut self, rated: f64) -> Result<Self, ParametersError> {
        self.rated_effectiveness =
            UnitInterval::new(rated).map_err(ParametersError::RatedEffectiveness)?;
        Ok(self)
    }

    /// Returns the rated effectiveness of the device.
    #[must_use]
    pub fn rated_effectiveness(&self) -> f64 {
        self.rated_effectiveness.into_inner()
    }

    /// Returns the temperature of water entering the drain side of the device.
    #[must_use]
    pub fn drain_inlet_temperature(&self) -> ThermodynamicTemperature {
        self.drain_inlet_temperature
    }

    /// Returns the mixed water temperature delivered at the fixture.
    #[must_use]
    pub fn shower_temperature(&self) -> ThermodynamicTemperature {
        self.shower_temperature
    }

    /// Returns the water heater set temperature.
    #[must_use]
    pub fn water_heater_temperature(&self) -> ThermodynamicTemperature {
        self.water_heater_temperature
    }
}

impl Default for DeviceParameters {
    /// Hot water temperatures from the 2016 CBECC ACM reference manual
    /// (pg. B-3) and a 0.42 rated device.
    fn default() -> Self {
        Self {
            rated_effectiveness: UnitInterval::new(0.42).expect("0.42 lies in [0, 1]"),
            drain_inlet_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(100.4),
            shower_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(105.0),
            water_heater_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(115.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fahrenheit(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_fahrenheit>(value)
    }

    #[test]
    fn default_matches_reference_run() {
        let params = DeviceParameters::default();
        assert_eq!(params.rated_effectiveness(), 0.42);
        for (temperature, expected) in [
            (params.drain_inlet_temperature(), 100.4),
            (params.shower_temperature(), 105.0),
            (params.water_heater_temperature(), 115.0),
        ] {
            assert!((temperature.get::<degree_fahrenheit>() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_rated_effectiveness_above_one() {
        let result =
            DeviceParameters::new(1.2, fahrenheit(100.4), fahrenheit(105.0), fahrenheit(115.0));
        assert_eq!(
            result,
            Err(ParametersError::RatedEffectiveness(ConstraintError::AboveMaximum))
        );
    }

    #[test]
    fn rejects_non_finite_temperature() {
        let result = DeviceParameters::new(
            0.5,
            fahrenheit(100.4),
            fahrenheit(f64::NAN),
            fahrenheit(115.0),
        );
        assert_eq!(result, Err(ParametersError::Temperature { name: "shower" }));
    }

    #[test]
    fn rated_effectiveness_can_be_replaced() {
        let params = DeviceParameters::default()
            .with_rated_effectiveness(0.55)
            .unwrap();
        assert_eq!(params.rated_effectiveness(), 0.55);
        assert_eq!(
            params.drain_inlet_temperature(),
            DeviceParameters::default().drain_inlet_temperature()
        );
        assert!(DeviceParameters::default().with_rated_effectiveness(-0.1).is_err());
    }
}
