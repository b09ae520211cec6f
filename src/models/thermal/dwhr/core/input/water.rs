use crate::support::constraint::StrictlyPositive;

use super::ParametersError;

/// Constant water properties used in every heat calculation.
///
/// Values are in US customary units to match the fitted correlations:
/// density in lb/gal and specific heat in Btu/(lb·°F).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterProperties {
    density: f64,
    specific_heat: f64,
}

impl WaterProperties {
    /// Constructs validated water properties.
    ///
    /// # Errors
    ///
    /// Returns [`ParametersError::WaterProperty`] if either value is not strictly positive.
    pub fn new(density: f64, specific_heat: f64) -> Result<Self, ParametersError> {
        let density = StrictlyPositive::new(density)
            .map_err(ParametersError::WaterProperty)?
            .into_inner();
        let specific_heat = StrictlyPositive::new(specific_heat)
            .map_err(ParametersError::WaterProperty)?
            .into_inner();
        Ok(Self {
            density,
            specific_heat,
        })
    }

    /// Density, lb/gal.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Specific heat, Btu/(lb·°F).
    #[must_use]
    pub fn specific_heat(&self) -> f64 {
        self.specific_heat
    }

    /// Heat carried per gallon per degree, Btu/(gal·°F).
    #[must_use]
    pub fn volumetric_heat_capacity(&self) -> f64 {
        self.density * self.specific_heat
    }
}

impl Default for WaterProperties {
    /// Water at 80 °F.
    fn default() -> Self {
        Self {
            density: 8.3176,
            specific_heat: 0.998,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_density() {
        assert!(WaterProperties::new(0.0, 0.998).is_err());
        assert!(WaterProperties::new(8.3176, -1.0).is_err());
    }

    #[test]
    fn volumetric_heat_capacity_at_80f() {
        let water = WaterProperties::default();
        assert_eq!(water.volumetric_heat_capacity(), 8.3176 * 0.998);
    }
}
