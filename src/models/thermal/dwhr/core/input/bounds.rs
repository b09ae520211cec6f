use uom::si::{f64::VolumeRate, volume_rate::gallon_per_minute};

use crate::support::constraint::StrictlyPositive;

use super::ParametersError;

/// Flow range over which the performance maps are evaluated.
///
/// Map inputs are clamped into `[min_flow, max_flow]` before evaluation,
/// which keeps the fitted polynomials inside their data and stabilizes the
/// fixture solver. Flows used in the energy balance are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectivenessBounds {
    min_flow: f64,
    max_flow: f64,
}

impl EffectivenessBounds {
    /// Constructs validated flow bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`ParametersError`] if either bound is not strictly positive
    /// or if `min_flow >= max_flow`.
    pub fn new(min_flow: VolumeRate, max_flow: VolumeRate) -> Result<Self, ParametersError> {
        let min = StrictlyPositive::new(min_flow.get::<gallon_per_minute>())
            .map_err(ParametersError::FlowBound)?
            .into_inner();
        let max = StrictlyPositive::new(max_flow.get::<gallon_per_minute>())
            .map_err(ParametersError::FlowBound)?
            .into_inner();

        if min >= max {
            return Err(ParametersError::InvertedFlowBounds { min, max });
        }

        Ok(Self {
            min_flow: min,
            max_flow: max,
        })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min_flow(&self) -> VolumeRate {
        VolumeRate::new::<gallon_per_minute>(self.min_flow)
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max_flow(&self) -> VolumeRate {
        VolumeRate::new::<gallon_per_minute>(self.max_flow)
    }

    /// Clamps a flow in gal/min into the map domain.
    #[must_use]
    pub fn clamp(&self, flow: f64) -> f64 {
        flow.clamp(self.min_flow, self.max_flow)
    }
}

impl Default for EffectivenessBounds {
    fn default() -> Self {
        Self {
            min_flow: 0.5,
            max_flow: 7.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpm(value: f64) -> VolumeRate {
        VolumeRate::new::<gallon_per_minute>(value)
    }

    #[test]
    fn clamps_into_range() {
        let bounds = EffectivenessBounds::default();
        assert_eq!(bounds.clamp(0.1), 0.5);
        assert_eq!(bounds.clamp(2.51), 2.51);
        assert_eq!(bounds.clamp(9.0), 7.5);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result = EffectivenessBounds::new(gpm(3.0), gpm(1.0));
        assert!(matches!(
            result,
            Err(ParametersError::InvertedFlowBounds { .. })
        ));
        assert!(EffectivenessBounds::new(gpm(2.0), gpm(2.0)).is_err());
    }

    #[test]
    fn rejects_non_positive_bounds() {
        assert!(matches!(
            EffectivenessBounds::new(gpm(0.0), gpm(7.5)),
            Err(ParametersError::FlowBound(_))
        ));
    }
}
