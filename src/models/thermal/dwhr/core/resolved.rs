//! Inputs resolved to the US customary units the correlations are fitted in.

use uom::si::{
    thermodynamic_temperature::degree_fahrenheit, time::minute, volume_rate::gallon_per_minute,
};

use super::{
    DomainError, Draw, EffectivenessBounds, EqualFlowCorrelation, PerformanceCoefficients,
    ProcessorConfig, WaterProperties,
};

/// Series-wide constants shared by every evaluator.
#[derive(Debug, Clone, Copy)]
pub(super) struct Context<'a> {
    pub(super) coefficients: &'a PerformanceCoefficients,
    pub(super) correlation: EqualFlowCorrelation,
    pub(super) bounds: EffectivenessBounds,
    pub(super) water: WaterProperties,
    pub(super) rated_effectiveness: f64,
    pub(super) drain_inlet_temperature: f64,
    pub(super) shower_temperature: f64,
    pub(super) water_heater_temperature: f64,
}

impl<'a> Context<'a> {
    pub(super) fn new(config: &'a ProcessorConfig) -> Self {
        let params = &config.parameters;
        Self {
            coefficients: &config.coefficients,
            correlation: config.correlation,
            bounds: config.bounds,
            water: config.water,
            rated_effectiveness: params.rated_effectiveness(),
            drain_inlet_temperature: params.drain_inlet_temperature().get::<degree_fahrenheit>(),
            shower_temperature: params.shower_temperature().get::<degree_fahrenheit>(),
            water_heater_temperature: params.water_heater_temperature().get::<degree_fahrenheit>(),
        }
    }

    /// Effectiveness with both sides at `flow`.
    pub(super) fn equal_flow_effectiveness(&self, flow: f64) -> f64 {
        let x = self.bounds.clamp(flow);
        let factor = match self.correlation {
            EqualFlowCorrelation::Surface => self.coefficients.unequal_flow.evaluate(x, x),
            EqualFlowCorrelation::Quartic => self.coefficients.equal_flow.evaluate(x),
        };
        factor * self.rated_effectiveness
    }

    /// Temperature rise available to the cold side of a draw, °F.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MainsAboveDrain`] if the rise is negative.
    pub(super) fn temperature_rise(&self, draw: &ResolvedDraw) -> Result<f64, DomainError> {
        let rise = self.drain_inlet_temperature - draw.mains_temperature;
        if rise < 0.0 {
            return Err(DomainError::MainsAboveDrain {
                mains: draw.mains_temperature,
                drain: self.drain_inlet_temperature,
            });
        }
        Ok(rise)
    }

    /// Effectiveness with `drain_flow` on the drain side and `cold_flow` on the cold side.
    pub(super) fn unequal_flow_effectiveness(&self, drain_flow: f64, cold_flow: f64) -> f64 {
        let factor = self
            .coefficients
            .unequal_flow
            .evaluate(self.bounds.clamp(drain_flow), self.bounds.clamp(cold_flow));
        factor * self.rated_effectiveness
    }
}

/// One draw in gal/min, minutes, and °F.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ResolvedDraw {
    pub(super) flow: f64,
    pub(super) duration: f64,
    pub(super) mains_temperature: f64,
    pub(super) hot_flow: f64,
}

impl ResolvedDraw {
    pub(super) fn new(draw: &Draw) -> Self {
        Self {
            flow: draw.flow_rate().get::<gallon_per_minute>(),
            duration: draw.duration().get::<minute>(),
            mains_temperature: draw.mains_temperature().get::<degree_fahrenheit>(),
            hot_flow: draw.hot_flow_rate().get::<gallon_per_minute>(),
        }
    }

    /// Mixed water volume, gal.
    pub(super) fn volume(&self) -> f64 {
        self.flow * self.duration
    }

    /// True if nothing flows, so there is nothing to recover.
    pub(super) fn is_idle(&self) -> bool {
        self.flow == 0.0
    }
}
