use thiserror::Error;

/// A numeric domain violation in a heat-recovery calculation.
///
/// These replace the silent NaN/inf results the underlying formulas would
/// otherwise produce.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// The fixture energy balance divides by `inlet − water heater` temperature.
    #[error("cold inlet temperature {inlet_temperature} °F equals the water heater temperature")]
    ZeroTemperatureSpan {
        /// Cold inlet temperature, °F.
        inlet_temperature: f64,
    },

    /// The cold-side flow estimate reached zero, so the flow ratio is undefined.
    #[error("cold-side flow {flow} gal/min is too small to form a flow ratio")]
    VanishingColdFlow {
        /// Cold-side flow estimate, gal/min.
        flow: f64,
    },

    /// The unequal-flow correction needs a positive, finite flow ratio.
    #[error("flow ratio {ratio} is not positive and finite")]
    InvalidFlowRatio {
        /// Drain-side over cold-side flow.
        ratio: f64,
    },

    /// The mains water is warmer than the drain water, so the device would
    /// cool the cold side instead of recovering heat.
    #[error("mains temperature {mains} °F is above the drain inlet temperature {drain} °F")]
    MainsAboveDrain {
        /// Mains temperature, °F.
        mains: f64,
        /// Drain inlet temperature, °F.
        drain: f64,
    },

    /// A computed quantity was NaN or infinite.
    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },
}

impl DomainError {
    /// Passes `value` through if finite.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonFinite`] naming `quantity` otherwise.
    pub(super) fn check_finite(quantity: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { quantity })
        }
    }
}
