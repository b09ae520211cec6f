//! Heat recovery from drain water for generic vertical DWHR devices.
//!
//! A drain water heat recovery device is a counterflow heat exchanger on a
//! vertical drain stack. Warm drain water falling down the stack preheats
//! cold water flowing up through the outer coil. How much heat a draw yields
//! depends on where the preheated water goes:
//!
//! - [`Configuration::Equal`]: to both the fixture and the water heater, so
//!   the drain and cold sides carry the same flow.
//! - [`Configuration::UnequalWaterHeater`]: to the water heater only.
//! - [`Configuration::UnequalFixture`]: to the fixture's cold supply only. The
//!   fixture then needs less cold water, which changes the device flow, so
//!   this arrangement is solved iteratively.
//!
//! Effectiveness comes from empirical correction maps scaled by the device's
//! rated effectiveness. All computation happens in gal/min, minutes, °F, and
//! Btu, the units the maps are fitted in.

mod config;
mod energy_balance;
mod error;
mod evaluate;
mod fixture;
mod input;
mod performance_map;
mod process;
mod resolved;
mod results;

#[cfg(test)]
mod test_support;

pub use config::ProcessorConfig;
pub use energy_balance::{
    Configuration, cold_fraction, cold_side_flow, heat_quantity, unequal_flow_correction,
};
pub use error::DomainError;
pub use fixture::{
    Action, Event, FixtureDiagnostics, FixtureSolveError, FixtureSolverConfig, FixtureSummary,
    Status,
};
pub use input::{
    DeviceParameters, Draw, DrawError, DrawSeries, EffectivenessBounds, ParametersError,
    SeriesError, WaterProperties,
};
pub use performance_map::{
    EqualFlowCorrelation, MapError, PerformanceCoefficients, QuarticMap, SurfaceMap,
    evaluate_quartic, evaluate_surface,
};
pub use process::{ProcessError, process, process_observed, process_profiles};
pub use results::{DrawResult, ProfileSavings, SeriesResults};
