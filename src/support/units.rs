//! Extensions to [`uom`] for US customary heat-recovery work.
//!
//! Model inputs are [`uom`] quantities, but the DWHR correlations are fitted
//! in gal/min and °F and report heat in Btu. This module holds the pieces
//! that bridge the two.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     temperature_interval::degree_fahrenheit as delta_fahrenheit,
//!     thermodynamic_temperature::degree_fahrenheit,
//! };
//! use dwhr_models::support::units::TemperatureDifference;
//!
//! let drain = ThermodynamicTemperature::new::<degree_fahrenheit>(100.4);
//! let mains = ThermodynamicTemperature::new::<degree_fahrenheit>(55.0);
//! let delta_t = drain.minus(mains);
//! assert!((delta_t.get::<delta_fahrenheit>() - 45.4).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;

/// Btu in one therm.
pub const BTU_PER_THERM: f64 = 100_000.0;
