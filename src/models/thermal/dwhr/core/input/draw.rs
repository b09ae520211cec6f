use thiserror::Error;
use uom::si::{
    f64::{ThermodynamicTemperature, Time, VolumeRate},
    thermodynamic_temperature::degree_fahrenheit,
    time::minute,
    volume_rate::gallon_per_minute,
};

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive};

/// Errors that reject a single draw.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// The flow rate is negative or NaN.
    #[error("invalid flow rate")]
    FlowRate(#[source] ConstraintError),

    /// The duration is not strictly positive.
    #[error("invalid duration")]
    Duration(#[source] ConstraintError),

    /// The mains temperature is NaN or infinite.
    #[error("mains temperature is not finite")]
    MainsTemperature,

    /// The hot water flow rate is negative or exceeds the total flow rate.
    #[error("hot water flow rate {hot} gal/min is outside 0..={total} gal/min")]
    HotFlowRate {
        /// Hot water flow rate, gal/min.
        hot: f64,
        /// Total draw flow rate, gal/min.
        total: f64,
    },
}

/// One water draw at a fixture.
///
/// Draws are validated on construction and immutable afterwards:
///
/// - the flow rate is non-negative,
/// - the duration is strictly positive,
/// - the hot water flow rate lies within `0..=flow_rate`,
/// - the mains temperature is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draw {
    flow_rate: VolumeRate,
    duration: Time,
    mains_temperature: ThermodynamicTemperature,
    hot_flow_rate: VolumeRate,
}

impl Draw {
    /// Constructs a validated draw.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawError`] naming the first invariant the draw violates.
    pub fn new(
        flow_rate: VolumeRate,
        duration: Time,
        mains_temperature: ThermodynamicTemperature,
        hot_flow_rate: VolumeRate,
    ) -> Result<Self, DrawError> {
        let flow_rate = NonNegative::new(flow_rate)
            .map_err(DrawError::FlowRate)?
            .into_inner();
        let duration = StrictlyPositive::new(duration)
            .map_err(DrawError::Duration)?
            .into_inner();

        if !mains_temperature.get::<degree_fahrenheit>().is_finite() {
            return Err(DrawError::MainsTemperature);
        }

        let hot = hot_flow_rate.get::<gallon_per_minute>();
        let total = flow_rate.get::<gallon_per_minute>();
        if !(0.0..=total).contains(&hot) {
            return Err(DrawError::HotFlowRate { hot, total });
        }

        Ok(Self {
            flow_rate,
            duration,
            mains_temperature,
            hot_flow_rate,
        })
    }

    /// Constructs a validated draw from US customary values.
    ///
    /// Flow rates are in gal/min, the duration in minutes, and the mains
    /// temperature in °F, matching the columns of a draw profile.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawError`] naming the first invariant the draw violates.
    pub fn from_customary(
        flow_rate: f64,
        duration: f64,
        mains_temperature: f64,
        hot_flow_rate: f64,
    ) -> Result<Self, DrawError> {
        Self::new(
            VolumeRate::new::<gallon_per_minute>(flow_rate),
            Time::new::<minute>(duration),
            ThermodynamicTemperature::new::<degree_fahrenheit>(mains_temperature),
            VolumeRate::new::<gallon_per_minute>(hot_flow_rate),
        )
    }

    /// Returns the mixed (total) flow rate at the fixture.
    #[must_use]
    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate
    }

    /// Returns the draw duration.
    #[must_use]
    pub fn duration(&self) -> Time {
        self.duration
    }

    /// Returns the cold water mains temperature during the draw.
    #[must_use]
    pub fn mains_temperature(&self) -> ThermodynamicTemperature {
        self.mains_temperature
    }

    /// Returns the hot water flow rate at the fixture.
    #[must_use]
    pub fn hot_flow_rate(&self) -> VolumeRate {
        self.hot_flow_rate
    }
}

/// A draw rejected while building a [`DrawSeries`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("draw {index} rejected")]
pub struct SeriesError {
    /// Position of the rejected draw in the input.
    pub index: usize,

    /// Why the draw was rejected.
    #[source]
    pub source: DrawError,
}

/// An ordered sequence of draws, typically one draw profile.
///
/// Each draw is evaluated independently; order is kept so results line up
/// with the input rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawSeries {
    draws: Vec<Draw>,
}

impl DrawSeries {
    /// Creates a series from already validated draws.
    #[must_use]
    pub fn new(draws: Vec<Draw>) -> Self {
        Self { draws }
    }

    /// Builds a series from US customary rows of
    /// `[flow_rate, duration, mains_temperature, hot_flow_rate]`.
    ///
    /// # Errors
    ///
    /// Returns a [`SeriesError`] for the first row that fails validation.
    pub fn from_customary_rows(
        rows: impl IntoIterator<Item = [f64; 4]>,
    ) -> Result<Self, SeriesError> {
        let draws = rows
            .into_iter()
            .enumerate()
            .map(|(index, [flow, duration, mains, hot])| {
                Draw::from_customary(flow, duration, mains, hot)
                    .map_err(|source| SeriesError { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { draws })
    }

    /// Returns the draws in input order.
    #[must_use]
    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    /// Returns the number of draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    /// Returns true if the series has no draws.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}

impl FromIterator<Draw> for DrawSeries {
    fn from_iter<I: IntoIterator<Item = Draw>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
