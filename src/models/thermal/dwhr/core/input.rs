mod bounds;
mod draw;
mod parameters;
mod water;

pub use bounds::EffectivenessBounds;
pub use draw::{Draw, DrawError, DrawSeries, SeriesError};
pub use parameters::{DeviceParameters, ParametersError};
pub use water::WaterProperties;
