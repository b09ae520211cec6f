use super::{
    DeviceParameters, EffectivenessBounds, EqualFlowCorrelation, FixtureSolverConfig,
    PerformanceCoefficients, WaterProperties,
};

/// Everything held constant while processing draw series.
///
/// Only the coefficients have no sensible default; every other field starts
/// from the standard assumptions and can be overridden with struct update
/// syntax:
///
/// ```
/// # use dwhr_models::models::thermal::dwhr::{
/// #     EqualFlowCorrelation, PerformanceCoefficients, ProcessorConfig, QuarticMap, SurfaceMap,
/// # };
/// let coefficients = PerformanceCoefficients {
///     equal_flow: QuarticMap::new([0.0, 0.0, 0.0, 0.0, 1.0]),
///     unequal_flow: SurfaceMap::new(vec![1.0]).unwrap(),
/// };
/// let config = ProcessorConfig {
///     correlation: EqualFlowCorrelation::Quartic,
///     ..ProcessorConfig::new(coefficients)
/// };
/// assert_eq!(config.solver.max_iters, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorConfig {
    /// Performance maps for the device family.
    pub coefficients: PerformanceCoefficients,

    /// Rated effectiveness and plumbing temperatures.
    pub parameters: DeviceParameters,

    /// Flow range the maps are evaluated over.
    pub bounds: EffectivenessBounds,

    /// Water density and specific heat.
    pub water: WaterProperties,

    /// Map used for equal-flow effectiveness.
    pub correlation: EqualFlowCorrelation,

    /// Fixture solver settings.
    pub solver: FixtureSolverConfig,
}

impl ProcessorConfig {
    /// Creates a configuration with default parameters for the given maps.
    #[must_use]
    pub fn new(coefficients: PerformanceCoefficients) -> Self {
        Self {
            coefficients,
            parameters: DeviceParameters::default(),
            bounds: EffectivenessBounds::default(),
            water: WaterProperties::default(),
            correlation: EqualFlowCorrelation::default(),
            solver: FixtureSolverConfig::default(),
        }
    }
}
