use super::{
    Draw, DrawSeries, PerformanceCoefficients, ProcessorConfig, QuarticMap, SurfaceMap,
    resolved::ResolvedDraw,
};

/// Defaults with both maps fixed at a correction factor of one.
pub(super) fn constant_config() -> ProcessorConfig {
    ProcessorConfig::new(PerformanceCoefficients {
        equal_flow: QuarticMap::new([0.0, 0.0, 0.0, 0.0, 1.0]),
        unequal_flow: SurfaceMap::new(vec![1.0]).expect("one coefficient is a square"),
    })
}

/// Defaults with a first-order surface that falls off gently with flow.
pub(super) fn sample_config() -> ProcessorConfig {
    ProcessorConfig::new(PerformanceCoefficients {
        equal_flow: QuarticMap::new([0.0, 0.0, 0.0, -0.02, 1.05]),
        unequal_flow: SurfaceMap::new(vec![1.15, -0.03, -0.02, 0.002])
            .expect("four coefficients are a square"),
    })
}

/// A draw from `[flow gal/min, duration min, mains °F, hot gal/min]`.
pub(super) fn resolved(flow: f64, duration: f64, mains: f64, hot: f64) -> ResolvedDraw {
    let draw = Draw::from_customary(flow, duration, mains, hot).expect("test draw is valid");
    ResolvedDraw::new(&draw)
}

/// A series from rows of `[flow gal/min, duration min, mains °F, hot gal/min]`.
pub(super) fn series(rows: &[[f64; 4]]) -> DrawSeries {
    DrawSeries::from_customary_rows(rows.iter().copied()).expect("test draws are valid")
}
