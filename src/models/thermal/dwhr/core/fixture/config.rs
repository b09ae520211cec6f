use uom::si::{f64::VolumeRate, volume_rate::gallon_per_minute};

/// Solver configuration for the unequal-fixture iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureSolverConfig {
    /// Maximum iteration count before the solver reports non-convergence.
    pub max_iters: usize,

    /// Convergence tolerance on the change in cold-side flow between iterations.
    ///
    /// The series converges once every draw's change is below this value.
    pub flow_tol: VolumeRate,

    /// Smallest cold-side flow estimate from which a flow ratio is formed.
    ///
    /// Estimates at or below this value are reported as a domain error.
    pub min_cold_flow: VolumeRate,
}

impl Default for FixtureSolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            flow_tol: VolumeRate::new::<gallon_per_minute>(0.01),
            min_cold_flow: VolumeRate::new::<gallon_per_minute>(1e-9),
        }
    }
}
