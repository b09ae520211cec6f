use crate::models::thermal::dwhr::core::DrawResult;

/// Indicates how the fixture solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every draw's cold-side flow change fell below tolerance.
    Converged,

    /// The iteration limit was reached first.
    ///
    /// Results hold the last estimates.
    MaxIters,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Per-draw solver state at termination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureDiagnostics {
    /// Drain-side over cold-side flow in the last iteration.
    ///
    /// `None` for idle draws, which are not iterated.
    pub flow_ratio: Option<f64>,

    /// Change in cold-side flow in the last iteration, gal/min.
    pub flow_delta: f64,

    /// Iteration at which this draw's change first fell below tolerance
    /// (and stayed there).
    pub converged_at: Option<usize>,
}

/// How the fixture solver finished for a series.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSummary {
    /// How the solver terminated.
    pub status: Status,

    /// Iterations performed.
    pub iters: usize,

    /// Largest change in cold-side flow in the last iteration, gal/min.
    pub max_flow_delta: f64,

    /// Per-draw diagnostics, indexed like the series.
    pub diagnostics: Vec<FixtureDiagnostics>,
}

impl FixtureSummary {
    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Results of the fixture solver for a series.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::models::thermal::dwhr::core) struct FixtureSolution {
    pub(in crate::models::thermal::dwhr::core) results: Vec<DrawResult>,
    pub(in crate::models::thermal::dwhr::core) summary: FixtureSummary,
}
