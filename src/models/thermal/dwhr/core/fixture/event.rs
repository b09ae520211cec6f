/// Event emitted after each fixture solver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Largest change in cold-side flow over all draws, gal/min.
    pub max_flow_delta: f64,

    /// Number of draws whose change is still at or above tolerance.
    pub unconverged: usize,
}

/// Control actions supported by the fixture solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the current estimates.
    StopEarly,
}
