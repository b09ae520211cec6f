use thiserror::Error;

use crate::models::thermal::dwhr::core::DomainError;

/// Errors that stop the unequal-fixture iteration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FixtureSolveError {
    /// A draw's iteration left the valid numeric domain.
    #[error("draw {draw} left the numeric domain")]
    Domain {
        /// Index of the draw in the series.
        draw: usize,

        /// Numeric failure in that draw.
        #[source]
        source: DomainError,
    },
}
