use thiserror::Error;

use crate::models::thermal::dwhr::core::{Configuration, DomainError, FixtureSolveError};

/// Errors that fail a draw series.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProcessError {
    /// A draw left the numeric domain in a non-iterative configuration.
    #[error("draw {draw} failed in the {configuration:?} configuration")]
    Domain {
        /// Configuration being evaluated.
        configuration: Configuration,

        /// Index of the draw in the series.
        draw: usize,

        /// Numeric failure in that draw.
        #[source]
        source: DomainError,
    },

    /// The fixture solver failed.
    #[error("fixture solver failed")]
    Fixture(#[from] FixtureSolveError),
}

impl ProcessError {
    /// Returns the index of the draw that failed.
    #[must_use]
    pub fn draw(&self) -> usize {
        match self {
            Self::Domain { draw, .. } | Self::Fixture(FixtureSolveError::Domain { draw, .. }) => {
                *draw
            }
        }
    }
}
