//! Error types for the astronomical series.

use thiserror::Error;

/// Errors from solar-term and solstice queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AstroError {
    /// Solar term index outside 0..24.
    #[error("solar term index {0} out of range 0..24")]
    InvalidTermIndex(u8),
}
