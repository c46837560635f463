//! Error types for composite generation.

use band_grid::BandGridError;
use thiserror::Error;

use crate::bands::AhiBand;

/// Errors that can occur while building a composite.
///
/// Recipes add no failure modes of their own; grid errors from the
/// primitives pass through as [`CompositeError::Grid`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositeError {
    /// Error from a grid primitive (resample, rescale, band math, combine).
    #[error(transparent)]
    Grid(#[from] BandGridError),

    /// No recipe is registered under this name.
    #[error("unknown composite recipe: {0}")]
    UnknownRecipe(String),

    /// A band required by the recipe was not supplied.
    #[error("{recipe} requires {band} but it was not supplied")]
    MissingBand { recipe: &'static str, band: AhiBand },

    /// Band number outside the AHI channel range.
    #[error("invalid AHI band number: {0} (expected 1-16)")]
    InvalidBand(u8),
}

/// Result type for composite operations.
pub type Result<T> = std::result::Result<T, CompositeError>;
