//! Error types for band math.

use thiserror::Error;

/// Errors raised by band arrays and the grid primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BandGridError {
    /// Two arrays that must be co-registered have different shapes.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A grid with zero width or height was passed where data is required.
    #[error("grid is empty")]
    EmptyGrid,

    /// The data buffer does not match the declared dimensions.
    #[error("data length {actual} does not match {expected} grid points")]
    DataLength { expected: usize, actual: usize },

    /// Input range of a rescale collapses to a single value.
    #[error("invalid rescale range: {min} to {max}")]
    InvalidRange { min: f32, max: f32 },
}

impl BandGridError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch { expected, actual }
    }
}

/// Result type for band grid operations.
pub type Result<T> = std::result::Result<T, BandGridError>;
