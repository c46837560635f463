//! Core types for band math.

use serde::{Deserialize, Serialize};

use crate::error::{BandGridError, Result};

/// A 2D grid of physical values for one satellite band.
///
/// Values are reflectance in percent or brightness temperature in Kelvin,
/// stored row-major from the top-left corner. NaN marks missing data and
/// propagates through every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BandArray {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl BandArray {
    /// Create a band array, checking that the data fills the grid exactly.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> Result<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(BandGridError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Create a band array where every point holds `value`.
    pub fn filled(value: f32, width: usize, height: usize) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Width in grid points.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in grid points.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions as (width, height).
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The values in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the value at a specific grid coordinate.
    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Check whether `other` lies on a grid of the same dimensions.
    pub fn same_shape(&self, other: &BandArray) -> bool {
        self.shape() == other.shape()
    }

    /// Fail with `ShapeMismatch` unless `other` has this array's shape.
    pub fn ensure_same_shape(&self, other: &BandArray) -> Result<()> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(BandGridError::shape_mismatch(self.shape(), other.shape()))
        }
    }

    /// Apply `f` to every value.
    pub fn map<F>(&self, f: F) -> BandArray
    where
        F: Fn(f32) -> f32,
    {
        BandArray {
            data: self.data.iter().map(|&v| f(v)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Combine two co-registered arrays point by point.
    pub fn zip_with<F>(&self, other: &BandArray, f: F) -> Result<BandArray>
    where
        F: Fn(f32, f32) -> f32,
    {
        self.ensure_same_shape(other)?;
        Ok(BandArray {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            width: self.width,
            height: self.height,
        })
    }

    /// Point-wise `self - other`, e.g. a brightness temperature difference.
    pub fn difference(&self, other: &BandArray) -> Result<BandArray> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Raise every value to `exponent`.
    pub fn powf(&self, exponent: f32) -> BandArray {
        self.map(|v| v.powf(exponent))
    }

    /// Multiply every value by `factor`.
    pub fn scale(&self, factor: f32) -> BandArray {
        self.map(|v| v * factor)
    }
}

/// Interpolation method for grid resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    /// Nearest neighbor (preserves exact values).
    Nearest,
    /// Bilinear interpolation (smooth, slight value changes).
    #[default]
    Bilinear,
    /// Bicubic interpolation (smoothest, more compute).
    Cubic,
}

impl InterpolationMethod {
    /// Parse from string (case-insensitive), falling back to bilinear.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "nearest" => Self::Nearest,
            "cubic" | "bicubic" => Self::Cubic,
            _ => Self::Bilinear,
        }
    }

    /// Get the method name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Cubic => "cubic",
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
