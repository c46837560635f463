//! Band arrays and grid primitives for satellite RGB composites.
//!
//! Provides the building blocks every composite recipe is written in:
//!
//! - [`BandArray`]: a 2D grid of reflectance (%) or brightness temperature (K)
//! - [`resample_grid`]: put one band onto another band's grid
//! - [`rescale`] / [`rescale_linear`]: affine remap into a display range
//! - Element-wise band math ([`BandArray::difference`], [`BandArray::powf`])
//!
//! # Example
//!
//! ```
//! use band_grid::{rescale, BandArray};
//!
//! let b15 = BandArray::filled(290.0, 2, 2);
//! let b13 = BandArray::filled(291.0, 2, 2);
//!
//! let split_window = b15.difference(&b13).unwrap();
//! let red = rescale(&split_window, -4.0, 2.0, 0.0, 255.0).unwrap();
//! assert_eq!(red.get(0, 0), Some(127.5));
//! ```

pub mod error;
pub mod interpolation;
pub mod rescale;
pub mod types;

pub use error::{BandGridError, Result};
pub use interpolation::resample_grid;
pub use rescale::{clamp_between, rescale, rescale_linear, rescale_value};
pub use types::{BandArray, InterpolationMethod};
