//! False-color RGB composites from Advanced Himawari Imager (AHI) bands.
//!
//! Each recipe maps a fixed set of bands to red, green and blue by
//! rescaling band values or band differences into [0, 255], optionally
//! with a gamma curve, and stacks the channels into an [`RgbImage`].
//!
//! | Recipe | Bands |
//! |---|---|
//! | Natural Color | 3, 4, 5 |
//! | Night Microphysics | 7, 13, 15 |
//! | Day Convective Storm | 3, 5, 7, 8, 10, 13 |
//! | Airmass | 8, 10, 12, 13 |
//! | Ash | 11, 13, 15 |
//! | True Color | 1, 2, 3 |
//! | Dust | 11, 13, 15 |
//!
//! # Example
//!
//! ```
//! use band_grid::BandArray;
//! use rgb_composite::{catalog, AhiBand, BandSet, Recipe};
//!
//! let b7 = BandArray::filled(281.0, 1, 1);
//! let b13 = BandArray::filled(291.0, 1, 1);
//! let b15 = BandArray::filled(290.0, 1, 1);
//!
//! // Call a recipe directly...
//! let image = catalog::night_microphysics(&b7, &b13, &b15).unwrap();
//! assert_eq!(image.pixel(0, 0).unwrap()[0], 127.5);
//!
//! // ...or look it up by name and bind bands by channel.
//! let bands = BandSet::new()
//!     .with(AhiBand::B07, b7)
//!     .with(AhiBand::B13, b13)
//!     .with(AhiBand::B15, b15);
//! let recipe: Recipe = "night-microphysics".parse().unwrap();
//! assert_eq!(recipe.apply(&bands).unwrap(), image);
//! ```

pub mod bands;
pub mod catalog;
pub mod config;
pub mod error;
pub mod recipe;
pub mod rgb;

pub use bands::{AhiBand, BandQuantity, BandSet};
pub use catalog::Compositor;
pub use config::CompositeConfig;
pub use error::{CompositeError, Result};
pub use recipe::{Channel, ChannelSpec, Recipe, RecipeInfo};
pub use rgb::{combine_rgb, RgbImage};
