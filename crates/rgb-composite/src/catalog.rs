//! The AHI composite recipe catalog.
//!
//! Channel formulas follow the JMA RGB Training Library. Each recipe
//! rescales raw bands or band differences into [0, 255] per channel and
//! stacks the channels with [`combine_rgb`]. Recipes that use band 3
//! resample every other input onto its 0.5 km grid before any band
//! difference, so they accept bands at native AHI resolution.
//! Inputs already on that grid pass through unchanged.
//!
//! The free functions run with [`CompositeConfig::default`]; use a
//! [`Compositor`] to choose the interpolation method or clamping policy.

use band_grid::{rescale, rescale_linear, resample_grid, BandArray};
use tracing::debug;

use crate::bands::BandSet;
use crate::config::CompositeConfig;
use crate::error::Result;
use crate::recipe::Recipe;
use crate::rgb::{combine_rgb, RgbImage};

const DISPLAY_MAX: f32 = 255.0;

/// Runs catalog recipes with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor {
    config: CompositeConfig,
}

impl Compositor {
    pub fn new(config: CompositeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompositeConfig {
        &self.config
    }

    fn resample(&self, source: &BandArray, reference: &BandArray) -> Result<BandArray> {
        Ok(resample_grid(source, reference, self.config.interpolation)?)
    }

    /// `[in_min, in_max]` onto `[0, 255]`.
    fn stretch(&self, band: &BandArray, in_min: f32, in_max: f32) -> Result<BandArray> {
        self.rescale_to(band, in_min, in_max, DISPLAY_MAX)
    }

    /// `255 * rescale(band, in_min, in_max, 0, 1) ^ gamma`.
    ///
    /// Gamma is applied in normalized space, before scaling to 255.
    fn gamma_stretch(
        &self,
        band: &BandArray,
        in_min: f32,
        in_max: f32,
        gamma: f32,
    ) -> Result<BandArray> {
        Ok(self
            .rescale_to(band, in_min, in_max, 1.0)?
            .powf(gamma)
            .scale(DISPLAY_MAX))
    }

    fn rescale_to(
        &self,
        band: &BandArray,
        in_min: f32,
        in_max: f32,
        out_max: f32,
    ) -> Result<BandArray> {
        let out = if self.config.clamp {
            rescale(band, in_min, in_max, 0.0, out_max)?
        } else {
            rescale_linear(band, in_min, in_max, 0.0, out_max)?
        };
        Ok(out)
    }

    /// Natural Color RGB.
    ///
    /// - red: band 5, 0% to 100%
    /// - green: band 4, 0% to 100%
    /// - blue: band 3, 0% to 100%
    ///
    /// Bands 4 and 5 are resampled to the band 3 grid.
    pub fn natural_color(
        &self,
        b3: &BandArray,
        b4: &BandArray,
        b5: &BandArray,
    ) -> Result<RgbImage> {
        let hr_b4 = self.resample(b4, b3)?;
        let hr_b5 = self.resample(b5, b3)?;
        let red = self.stretch(&hr_b5, 0.0, 100.0)?;
        let green = self.stretch(&hr_b4, 0.0, 100.0)?;
        let blue = self.stretch(b3, 0.0, 100.0)?;
        combine_rgb(red, green, blue)
    }

    /// Night Microphysics RGB.
    ///
    /// - red: band 15 - band 13, -4 K to 2 K
    /// - green: band 13 - band 7, 0 K to 10 K
    /// - blue: band 13, 243 K to 293 K
    pub fn night_microphysics(
        &self,
        b7: &BandArray,
        b13: &BandArray,
        b15: &BandArray,
    ) -> Result<RgbImage> {
        let red = self.stretch(&b15.difference(b13)?, -4.0, 2.0)?;
        let green = self.stretch(&b13.difference(b7)?, 0.0, 10.0)?;
        let blue = self.stretch(b13, 243.0, 293.0)?;
        combine_rgb(red, green, blue)
    }

    /// Day Convective Storm RGB.
    ///
    /// - red: band 8 - band 10, -35 K to 5 K
    /// - green: band 7 - band 13, -5 K to 60 K, gamma 2
    /// - blue: band 5 - band 3, -75% to 25%
    ///
    /// Every band is resampled to the band 3 grid before differencing.
    pub fn day_convective_storm(
        &self,
        b3: &BandArray,
        b5: &BandArray,
        b7: &BandArray,
        b8: &BandArray,
        b10: &BandArray,
        b13: &BandArray,
    ) -> Result<RgbImage> {
        let hr_b5 = self.resample(b5, b3)?;
        let hr_b7 = self.resample(b7, b3)?;
        let hr_b8 = self.resample(b8, b3)?;
        let hr_b10 = self.resample(b10, b3)?;
        let hr_b13 = self.resample(b13, b3)?;
        let red = self.stretch(&hr_b8.difference(&hr_b10)?, -35.0, 5.0)?;
        let green = self.gamma_stretch(&hr_b7.difference(&hr_b13)?, -5.0, 60.0, 2.0)?;
        let blue = self.stretch(&hr_b5.difference(b3)?, -75.0, 25.0)?;
        combine_rgb(red, green, blue)
    }

    /// Airmass RGB.
    ///
    /// - red: band 8 - band 10, -25 K to 0 K
    /// - green: band 12 - band 13, -40 K to 5 K
    /// - blue: band 8, 243 K to 208 K (inverted)
    pub fn airmass(
        &self,
        b8: &BandArray,
        b10: &BandArray,
        b12: &BandArray,
        b13: &BandArray,
    ) -> Result<RgbImage> {
        let red = self.stretch(&b8.difference(b10)?, -25.0, 0.0)?;
        let green = self.stretch(&b12.difference(b13)?, -40.0, 5.0)?;
        let blue = self.stretch(b8, 243.0, 208.0)?;
        combine_rgb(red, green, blue)
    }

    /// Ash RGB.
    ///
    /// - red: band 15 - band 13, -4 K to 2 K
    /// - green: band 13 - band 11, -4 K to 5 K
    /// - blue: band 13, 243 K to 208 K (inverted)
    pub fn ash(&self, b11: &BandArray, b13: &BandArray, b15: &BandArray) -> Result<RgbImage> {
        let red = self.stretch(&b15.difference(b13)?, -4.0, 2.0)?;
        let green = self.stretch(&b13.difference(b11)?, -4.0, 5.0)?;
        let blue = self.stretch(b13, 243.0, 208.0)?;
        combine_rgb(red, green, blue)
    }

    /// True Color RGB.
    ///
    /// - red: band 3, 0% to 100%
    /// - green: band 2, 0% to 100%
    /// - blue: band 1, 0% to 100%
    ///
    /// Bands 1 and 2 are resampled to the band 3 grid.
    pub fn true_color(
        &self,
        b1: &BandArray,
        b2: &BandArray,
        b3: &BandArray,
    ) -> Result<RgbImage> {
        let hr_b1 = self.resample(b1, b3)?;
        let hr_b2 = self.resample(b2, b3)?;
        let red = self.stretch(b3, 0.0, 100.0)?;
        let green = self.stretch(&hr_b2, 0.0, 100.0)?;
        let blue = self.stretch(&hr_b1, 0.0, 100.0)?;
        combine_rgb(red, green, blue)
    }

    /// Dust RGB.
    ///
    /// - red: band 15 - band 13, -4 K to 2 K
    /// - green: band 13 - band 11, 0 K to 15 K, gamma 0.4
    /// - blue: band 13, 261 K to 289 K
    pub fn dust(&self, b11: &BandArray, b13: &BandArray, b15: &BandArray) -> Result<RgbImage> {
        let red = self.stretch(&b15.difference(b13)?, -4.0, 2.0)?;
        let green = self.gamma_stretch(&b13.difference(b11)?, 0.0, 15.0, 0.4)?;
        let blue = self.stretch(b13, 261.0, 289.0)?;
        combine_rgb(red, green, blue)
    }

    /// Run `recipe` on bands looked up by channel.
    ///
    /// All required bands are first resampled onto the finest grid among
    /// them, so mixed-resolution inputs always line up.
    pub fn compose(&self, recipe: Recipe, bands: &BandSet) -> Result<RgbImage> {
        let name = recipe.name();
        let required = recipe.bands();
        for &band in required {
            bands.require(name, band)?;
        }

        let aligned = bands.aligned(required, self.config.interpolation)?;
        let band = |b| aligned.require(name, b);

        use crate::bands::AhiBand::*;
        let image = match recipe {
            Recipe::NaturalColor => self.natural_color(band(B03)?, band(B04)?, band(B05)?),
            Recipe::NightMicrophysics => {
                self.night_microphysics(band(B07)?, band(B13)?, band(B15)?)
            }
            Recipe::DayConvectiveStorm => self.day_convective_storm(
                band(B03)?,
                band(B05)?,
                band(B07)?,
                band(B08)?,
                band(B10)?,
                band(B13)?,
            ),
            Recipe::Airmass => self.airmass(band(B08)?, band(B10)?, band(B12)?, band(B13)?),
            Recipe::Ash => self.ash(band(B11)?, band(B13)?, band(B15)?),
            Recipe::TrueColor => self.true_color(band(B01)?, band(B02)?, band(B03)?),
            Recipe::Dust => self.dust(band(B11)?, band(B13)?, band(B15)?),
        }?;

        debug!(
            recipe = name,
            width = image.width(),
            height = image.height(),
            "Composed RGB image"
        );

        Ok(image)
    }
}

/// Natural Color RGB with default settings. See [`Compositor::natural_color`].
pub fn natural_color(b3: &BandArray, b4: &BandArray, b5: &BandArray) -> Result<RgbImage> {
    Compositor::default().natural_color(b3, b4, b5)
}

/// Night Microphysics RGB with default settings.
pub fn night_microphysics(b7: &BandArray, b13: &BandArray, b15: &BandArray) -> Result<RgbImage> {
    Compositor::default().night_microphysics(b7, b13, b15)
}

/// Day Convective Storm RGB with default settings.
pub fn day_convective_storm(
    b3: &BandArray,
    b5: &BandArray,
    b7: &BandArray,
    b8: &BandArray,
    b10: &BandArray,
    b13: &BandArray,
) -> Result<RgbImage> {
    Compositor::default().day_convective_storm(b3, b5, b7, b8, b10, b13)
}

/// Airmass RGB with default settings.
pub fn airmass(b8: &BandArray, b10: &BandArray, b12: &BandArray, b13: &BandArray) -> Result<RgbImage> {
    Compositor::default().airmass(b8, b10, b12, b13)
}

/// Ash RGB with default settings.
pub fn ash(b11: &BandArray, b13: &BandArray, b15: &BandArray) -> Result<RgbImage> {
    Compositor::default().ash(b11, b13, b15)
}

/// True Color RGB with default settings.
pub fn true_color(b1: &BandArray, b2: &BandArray, b3: &BandArray) -> Result<RgbImage> {
    Compositor::default().true_color(b1, b2, b3)
}

/// Dust RGB with default settings.
pub fn dust(b11: &BandArray, b13: &BandArray, b15: &BandArray) -> Result<RgbImage> {
    Compositor::default().dust(b11, b13, b15)
}
