//! Recipe registry: names, band bindings and channel descriptions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bands::{AhiBand, BandSet};
use crate::catalog::Compositor;
use crate::error::{CompositeError, Result};
use crate::rgb::RgbImage;

/// A named AHI composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recipe {
    NaturalColor,
    NightMicrophysics,
    DayConvectiveStorm,
    Airmass,
    Ash,
    TrueColor,
    Dust,
}

/// Display channel of an RGB composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// How one display channel is derived from the bands.
///
/// The channel is `minuend` (or `minuend - subtrahend`) rescaled from
/// `[in_min, in_max]` onto `[0, 255]`, with an optional gamma applied in
/// normalized space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelSpec {
    pub channel: Channel,
    pub minuend: AhiBand,
    pub subtrahend: Option<AhiBand>,
    pub in_min: f32,
    pub in_max: f32,
    pub gamma: Option<f32>,
}

impl ChannelSpec {
    const fn new(channel: Channel, minuend: AhiBand, in_min: f32, in_max: f32) -> Self {
        Self {
            channel,
            minuend,
            subtrahend: None,
            in_min,
            in_max,
            gamma: None,
        }
    }

    const fn minus(mut self, subtrahend: AhiBand) -> Self {
        self.subtrahend = Some(subtrahend);
        self
    }

    const fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Whether the input range runs from high to low.
    pub fn is_inverted(&self) -> bool {
        self.in_min > self.in_max
    }

    /// Band expression such as `B15 - B13`.
    pub fn expression(&self) -> String {
        match self.subtrahend {
            Some(sub) => format!("B{:02} - B{:02}", self.minuend.number(), sub.number()),
            None => format!("B{:02}", self.minuend.number()),
        }
    }
}

impl fmt::Display for ChannelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.minuend.quantity().unit();
        write!(
            f,
            "{:?}: {} from {}{} to {}{}",
            self.channel,
            self.expression(),
            self.in_min,
            unit,
            self.in_max,
            unit
        )?;
        if let Some(gamma) = self.gamma {
            write!(f, ", gamma {}", gamma)?;
        }
        Ok(())
    }
}

/// Serializable summary of a recipe for listings.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeInfo {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub bands: Vec<AhiBand>,
    pub channels: [ChannelSpec; 3],
}

use AhiBand::*;
use Channel::{Blue, Green, Red};

impl Recipe {
    /// All recipes in catalog order.
    pub const ALL: [Recipe; 7] = [
        Self::NaturalColor,
        Self::NightMicrophysics,
        Self::DayConvectiveStorm,
        Self::Airmass,
        Self::Ash,
        Self::TrueColor,
        Self::Dust,
    ];

    /// Canonical composite name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NaturalColor => "AHINaturalColorRGB",
            Self::NightMicrophysics => "AHINightMicrophysicsRGB",
            Self::DayConvectiveStorm => "AHIDayConvectiveStormRGB",
            Self::Airmass => "AHIAirmassRGB",
            Self::Ash => "AHIAshRGB",
            Self::TrueColor => "AHITrueColorRGB",
            Self::Dust => "AHIDustRGB",
        }
    }

    /// Short kebab-case key.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::NaturalColor => "natural-color",
            Self::NightMicrophysics => "night-microphysics",
            Self::DayConvectiveStorm => "day-convective-storm",
            Self::Airmass => "airmass",
            Self::Ash => "ash",
            Self::TrueColor => "true-color",
            Self::Dust => "dust",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NaturalColor => "Land surface, vegetation, snow and ice, water and ice clouds",
            Self::NightMicrophysics => "Night-time fog, low cloud and cloud phase",
            Self::DayConvectiveStorm => "Intense updrafts and small ice particles in convection",
            Self::Airmass => "Air masses, jet streams and upper-level dynamics",
            Self::Ash => "Volcanic ash and sulfur dioxide plumes",
            Self::TrueColor => "Scene as seen by the human eye",
            Self::Dust => "Airborne dust over land and sea, day and night",
        }
    }

    /// Required bands in the catalog function's parameter order.
    pub fn bands(&self) -> &'static [AhiBand] {
        match self {
            Self::NaturalColor => &[B03, B04, B05],
            Self::NightMicrophysics => &[B07, B13, B15],
            Self::DayConvectiveStorm => &[B03, B05, B07, B08, B10, B13],
            Self::Airmass => &[B08, B10, B12, B13],
            Self::Ash => &[B11, B13, B15],
            Self::TrueColor => &[B01, B02, B03],
            Self::Dust => &[B11, B13, B15],
        }
    }

    /// Red, green and blue channel formulas.
    pub fn channels(&self) -> [ChannelSpec; 3] {
        match self {
            Self::NaturalColor => [
                ChannelSpec::new(Red, B05, 0.0, 100.0),
                ChannelSpec::new(Green, B04, 0.0, 100.0),
                ChannelSpec::new(Blue, B03, 0.0, 100.0),
            ],
            Self::NightMicrophysics => [
                ChannelSpec::new(Red, B15, -4.0, 2.0).minus(B13),
                ChannelSpec::new(Green, B13, 0.0, 10.0).minus(B07),
                ChannelSpec::new(Blue, B13, 243.0, 293.0),
            ],
            Self::DayConvectiveStorm => [
                ChannelSpec::new(Red, B08, -35.0, 5.0).minus(B10),
                ChannelSpec::new(Green, B07, -5.0, 60.0).minus(B13).gamma(2.0),
                ChannelSpec::new(Blue, B05, -75.0, 25.0).minus(B03),
            ],
            Self::Airmass => [
                ChannelSpec::new(Red, B08, -25.0, 0.0).minus(B10),
                ChannelSpec::new(Green, B12, -40.0, 5.0).minus(B13),
                ChannelSpec::new(Blue, B08, 243.0, 208.0),
            ],
            Self::Ash => [
                ChannelSpec::new(Red, B15, -4.0, 2.0).minus(B13),
                ChannelSpec::new(Green, B13, -4.0, 5.0).minus(B11),
                ChannelSpec::new(Blue, B13, 243.0, 208.0),
            ],
            Self::TrueColor => [
                ChannelSpec::new(Red, B03, 0.0, 100.0),
                ChannelSpec::new(Green, B02, 0.0, 100.0),
                ChannelSpec::new(Blue, B01, 0.0, 100.0),
            ],
            Self::Dust => [
                ChannelSpec::new(Red, B15, -4.0, 2.0).minus(B13),
                ChannelSpec::new(Green, B13, 0.0, 15.0).minus(B11).gamma(0.4),
                ChannelSpec::new(Blue, B13, 261.0, 289.0),
            ],
        }
    }

    pub fn info(&self) -> RecipeInfo {
        RecipeInfo {
            name: self.name(),
            slug: self.slug(),
            description: self.description(),
            bands: self.bands().to_vec(),
            channels: self.channels(),
        }
    }

    /// Run the recipe with default settings.
    pub fn apply(&self, bands: &BandSet) -> Result<RgbImage> {
        Compositor::default().compose(*self, bands)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Recipe {
    type Err = CompositeError;

    /// Accepts the canonical name or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(key) || r.slug().eq_ignore_ascii_case(key))
            .ok_or_else(|| CompositeError::UnknownRecipe(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_slug() {
        for recipe in Recipe::ALL {
            assert_eq!(recipe.name().parse::<Recipe>().unwrap(), recipe);
            assert_eq!(recipe.slug().parse::<Recipe>().unwrap(), recipe);
        }
        assert_eq!("ahiairmassrgb".parse::<Recipe>().unwrap(), Recipe::Airmass);
        assert_eq!(" True-Color ".parse::<Recipe>().unwrap(), Recipe::TrueColor);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "sandwich".parse::<Recipe>(),
            Err(CompositeError::UnknownRecipe("sandwich".to_string()))
        );
    }

    #[test]
    fn test_channels_only_use_required_bands() {
        for recipe in Recipe::ALL {
            let bands = recipe.bands();
            for spec in recipe.channels() {
                assert!(bands.contains(&spec.minuend), "{recipe}: {spec}");
                if let Some(sub) = spec.subtrahend {
                    assert!(bands.contains(&sub), "{recipe}: {spec}");
                }
            }
        }
    }

    #[test]
    fn test_channel_order() {
        for recipe in Recipe::ALL {
            let [r, g, b] = recipe.channels();
            assert_eq!((r.channel, g.channel, b.channel), (Red, Green, Blue));
        }
    }

    #[test]
    fn test_inverted_channels() {
        let inverted: Vec<_> = Recipe::ALL
            .into_iter()
            .flat_map(|r| r.channels().into_iter().map(move |c| (r, c)))
            .filter(|(_, c)| c.is_inverted())
            .map(|(r, c)| (r, c.channel))
            .collect();
        assert_eq!(
            inverted,
            vec![(Recipe::Airmass, Blue), (Recipe::Ash, Blue)]
        );
    }

    #[test]
    fn test_channel_display() {
        let [_, green, _] = Recipe::Dust.channels();
        assert_eq!(green.expression(), "B13 - B11");
        assert_eq!(green.to_string(), "Green: B13 - B11 from 0K to 15K, gamma 0.4");
    }

    #[test]
    fn test_serde_slug() {
        assert_eq!(
            serde_json::to_string(&Recipe::DayConvectiveStorm).unwrap(),
            "\"day-convective-storm\""
        );
        let info = serde_json::to_value(Recipe::Airmass.info()).unwrap();
        assert_eq!(info["name"], "AHIAirmassRGB");
        assert_eq!(info["bands"], serde_json::json!([8, 10, 12, 13]));
        assert_eq!(info["channels"][2]["in_min"], 243.0);
    }
}
