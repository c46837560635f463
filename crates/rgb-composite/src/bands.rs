//! AHI band table and band sets.

use std::collections::HashMap;
use std::fmt;

use band_grid::{resample_grid, BandArray, InterpolationMethod};
use serde::{Deserialize, Serialize};

use crate::error::{CompositeError, Result};

/// Physical quantity carried by a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandQuantity {
    /// Reflectance in percent.
    Reflectance,
    /// Brightness temperature in Kelvin.
    BrightnessTemperature,
}

impl BandQuantity {
    /// Unit symbol for display.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Reflectance => "%",
            Self::BrightnessTemperature => "K",
        }
    }
}

/// The sixteen Advanced Himawari Imager channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AhiBand {
    B01,
    B02,
    B03,
    B04,
    B05,
    B06,
    B07,
    B08,
    B09,
    B10,
    B11,
    B12,
    B13,
    B14,
    B15,
    B16,
}

impl AhiBand {
    /// All bands in channel order.
    pub const ALL: [AhiBand; 16] = [
        Self::B01,
        Self::B02,
        Self::B03,
        Self::B04,
        Self::B05,
        Self::B06,
        Self::B07,
        Self::B08,
        Self::B09,
        Self::B10,
        Self::B11,
        Self::B12,
        Self::B13,
        Self::B14,
        Self::B15,
        Self::B16,
    ];

    /// Look up a band by its channel number (1-16).
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1..=16 => Ok(Self::ALL[number as usize - 1]),
            _ => Err(CompositeError::InvalidBand(number)),
        }
    }

    /// Channel number (1-16).
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Central wavelength in micrometres.
    pub fn wavelength_um(&self) -> f32 {
        match self {
            Self::B01 => 0.47,
            Self::B02 => 0.51,
            Self::B03 => 0.64,
            Self::B04 => 0.86,
            Self::B05 => 1.6,
            Self::B06 => 2.3,
            Self::B07 => 3.9,
            Self::B08 => 6.2,
            Self::B09 => 6.9,
            Self::B10 => 7.3,
            Self::B11 => 8.6,
            Self::B12 => 9.6,
            Self::B13 => 10.4,
            Self::B14 => 11.2,
            Self::B15 => 12.4,
            Self::B16 => 13.3,
        }
    }

    /// Nominal sub-satellite resolution in kilometres.
    pub fn resolution_km(&self) -> f32 {
        match self {
            Self::B03 => 0.5,
            Self::B01 | Self::B02 | Self::B04 => 1.0,
            _ => 2.0,
        }
    }

    /// Visible and near-infrared bands carry reflectance; the rest are
    /// infrared brightness temperatures.
    pub fn quantity(&self) -> BandQuantity {
        if self.number() <= 6 {
            BandQuantity::Reflectance
        } else {
            BandQuantity::BrightnessTemperature
        }
    }
}

impl fmt::Display for AhiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "band {}", self.number())
    }
}

impl From<AhiBand> for u8 {
    fn from(band: AhiBand) -> Self {
        band.number()
    }
}

impl TryFrom<u8> for AhiBand {
    type Error = CompositeError;

    fn try_from(number: u8) -> Result<Self> {
        Self::from_number(number)
    }
}

/// Band arrays keyed by AHI channel.
#[derive(Debug, Clone, Default)]
pub struct BandSet {
    bands: HashMap<AhiBand, BandArray>,
}

impl BandSet {
    /// Create an empty band set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a band, returning any array it replaced.
    pub fn insert(&mut self, band: AhiBand, array: BandArray) -> Option<BandArray> {
        self.bands.insert(band, array)
    }

    /// Builder-style insert.
    pub fn with(mut self, band: AhiBand, array: BandArray) -> Self {
        self.insert(band, array);
        self
    }

    /// Get a band if present.
    pub fn get(&self, band: AhiBand) -> Option<&BandArray> {
        self.bands.get(&band)
    }

    /// Get a band that `recipe` cannot run without.
    pub fn require(&self, recipe: &'static str, band: AhiBand) -> Result<&BandArray> {
        self.get(band)
            .ok_or(CompositeError::MissingBand { recipe, band })
    }

    /// Number of bands held.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Check if no bands are held.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Iterate over bands in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (AhiBand, &BandArray)> {
        let mut entries: Vec<_> = self.bands.iter().map(|(b, a)| (*b, a)).collect();
        entries.sort_by_key(|(b, _)| *b);
        entries.into_iter()
    }

    /// The band with the most grid points among `bands`, if any are present.
    ///
    /// Ties go to the earlier band in `bands`.
    pub fn finest(&self, bands: &[AhiBand]) -> Option<AhiBand> {
        let mut best: Option<(AhiBand, usize)> = None;
        for &band in bands {
            if let Some(array) = self.get(band) {
                if best.map_or(true, |(_, len)| array.len() > len) {
                    best = Some((band, array.len()));
                }
            }
        }
        best.map(|(band, _)| band)
    }

    /// Copy `bands` into a new set with every array on the finest grid
    /// among them. Bands missing from `self` are left out.
    pub fn aligned(&self, bands: &[AhiBand], method: InterpolationMethod) -> Result<BandSet> {
        let mut aligned = BandSet::new();
        let Some(reference) = self.finest(bands).and_then(|b| self.get(b)) else {
            return Ok(aligned);
        };

        for &band in bands {
            if let Some(array) = self.get(band) {
                aligned.insert(band, resample_grid(array, reference, method)?);
            }
        }
        Ok(aligned)
    }
}

impl FromIterator<(AhiBand, BandArray)> for BandSet {
    fn from_iter<I: IntoIterator<Item = (AhiBand, BandArray)>>(iter: I) -> Self {
        Self {
            bands: iter.into_iter().collect(),
        }
    }
}
