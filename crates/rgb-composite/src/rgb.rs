//! Three-channel composite images.

use band_grid::BandArray;

use crate::error::Result;

/// Three co-registered channels, each conventionally in [0, 255].
///
/// Only [`combine_rgb`] creates these, so all channels always share one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    red: BandArray,
    green: BandArray,
    blue: BandArray,
}

/// Stack three equally shaped channels into an RGB image.
///
/// Fails with `ShapeMismatch` against the red channel's shape.
pub fn combine_rgb(red: BandArray, green: BandArray, blue: BandArray) -> Result<RgbImage> {
    red.ensure_same_shape(&green)?;
    red.ensure_same_shape(&blue)?;
    Ok(RgbImage { red, green, blue })
}

impl RgbImage {
    pub fn red(&self) -> &BandArray {
        &self.red
    }

    pub fn green(&self) -> &BandArray {
        &self.green
    }

    pub fn blue(&self) -> &BandArray {
        &self.blue
    }

    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }

    /// Image dimensions as (width, height).
    pub fn shape(&self) -> (usize, usize) {
        self.red.shape()
    }

    /// Channel values at a pixel.
    pub fn pixel(&self, col: usize, row: usize) -> Option<[f32; 3]> {
        Some([
            self.red.get(col, row)?,
            self.green.get(col, row)?,
            self.blue.get(col, row)?,
        ])
    }

    /// Interleaved 8-bit RGB bytes (3 per pixel).
    ///
    /// Values are rounded and clamped to [0, 255]; missing data becomes 0.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(self.red.len() * 3);
        for ((&r, &g), &b) in self
            .red
            .data()
            .iter()
            .zip(self.green.data())
            .zip(self.blue.data())
        {
            pixels.push(to_u8(r));
            pixels.push(to_u8(g));
            pixels.push(to_u8(b));
        }
        pixels
    }
}

#[inline]
fn to_u8(value: f32) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.round().clamp(0.0, 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompositeError;
    use band_grid::BandGridError;

    #[test]
    fn test_combine_rgb() {
        let image = combine_rgb(
            BandArray::filled(10.0, 3, 2),
            BandArray::filled(20.0, 3, 2),
            BandArray::filled(30.0, 3, 2),
        )
        .unwrap();

        assert_eq!(image.shape(), (3, 2));
        assert_eq!(image.pixel(2, 1), Some([10.0, 20.0, 30.0]));
        assert_eq!(image.pixel(3, 1), None);
    }

    #[test]
    fn test_combine_rgb_shape_mismatch() {
        let result = combine_rgb(
            BandArray::filled(0.0, 4, 4),
            BandArray::filled(0.0, 4, 4),
            BandArray::filled(0.0, 2, 2),
        );
        assert_eq!(
            result,
            Err(CompositeError::Grid(BandGridError::ShapeMismatch {
                expected: (4, 4),
                actual: (2, 2)
            }))
        );
    }

    #[test]
    fn test_to_rgb8() {
        let image = combine_rgb(
            BandArray::new(vec![127.5, -3.0], 2, 1).unwrap(),
            BandArray::new(vec![63.75, 300.0], 2, 1).unwrap(),
            BandArray::new(vec![0.0, f32::NAN], 2, 1).unwrap(),
        )
        .unwrap();

        assert_eq!(image.to_rgb8(), vec![128, 64, 0, 0, 255, 0]);
    }
}
