//! Resampling of coarse bands onto a finer band's grid.
//!
//! AHI bands come at 0.5, 1 and 2 km over the same footprint. Before two
//! bands can be differenced or stacked, the coarser one is sampled at the
//! positions of the finer grid's points. The first and last points of each
//! axis coincide on both grids.

use tracing::debug;

use crate::error::{BandGridError, Result};
use crate::types::{BandArray, InterpolationMethod};

/// A source band sampled at fractional (column, row) positions.
#[derive(Clone, Copy)]
struct Surface<'a> {
    data: &'a [f32],
    width: usize,
    height: usize,
}

impl<'a> Surface<'a> {
    fn new(data: &'a [f32], width: usize, height: usize) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Value at an integer position, held at the grid edge outside it.
    fn at(&self, col: i64, row: i64) -> f32 {
        let col = col.clamp(0, self.width as i64 - 1) as usize;
        let row = row.clamp(0, self.height as i64 - 1) as usize;
        self.data[row * self.width + col]
    }

    fn sample(&self, x: f64, y: f64, method: InterpolationMethod) -> f32 {
        match method {
            InterpolationMethod::Nearest => self.nearest(x, y),
            InterpolationMethod::Bilinear => self.bilinear(x, y),
            InterpolationMethod::Cubic => self.cubic(x, y),
        }
    }

    /// Closest source point; halfway positions round away from zero.
    fn nearest(&self, x: f64, y: f64) -> f32 {
        let (col, row) = (x.round() as usize, y.round() as usize);
        if col >= self.width || row >= self.height {
            return f32::NAN;
        }
        self.data[row * self.width + col]
    }

    /// Weighted mean of the enclosing cell. A missing corner stays missing.
    fn bilinear(&self, x: f64, y: f64) -> f32 {
        let (x0, y0) = (x.floor() as i64, y.floor() as i64);
        if x0 as usize >= self.width || y0 as usize >= self.height {
            return f32::NAN;
        }

        let top = (self.at(x0, y0), self.at(x0 + 1, y0));
        let bottom = (self.at(x0, y0 + 1), self.at(x0 + 1, y0 + 1));
        if [top.0, top.1, bottom.0, bottom.1].iter().any(|v| v.is_nan()) {
            return f32::NAN;
        }

        let (tx, ty) = ((x - x0 as f64) as f32, (y - y0 as f64) as f32);
        lerp(lerp(top.0, top.1, tx), lerp(bottom.0, bottom.1, tx), ty)
    }

    /// Catmull-Rom over the surrounding 4x4 block. Falls back to bilinear
    /// when the block touches missing data.
    fn cubic(&self, x: f64, y: f64) -> f32 {
        let (x0, y0) = (x.floor() as i64, y.floor() as i64);
        let (tx, ty) = ((x - x0 as f64) as f32, (y - y0 as f64) as f32);

        let mut rows = [0.0f32; 4];
        for (dy, out) in (-1..=2).zip(rows.iter_mut()) {
            let row = [-1, 0, 1, 2].map(|dx| self.at(x0 + dx, y0 + dy));
            if row.iter().any(|v| v.is_nan()) {
                return self.bilinear(x, y);
            }
            *out = catmull_rom(row, tx);
        }

        catmull_rom(rows, ty)
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Catmull-Rom spline through `p[1]` (t = 0) and `p[2]` (t = 1).
fn catmull_rom(p: [f32; 4], t: f32) -> f32 {
    let a = -0.5 * p[0] + 1.5 * p[1] - 1.5 * p[2] + 0.5 * p[3];
    let b = p[0] - 2.5 * p[1] + 2.0 * p[2] - 0.5 * p[3];
    let c = 0.5 * (p[2] - p[0]);
    ((a * t + b) * t + c) * t + p[1]
}

/// Distance in source points between neighbouring destination points.
fn step(src: usize, dst: usize) -> f64 {
    src.saturating_sub(1) as f64 / dst.saturating_sub(1).max(1) as f64
}

fn resample_surface(
    surface: Surface<'_>,
    dst_width: usize,
    dst_height: usize,
    method: InterpolationMethod,
) -> Vec<f32> {
    let step_x = step(surface.width, dst_width);
    let step_y = step(surface.height, dst_height);

    (0..dst_height)
        .flat_map(|row| (0..dst_width).map(move |col| (col, row)))
        .map(|(col, row)| surface.sample(col as f64 * step_x, row as f64 * step_y, method))
        .collect()
}

/// Resample `source` onto the grid of `reference`.
///
/// The result has the reference's dimensions. When the shapes already
/// match the source is returned unchanged.
pub fn resample_grid(
    source: &BandArray,
    reference: &BandArray,
    method: InterpolationMethod,
) -> Result<BandArray> {
    if source.is_empty() || reference.is_empty() {
        return Err(BandGridError::EmptyGrid);
    }

    if source.same_shape(reference) {
        return Ok(source.clone());
    }

    let (src_width, src_height) = source.shape();
    let (dst_width, dst_height) = reference.shape();

    debug!(
        src_width,
        src_height,
        dst_width,
        dst_height,
        method = %method,
        "Resampling band onto reference grid"
    );

    let surface = Surface::new(source.data(), src_width, src_height);
    let data = resample_surface(surface, dst_width, dst_height, method);
    BandArray::new(data, dst_width, dst_height)
}
