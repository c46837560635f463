//! Test data generators for synthetic satellite band data.
//!
//! These generators create predictable, verifiable patterns that can be
//! used across the test suite.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid[1], 1000.0); // col=1, row=0
/// assert_eq!(grid[10], 1.0);   // col=0, row=1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}

/// Creates a brightness temperature grid ramping left to right.
///
/// The first column holds `min_k` and the last column `max_k`; every row
/// is identical.
pub fn create_brightness_temperature_grid(
    width: usize,
    height: usize,
    min_k: f32,
    max_k: f32,
) -> Vec<f32> {
    let step = if width > 1 {
        (max_k - min_k) / (width - 1) as f32
    } else {
        0.0
    };
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            data.push(min_k + step * col as f32);
        }
    }
    data
}

/// Creates a reflectance grid (percent) ramping top to bottom from 0 to 100.
pub fn create_reflectance_grid(width: usize, height: usize) -> Vec<f32> {
    let step = if height > 1 {
        100.0 / (height - 1) as f32
    } else {
        0.0
    };
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for _col in 0..width {
            data.push(step * row as f32);
        }
    }
    data
}

/// Creates a grid of `base` plus deterministic noise in `[-amplitude, amplitude]`.
pub fn create_noisy_grid(width: usize, height: usize, base: f32, amplitude: f32, seed: u32) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let hash = simple_hash(col as u32, row as u32, seed);
            let unit = (hash % 10_001) as f32 / 10_000.0; // 0.0 to 1.0
            data.push(base + (unit * 2.0 - 1.0) * amplitude);
        }
    }
    data
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// Creates a grid with NaN values at specified (col, row) positions, zeros elsewhere.
pub fn create_grid_with_nans(
    width: usize,
    height: usize,
    nan_positions: &[(usize, usize)],
) -> Vec<f32> {
    let mut data = vec![0.0f32; width * height];
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[row * width + col] = f32::NAN;
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_grid() {
        let grid = create_test_grid(10, 5);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[11], 1001.0);
    }

    #[test]
    fn test_brightness_temperature_endpoints() {
        let grid = create_brightness_temperature_grid(11, 3, 200.0, 300.0);
        assert_eq!(grid.len(), 33);
        assert_eq!(grid[0], 200.0);
        assert!((grid[10] - 300.0).abs() < 0.001);
        assert_eq!(grid[11], 200.0); // next row starts over
    }

    #[test]
    fn test_reflectance_range() {
        let grid = create_reflectance_grid(4, 5);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[19], 100.0);
    }

    #[test]
    fn test_noisy_grid_bounds_and_determinism() {
        let a = create_noisy_grid(50, 50, 280.0, 5.0, 7);
        let b = create_noisy_grid(50, 50, 280.0, 5.0, 7);
        assert_eq!(a, b, "Same seed should produce same data");
        assert!(a.iter().all(|&v| (275.0..=285.0).contains(&v)));
        assert_ne!(a, create_noisy_grid(50, 50, 280.0, 5.0, 8));
    }

    #[test]
    fn test_create_grid_with_nans() {
        let grid = create_grid_with_nans(10, 10, &[(5, 5), (0, 0)]);
        assert!(grid[0].is_nan());
        assert!(grid[55].is_nan());
        assert!(!grid[1].is_nan());
    }
}
