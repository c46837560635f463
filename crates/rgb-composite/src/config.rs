//! Configuration for composite generation.

use band_grid::InterpolationMethod;
use serde::{Deserialize, Serialize};

/// Options applied to every recipe a [`Compositor`](crate::Compositor) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeConfig {
    /// Interpolation method used when a band is resampled onto a finer grid.
    pub interpolation: InterpolationMethod,

    /// Clamp rescaled channels to their output range.
    ///
    /// When disabled, out-of-domain inputs extrapolate past 0 or 255, and
    /// gamma channels yield NaN for inputs below their domain.
    pub clamp: bool,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::Bilinear,
            clamp: true,
        }
    }
}

impl CompositeConfig {
    /// Load configuration from environment variables.
    ///
    /// - `COMPOSITE_INTERPOLATION`: `nearest`, `bilinear` or `cubic`
    /// - `COMPOSITE_CLAMP`: `true`/`1` or `false`/`0`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("COMPOSITE_INTERPOLATION") {
            config.interpolation = InterpolationMethod::from_str(&val);
        }

        if let Some(val) = lookup("COMPOSITE_CLAMP") {
            config.clamp = parse_bool(&val).unwrap_or(config.clamp);
        }

        config
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
