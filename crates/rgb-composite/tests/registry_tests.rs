//! Tests for recipe lookup and band-set dispatch.

use band_grid::{rescale_value, BandArray, InterpolationMethod};
use rgb_composite::{
    catalog, AhiBand, BandSet, ChannelSpec, CompositeConfig, CompositeError, Compositor, Recipe,
};

/// Plausible constant value for each band, inside most recipe domains.
fn typical_value(band: AhiBand) -> f32 {
    match band {
        AhiBand::B01 => 30.0,
        AhiBand::B02 => 28.0,
        AhiBand::B03 => 35.0,
        AhiBand::B04 => 45.0,
        AhiBand::B05 => 20.0,
        AhiBand::B06 => 12.0,
        AhiBand::B07 => 285.0,
        AhiBand::B08 => 232.0,
        AhiBand::B09 => 240.0,
        AhiBand::B10 => 246.0,
        AhiBand::B11 => 276.0,
        AhiBand::B12 => 255.0,
        AhiBand::B13 => 279.0,
        AhiBand::B14 => 278.0,
        AhiBand::B15 => 277.5,
        AhiBand::B16 => 260.0,
    }
}

fn full_band_set(width: usize, height: usize) -> BandSet {
    AhiBand::ALL
        .into_iter()
        .map(|b| (b, BandArray::filled(typical_value(b), width, height)))
        .collect()
}

/// Evaluate a channel description by hand on constant inputs.
fn evaluate_spec(spec: &ChannelSpec) -> f32 {
    let mut value = typical_value(spec.minuend);
    if let Some(sub) = spec.subtrahend {
        value -= typical_value(sub);
    }
    match spec.gamma {
        Some(gamma) => {
            let lo = 0.0f32;
            let hi = 1.0f32;
            let n = rescale_value(value, spec.in_min, spec.in_max, lo, hi).clamp(lo, hi);
            255.0 * n.powf(gamma)
        }
        None => rescale_value(value, spec.in_min, spec.in_max, 0.0, 255.0).clamp(0.0, 255.0),
    }
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_compose_matches_channel_specs() {
    let bands = full_band_set(2, 2);

    for recipe in Recipe::ALL {
        let image = recipe.apply(&bands).unwrap();
        let pixel = image.pixel(1, 1).unwrap();
        for (spec, actual) in recipe.channels().iter().zip(pixel) {
            let expected = evaluate_spec(spec);
            assert!(
                (actual - expected).abs() < 1e-3,
                "{recipe} {spec}: expected {expected}, got {actual}"
            );
        }
    }
}

#[test]
fn test_compose_matches_direct_call() {
    let bands = full_band_set(3, 3);
    let band = |b| bands.get(b).unwrap();

    let via_registry = Recipe::NightMicrophysics.apply(&bands).unwrap();
    let direct =
        catalog::night_microphysics(band(AhiBand::B07), band(AhiBand::B13), band(AhiBand::B15))
            .unwrap();
    assert_eq!(via_registry, direct);

    let via_registry = Recipe::TrueColor.apply(&bands).unwrap();
    let direct =
        catalog::true_color(band(AhiBand::B01), band(AhiBand::B02), band(AhiBand::B03)).unwrap();
    assert_eq!(via_registry, direct);
}

#[test]
fn test_compose_reports_missing_band() {
    let bands = BandSet::new()
        .with(AhiBand::B11, BandArray::filled(276.0, 1, 1))
        .with(AhiBand::B13, BandArray::filled(279.0, 1, 1));

    assert_eq!(
        Recipe::Dust.apply(&bands),
        Err(CompositeError::MissingBand {
            recipe: "AHIDustRGB",
            band: AhiBand::B15
        })
    );
}

#[test]
fn test_compose_ignores_extra_bands() {
    let bands = full_band_set(1, 1);
    assert_eq!(bands.len(), 16);
    for recipe in Recipe::ALL {
        assert!(recipe.apply(&bands).is_ok(), "{recipe}");
    }
}

// ============================================================================
// Mixed resolutions
// ============================================================================

/// Bands at their nominal AHI resolutions over one 4 km footprint:
/// 0.5 km bands get 8x8, 1 km bands 4x4, 2 km bands 2x2.
fn native_resolution_set() -> BandSet {
    AhiBand::ALL
        .into_iter()
        .map(|b| {
            let size = (4.0 / b.resolution_km()) as usize;
            (b, BandArray::filled(typical_value(b), size, size))
        })
        .collect()
}

#[test]
fn test_compose_aligns_to_finest_band() {
    let bands = native_resolution_set();

    for recipe in Recipe::ALL {
        let image = recipe.apply(&bands).unwrap();
        let uses_band3 = recipe.bands().contains(&AhiBand::B03);
        let expected = if uses_band3 { (8, 8) } else { (2, 2) };
        assert_eq!(image.shape(), expected, "{recipe}");
    }
}

#[test]
fn test_compose_day_convective_storm_at_native_resolution() {
    let bands = native_resolution_set();
    let band = |b| bands.get(b).unwrap();

    let direct = catalog::day_convective_storm(
        band(AhiBand::B03),
        band(AhiBand::B05),
        band(AhiBand::B07),
        band(AhiBand::B08),
        band(AhiBand::B10),
        band(AhiBand::B13),
    )
    .unwrap();
    let via_registry = Recipe::DayConvectiveStorm.apply(&bands).unwrap();

    assert_eq!(direct.shape(), (8, 8));
    assert_eq!(via_registry.shape(), (8, 8));
    let (a, b) = (direct.pixel(4, 4).unwrap(), via_registry.pixel(4, 4).unwrap());
    for (x, y) in a.into_iter().zip(b) {
        assert!((x - y).abs() < 1e-3, "{a:?} vs {b:?}");
    }
}

#[test]
fn test_compositor_interpolation_setting() {
    let ramp = BandArray::new(vec![0.0, 100.0], 2, 1).unwrap();
    let bands = BandSet::new()
        .with(AhiBand::B03, BandArray::filled(50.0, 3, 1))
        .with(AhiBand::B04, BandArray::filled(50.0, 3, 1))
        .with(AhiBand::B05, ramp);

    let bilinear = Compositor::default()
        .compose(Recipe::NaturalColor, &bands)
        .unwrap();
    assert!((bilinear.red().data()[1] - 127.5).abs() < 1e-3);

    let nearest = Compositor::new(CompositeConfig {
        interpolation: InterpolationMethod::Nearest,
        clamp: true,
    })
    .compose(Recipe::NaturalColor, &bands)
    .unwrap();
    // 0.5 rounds away from zero onto the second source column
    assert_eq!(nearest.red().data()[1], 255.0);
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_names_are_unique() {
    let mut names: Vec<_> = Recipe::ALL.iter().map(|r| r.name()).collect();
    let mut slugs: Vec<_> = Recipe::ALL.iter().map(|r| r.slug()).collect();
    names.sort();
    names.dedup();
    slugs.sort();
    slugs.dedup();
    assert_eq!(names.len(), Recipe::ALL.len());
    assert_eq!(slugs.len(), Recipe::ALL.len());
}

#[test]
fn test_band_parameter_order() {
    let numbers = |r: Recipe| r.bands().iter().map(|b| b.number()).collect::<Vec<_>>();
    assert_eq!(numbers(Recipe::NaturalColor), vec![3, 4, 5]);
    assert_eq!(numbers(Recipe::NightMicrophysics), vec![7, 13, 15]);
    assert_eq!(numbers(Recipe::DayConvectiveStorm), vec![3, 5, 7, 8, 10, 13]);
    assert_eq!(numbers(Recipe::Airmass), vec![8, 10, 12, 13]);
    assert_eq!(numbers(Recipe::Ash), vec![11, 13, 15]);
    assert_eq!(numbers(Recipe::TrueColor), vec![1, 2, 3]);
    assert_eq!(numbers(Recipe::Dust), vec![11, 13, 15]);
}

#[test]
fn test_gamma_channels() {
    let gammas: Vec<_> = Recipe::ALL
        .into_iter()
        .flat_map(|r| r.channels())
        .filter_map(|c| c.gamma)
        .collect();
    assert_eq!(gammas, vec![2.0, 0.4]);
}
