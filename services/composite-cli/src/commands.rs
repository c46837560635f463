//! Subcommand implementations.
//!
//! Each command renders its output to a `String` so it can be tested
//! without capturing stdout.

use anyhow::{Context, Result};
use band_grid::BandArray;
use rgb_composite::{AhiBand, BandSet, Compositor, Recipe, RgbImage};
use serde_json::json;
use std::fmt::Write;
use tracing::info;

/// Parse a `BAND=VALUE` pair such as `13=291.5` or `B13=291.5`.
pub fn parse_band_value(s: &str) -> Result<(AhiBand, f32), String> {
    let (band, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected BAND=VALUE, got '{}'", s))?;

    let band = band.trim();
    let number = band
        .strip_prefix(['B', 'b'])
        .unwrap_or(band)
        .parse::<u8>()
        .map_err(|_| format!("invalid band number '{}'", band))?;
    let band = AhiBand::from_number(number).map_err(|e| e.to_string())?;

    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid value '{}' for {}", value, band))?;

    Ok((band, value))
}

/// Print every recipe in the catalog.
pub fn list(json: bool) -> Result<String> {
    if json {
        let infos: Vec<_> = Recipe::ALL.iter().map(|r| r.info()).collect();
        return serde_json::to_string_pretty(&infos).context("failed to serialize recipes");
    }

    let mut out = String::new();
    for recipe in Recipe::ALL {
        let bands: Vec<String> = recipe.bands().iter().map(|b| b.number().to_string()).collect();
        writeln!(
            out,
            "{:<26} {:<22} bands {}",
            recipe.name(),
            recipe.slug(),
            bands.join(",")
        )?;
    }
    Ok(out)
}

/// Print one recipe's channel formulas.
pub fn describe(recipe: Recipe) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{} ({})", recipe.name(), recipe.slug())?;
    writeln!(out, "  {}", recipe.description())?;
    for band in recipe.bands() {
        writeln!(
            out,
            "  {:<8} {:>5.2} um  {:>3} km  {}",
            band.to_string(),
            band.wavelength_um(),
            band.resolution_km(),
            band.quantity().unit()
        )?;
    }
    for spec in recipe.channels() {
        writeln!(out, "  {}", spec)?;
    }
    Ok(out)
}

/// Run a recipe on constant bands and report the resulting color.
pub fn eval(
    compositor: &Compositor,
    recipe: Recipe,
    values: &[(AhiBand, f32)],
    width: usize,
    height: usize,
    json: bool,
) -> Result<String> {
    let bands: BandSet = values
        .iter()
        .map(|&(band, value)| (band, BandArray::filled(value, width, height)))
        .collect();

    info!(
        recipe = recipe.name(),
        bands = bands.len(),
        width,
        height,
        "Evaluating composite"
    );

    let image = compositor
        .compose(recipe, &bands)
        .with_context(|| format!("failed to compose {}", recipe))?;

    render_pixel(recipe, &image, json)
}

fn render_pixel(recipe: Recipe, image: &RgbImage, json: bool) -> Result<String> {
    let [r, g, b] = image
        .pixel(0, 0)
        .context("composite has no pixels")?;
    let rgb8 = image.to_rgb8();
    let hex = format!("#{:02X}{:02X}{:02X}", rgb8[0], rgb8[1], rgb8[2]);

    if json {
        let value = json!({
            "recipe": recipe.name(),
            "width": image.width(),
            "height": image.height(),
            "red": r,
            "green": g,
            "blue": b,
            "rgb8": hex,
        });
        return serde_json::to_string_pretty(&value).context("failed to serialize result");
    }

    let mut out = String::new();
    writeln!(out, "{} ({}x{})", recipe.name(), image.width(), image.height())?;
    for (spec, value) in recipe.channels().iter().zip([r, g, b]) {
        writeln!(out, "  {:<6} {:>8.3}  {}", format!("{:?}", spec.channel).to_lowercase(), value, spec)?;
    }
    writeln!(out, "  rgb8   {}", hex)?;
    Ok(out)
}
