//! Land surface temperature synthesis.
//!
//! The LST field is the sum of a seasonal baseline, terrain and land-cover
//! responses, index responses, and per-pixel Gaussian noise:
//!
//! ```text
//! seasonal = 0.5 + 0.4·sin(2π·(doy/365 − 0.25))
//! base     = 26 + 10·seasonal − 3·elevation
//! LST      = base + 8·urban + 5·NDBI − 7·NDVI − 2.5·albedo + 1.5·TIRBT + N(0, 0.8)
//! ```
//!
//! Urban cover and the built-up index push temperatures up; vegetation and
//! reflective surfaces pull them down. The output is in approximate
//! degrees Celsius and is deliberately left unclipped: this is a synthetic
//! proxy, not a calibrated product.

use rand::Rng;

use crate::indices::SpectralIndices;
use crate::noise::normal_field;
use crate::raster::Raster;
use crate::surfaces::LatentSurfaces;

/// Baseline temperature before terrain and land-cover responses (deg C).
const BASE_TEMPERATURE: f64 = 26.0;
/// Seasonal swing applied to the baseline (deg C).
const SEASONAL_GAIN: f64 = 10.0;
/// Cooling from normalized elevation (deg C over the full relief).
const ELEVATION_LAPSE: f64 = 3.0;
/// Urban heat island contribution (deg C at full urban density).
const URBAN_GAIN: f64 = 8.0;
const NDBI_GAIN: f64 = 5.0;
const NDVI_COOLING: f64 = 7.0;
const ALBEDO_COOLING: f64 = 2.5;
const TIRBT_GAIN: f64 = 1.5;
/// Standard deviation of the per-pixel temperature noise (deg C).
const NOISE_STD: f64 = 0.8;

/// Days in the synthetic year.
const DAYS_PER_YEAR: u32 = 365;

/// Draw the day-of-year for this run, uniform over 1..=365.
pub fn draw_day_of_year(rng: &mut impl Rng) -> u32 {
    rng.random_range(1..=DAYS_PER_YEAR)
}

/// Seasonal factor in [0.1, 0.9], peaking mid-year.
///
/// The phase shift puts the minimum at the start of the year, so
/// `doy = 1` sits near the cold extreme and mid-year near the warm one.
#[must_use]
pub fn seasonal_factor(doy: u32) -> f64 {
    use std::f64::consts::TAU;
    0.5 + 0.4 * (TAU * (f64::from(doy) / f64::from(DAYS_PER_YEAR) - 0.25)).sin()
}

/// Synthesize the LST field.
///
/// Draws exactly one `Normal(0, 0.8)` noise field from `rng`, added after
/// the deterministic combination is complete.
pub fn synthesize_lst(
    surfaces: &LatentSurfaces,
    indices: &SpectralIndices,
    tirbt: &Raster,
    seasonal: f64,
    rng: &mut impl Rng,
) -> Raster {
    let rows = surfaces.elevation.rows();
    let cols = surfaces.elevation.cols();
    let noise = normal_field(rows, cols, 0.0, NOISE_STD, rng);

    Raster::from_fn(rows, cols, |row, col| {
        let base = BASE_TEMPERATURE + SEASONAL_GAIN * seasonal
            - ELEVATION_LAPSE * surfaces.elevation.get(row, col);
        base + URBAN_GAIN * surfaces.urban_density.get(row, col)
            + NDBI_GAIN * indices.ndbi.get(row, col)
            - NDVI_COOLING * indices.ndvi.get(row, col)
            - ALBEDO_COOLING * indices.albedo.get(row, col)
            + TIRBT_GAIN * tirbt.get(row, col)
            + noise.get(row, col)
    })
}
