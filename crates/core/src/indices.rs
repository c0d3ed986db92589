//! Spectral indices and broadband albedo.
//!
//! Pure functions of the reflectance bands; no randomness. The
//! normalized-difference indices carry a small additive stabilizer in the
//! denominator so that near-zero band pairs cannot divide by zero. The
//! indices stay unclipped (they are ratios in roughly [-1, 1], not
//! reflectances); only albedo is clamped to [0, 1].

use crate::raster::Raster;
use crate::bands::ReflectanceBands;

/// Denominator stabilizer for the normalized-difference ratios.
const STABILIZER: f64 = 1e-6;

/// Derived index rasters.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralIndices {
    /// Normalized difference vegetation index, (NIR−RED)/(NIR+RED+ε).
    pub ndvi: Raster,
    /// Normalized difference built-up index, (SWIR−NIR)/(SWIR+NIR+ε).
    pub ndbi: Raster,
    /// Normalized difference water index, (GREEN−NIR)/(GREEN+NIR+ε).
    pub ndwi: Raster,
    /// Broadband albedo proxy, a weighted band sum clamped to [0, 1].
    pub albedo: Raster,
}

/// Compute all indices from the bands.
#[must_use]
pub fn compute_indices(bands: &ReflectanceBands) -> SpectralIndices {
    SpectralIndices {
        ndvi: normalized_difference(&bands.nir, &bands.red),
        ndbi: normalized_difference(&bands.swir, &bands.nir),
        ndwi: normalized_difference(&bands.green, &bands.nir),
        albedo: albedo(bands),
    }
}

/// Stabilized normalized difference `(a − b) / (a + b + ε)`.
fn normalized_difference(a: &Raster, b: &Raster) -> Raster {
    a.zip_map(b, |av, bv| (av - bv) / (av + bv + STABILIZER))
}

/// Broadband albedo: fixed positive weights over five reflective bands.
fn albedo(bands: &ReflectanceBands) -> Raster {
    Raster::from_fn(bands.blue.rows(), bands.blue.cols(), |row, col| {
        0.1 * bands.blue.get(row, col)
            + 0.3 * bands.green.get(row, col)
            + 0.3 * bands.red.get(row, col)
            + 0.2 * bands.nir.get(row, col)
            + 0.1 * bands.swir.get(row, col)
    })
    .clamped_unit()
}
