//! Latent land-cover surfaces: elevation, urban density, vegetation.
//!
//! The three surfaces drive everything downstream. Elevation is a pure
//! sinusoidal ridge pattern with no noise. Urban density places two
//! Gaussian hotspots and perturbs them with a seeded noise field.
//! Vegetation is built to be anti-correlated with urban density, with a
//! small preference for low ground.
//!
//! # Formulas
//!
//! ```text
//! elevation(x,y)     = minmax(0.2·y + 0.1·sin(2πx)·cos(2πy))
//! urban_density(x,y) = clip(minmax(Σ wᵢ·exp(-d²ᵢ/(2·sᵢ²)) + 0.05·η), 0, 1)
//! vegetation(x,y)    = clip(1 − 0.8·urban + 0.1·(1 − elevation) + 0.05·η, 0, 1)
//! ```
//!
//! where `η` is a standard-normal field drawn per surface (urban first,
//! vegetation second) and `minmax` rescales the field to [0, 1], with a
//! constant field collapsing to all zeros.

use std::f64::consts::PI;

use rand::Rng;

use crate::noise::standard_normal_field;
use crate::raster::Raster;

/// One Gaussian urban hotspot in normalized coordinates.
struct Hotspot {
    center_x: f64,
    center_y: f64,
    /// Spatial scale of the kernel (standard deviation of the Gaussian).
    scale: f64,
    weight: f64,
}

/// The two fixed urban centers.
const HOTSPOTS: [Hotspot; 2] = [
    Hotspot {
        center_x: 0.45,
        center_y: 0.55,
        scale: 0.12,
        weight: 0.9,
    },
    Hotspot {
        center_x: 0.75,
        center_y: 0.30,
        scale: 0.10,
        weight: 0.7,
    },
];

/// Amplitude of the noise perturbation applied to urban density and
/// vegetation.
const SURFACE_NOISE_AMPLITUDE: f64 = 0.05;

/// How strongly vegetation is suppressed by urban density.
const URBAN_SUPPRESSION: f64 = 0.8;

/// How strongly vegetation prefers low ground.
const LOWLAND_PREFERENCE: f64 = 0.1;

/// The three latent surfaces, all within [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct LatentSurfaces {
    /// Noise-free sinusoidal terrain, min-max normalized.
    pub elevation: Raster,
    /// Two-hotspot urban structure, normalized and clamped.
    pub urban_density: Raster,
    /// Inverse of urban density with a lowland bonus, clamped.
    pub vegetation: Raster,
}

/// Synthesize the latent surfaces from the coordinate fields.
///
/// Draws exactly two noise fields from `rng`: urban density first, then
/// vegetation. Elevation consumes no randomness.
pub fn synthesize_surfaces(x: &Raster, y: &Raster, rng: &mut impl Rng) -> LatentSurfaces {
    let rows = x.rows();
    let cols = x.cols();

    let elevation = x
        .zip_map(y, |xv, yv| {
            0.2 * yv + 0.1 * (2.0 * PI * xv).sin() * (2.0 * PI * yv).cos()
        })
        .normalized_unit();

    let urban_noise = standard_normal_field(rows, cols, rng);
    let urban_density = x
        .zip_map(y, hotspot_intensity)
        .zip_map(&urban_noise, |base, noise| {
            base + SURFACE_NOISE_AMPLITUDE * noise
        })
        .normalized_unit()
        .clamped_unit();

    let vegetation_noise = standard_normal_field(rows, cols, rng);
    let vegetation = Raster::from_fn(rows, cols, |row, col| {
        1.0 - URBAN_SUPPRESSION * urban_density.get(row, col)
            + LOWLAND_PREFERENCE * (1.0 - elevation.get(row, col))
            + SURFACE_NOISE_AMPLITUDE * vegetation_noise.get(row, col)
    })
    .clamped_unit();

    LatentSurfaces {
        elevation,
        urban_density,
        vegetation,
    }
}

/// Summed Gaussian kernel intensity of the fixed hotspots at `(x, y)`.
fn hotspot_intensity(x: f64, y: f64) -> f64 {
    HOTSPOTS
        .iter()
        .map(|h| {
            let dx = x - h.center_x;
            let dy = y - h.center_y;
            h.weight * (-(dx * dx + dy * dy) / (2.0 * h.scale * h.scale)).exp()
        })
        .sum()
}
