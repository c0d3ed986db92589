//! Synthetic reflectance bands.
//!
//! Six bands emulate a multispectral sensor. Each band is a linear
//! response to the latent surfaces plus its own Gaussian noise field,
//! clamped to the [0, 1] reflectance range. Vegetation raises
//! near-infrared response and lowers the visible/thermal bands;
//! urbanization does the opposite.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::noise::standard_normal_field;
use crate::raster::Raster;
use crate::surfaces::LatentSurfaces;

/// Amplitude of each band's own noise field.
const BAND_NOISE_AMPLITUDE: f64 = 0.1;

/// A simulated sensor spectral channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    Blue,
    Green,
    Red,
    /// Near infrared.
    Nir,
    /// Shortwave infrared.
    Swir,
    /// Thermal infrared brightness temperature proxy.
    Tirbt,
}

impl Band {
    /// All bands, in synthesis (and column) order.
    pub const ALL: [Self; 6] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Nir,
        Self::Swir,
        Self::Tirbt,
    ];

    /// Column name of the band in the output table.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "BLUE",
            Self::Green => "GREEN",
            Self::Red => "RED",
            Self::Nir => "NIR",
            Self::Swir => "SWIR",
            Self::Tirbt => "TIRBT",
        }
    }

    /// Linear response of the band: `(base, urban weight, vegetation weight)`.
    fn coefficients(self) -> (f64, f64, f64) {
        match self {
            Self::Blue => (0.2, 0.0, 0.0),
            Self::Green => (0.25, -0.1, 0.5),
            Self::Red => (0.3, 0.25, -0.3),
            Self::Nir => (0.35, -0.15, 0.5),
            Self::Swir => (0.4, 0.4, -0.2),
            Self::Tirbt => (0.6, 0.25, -0.1),
        }
    }
}

/// The six synthesized reflectance rasters.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectanceBands {
    pub blue: Raster,
    pub green: Raster,
    pub red: Raster,
    pub nir: Raster,
    pub swir: Raster,
    pub tirbt: Raster,
}

impl ReflectanceBands {
    /// Raster of one band.
    #[must_use]
    pub fn get(&self, band: Band) -> &Raster {
        match band {
            Band::Blue => &self.blue,
            Band::Green => &self.green,
            Band::Red => &self.red,
            Band::Nir => &self.nir,
            Band::Swir => &self.swir,
            Band::Tirbt => &self.tirbt,
        }
    }
}

/// Synthesize all six bands from the latent surfaces.
///
/// Draws one noise field per band from `rng`, in [`Band::ALL`] order.
/// Reordering the draws changes every downstream layer, so the order is
/// fixed.
pub fn synthesize_bands(surfaces: &LatentSurfaces, rng: &mut impl Rng) -> ReflectanceBands {
    ReflectanceBands {
        blue: synthesize_band(Band::Blue, surfaces, rng),
        green: synthesize_band(Band::Green, surfaces, rng),
        red: synthesize_band(Band::Red, surfaces, rng),
        nir: synthesize_band(Band::Nir, surfaces, rng),
        swir: synthesize_band(Band::Swir, surfaces, rng),
        tirbt: synthesize_band(Band::Tirbt, surfaces, rng),
    }
}

/// Synthesize one band: linear response to the surfaces plus noise,
/// clamped to [0, 1].
fn synthesize_band(band: Band, surfaces: &LatentSurfaces, rng: &mut impl Rng) -> Raster {
    let (base, urban_weight, vegetation_weight) = band.coefficients();
    let noise = standard_normal_field(
        surfaces.urban_density.rows(),
        surfaces.urban_density.cols(),
        rng,
    );

    Raster::from_fn(
        surfaces.urban_density.rows(),
        surfaces.urban_density.cols(),
        |row, col| {
            base + urban_weight * surfaces.urban_density.get(row, col)
                + vegetation_weight * surfaces.vegetation.get(row, col)
                + BAND_NOISE_AMPLITUDE * noise.get(row, col)
        },
    )
    .clamped_unit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSpec;
    use crate::surfaces::synthesize_surfaces;
    use rand::{rngs::StdRng, SeedableRng};

    fn bands_for(seed: u64) -> ReflectanceBands {
        let spec = GridSpec::new(20, 20).unwrap();
        let (x, y) = spec.coordinate_fields();
        let mut rng = StdRng::seed_from_u64(seed);
        let surfaces = synthesize_surfaces(&x, &y, &mut rng);
        synthesize_bands(&surfaces, &mut rng)
    }

    #[test]
    fn all_bands_within_unit_interval() {
        let bands = bands_for(42);
        for band in Band::ALL {
            for &v in bands.get(band).values() {
                assert!(
                    (0.0..=1.0).contains(&v),
                    "{} sample out of range: {v}",
                    band.name()
                );
            }
        }
    }

    #[test]
    fn band_names_match_table_columns() {
        assert_eq!(
            Band::ALL.map(Band::name),
            ["BLUE", "GREEN", "RED", "NIR", "SWIR", "TIRBT"]
        );
    }

    #[test]
    fn bands_are_deterministic_per_seed() {
        assert_eq!(bands_for(7), bands_for(7));
        assert_ne!(bands_for(7), bands_for(8));
    }

    #[test]
    fn vegetation_raises_nir_over_red() {
        // With heavy vegetation and no urban cover, the NIR response
        // (base 0.35 + 0.5·veg) should on average clear the RED response
        // (base 0.3 − 0.3·veg) comfortably.
        let bands = bands_for(42);
        let mean = |raster: &Raster| {
            raster.values().iter().sum::<f64>() / raster.len() as f64
        };
        assert!(
            mean(&bands.nir) > mean(&bands.red),
            "Mean NIR should exceed mean RED on a vegetated scene"
        );
    }
}
