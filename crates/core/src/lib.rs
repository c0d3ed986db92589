//! Synthetic Urban Heat Island Dataset Core Library
//!
//! Synthesizes a spatially coherent, physically plausible raster dataset
//! emulating multispectral satellite imagery plus a derived land surface
//! temperature field, for training and testing Urban Heat Island models.
//!
//! The pipeline is a seeded, deterministic, staged computation:
//!
//! - coordinate grid over the unit square
//! - latent surfaces (elevation, urban density, vegetation)
//! - six synthetic reflectance bands
//! - spectral indices (NDVI, NDBI, NDWI) and broadband albedo
//! - seasonal factor and land surface temperature
//! - row-per-pixel output table with metadata
//!
//! The entry point is [`generate`]; the randomness draw order it commits
//! to is documented in [`generator`].

pub mod bands;
pub mod error;
pub mod generator;
pub mod grid;
pub mod indices;
pub mod noise;
pub mod raster;
pub mod surfaces;
pub mod table;
pub mod temperature;

pub use bands::{Band, ReflectanceBands};
pub use error::{GenerationError, GenerationResult};
pub use generator::generate;
pub use grid::GridSpec;
pub use indices::SpectralIndices;
pub use raster::Raster;
pub use surfaces::LatentSurfaces;
pub use table::{DatasetMeta, SampleRecord, SampleTable, COLUMNS, MIN_SAMPLES};
