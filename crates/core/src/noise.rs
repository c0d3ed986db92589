//! Seeded Gaussian noise fields.
//!
//! Each stochastic layer in the pipeline perturbs a deterministic base with
//! one freshly drawn noise field. Fields are drawn row-major from the single
//! generator owned by the run, so the number and order of draws is part of
//! the reproducibility contract documented in [`crate::generator`].

use rand::Rng;
use rand_distr::{Normal, StandardNormal};

use crate::raster::Raster;

/// Draw a rows x cols field of independent standard-normal samples.
///
/// Consumes exactly `rows * cols` draws from `rng`, in row-major order.
pub fn standard_normal_field(rows: usize, cols: usize, rng: &mut impl Rng) -> Raster {
    Raster::from_fn(rows, cols, |_, _| rng.sample::<f64, _>(StandardNormal))
}

/// Draw a rows x cols field of independent `Normal(mean, std_dev)` samples.
///
/// Consumes exactly `rows * cols` draws from `rng`, in row-major order.
pub fn normal_field(rows: usize, cols: usize, mean: f64, std_dev: f64, rng: &mut impl Rng) -> Raster {
    let normal =
        Normal::new(mean, std_dev).expect("Normal distribution parameters must be valid (std_dev > 0)");
    Raster::from_fn(rows, cols, |_, _| rng.sample(normal))
}
