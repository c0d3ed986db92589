//! Dataset property validation suite.
//!
//! End-to-end checks of the generation contract: determinism, value-range
//! invariants, table shape, the minimum-size floor, the urban/vegetation
//! anti-correlation, and seed sensitivity.

use uhi_synth_core::{generate, GenerationError, SampleRecord, COLUMNS, MIN_SAMPLES};

fn column(records: &[SampleRecord], name: &str) -> Vec<f64> {
    let index = COLUMNS
        .iter()
        .position(|&c| c == name)
        .unwrap_or_else(|| panic!("Unknown column {name}"));
    records.iter().map(|r| r.values()[index]).collect()
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let mean_a: f64 = a.iter().sum::<f64>() / n;
    let mean_b: f64 = b.iter().sum::<f64>() / n;
    let covariance: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| (x - mean_a) * (y - mean_b))
        .sum::<f64>();
    let var_a: f64 = a.iter().map(|&x| (x - mean_a).powi(2)).sum::<f64>();
    let var_b: f64 = b.iter().map(|&y| (y - mean_b).powi(2)).sum::<f64>();
    covariance / (var_a.sqrt() * var_b.sqrt())
}

#[test]
fn identical_inputs_reproduce_the_table_bit_for_bit() {
    let (table_a, meta_a) = generate(25, 30, 42).unwrap();
    let (table_b, meta_b) = generate(25, 30, 42).unwrap();

    assert_eq!(meta_a, meta_b);
    assert_eq!(table_a.len(), table_b.len());
    for (ra, rb) in table_a.records().iter().zip(table_b.records()) {
        for (va, vb) in ra.values().iter().zip(rb.values()) {
            assert_eq!(va.to_bits(), vb.to_bits(), "Values differ bitwise");
        }
    }
}

#[test]
fn unit_interval_columns_stay_in_bounds() {
    let (table, _) = generate(40, 40, 42).unwrap();
    let bounded = [
        "elevation",
        "urban_density",
        "vegetation",
        "BLUE",
        "GREEN",
        "RED",
        "NIR",
        "SWIR",
        "TIRBT",
        "albedo",
    ];
    for name in bounded {
        for v in column(table.records(), name) {
            assert!(
                (0.0..=1.0).contains(&v),
                "{name} value out of [0, 1]: {v}"
            );
        }
    }
}

#[test]
fn ratio_indices_stay_in_signed_unit_range() {
    let (table, _) = generate(40, 40, 42).unwrap();
    for name in ["NDVI", "NDBI", "NDWI"] {
        for v in column(table.records(), name) {
            assert!(
                (-1.0 - 1e-6..=1.0 + 1e-6).contains(&v),
                "{name} value out of [-1, 1]: {v}"
            );
        }
    }
}

#[test]
fn table_shape_matches_the_grid() {
    let (table, meta) = generate(18, 22, 7).unwrap();
    assert_eq!(table.len(), 18 * 22);
    assert_eq!(meta.rows, 18);
    assert_eq!(meta.cols, 22);
    assert_eq!(meta.n_samples, 18 * 22);
    assert_eq!(COLUMNS.len(), 16);

    // Row-major flatten: x varies fastest, y is constant within a grid row.
    let records = table.records();
    assert_eq!(records[0].x, 0.0);
    assert_eq!(records[0].y, 0.0);
    assert!(records[1].x > records[0].x);
    assert_eq!(records[1].y, records[0].y);
    assert!(records[22].y > records[0].y);
    assert_eq!(records[22].x, 0.0);
}

#[test]
fn sample_floor_is_enforced() {
    assert_eq!(
        generate(10, 10, 42),
        Err(GenerationError::InsufficientSamples {
            n_samples: 100,
            minimum: MIN_SAMPLES,
        })
    );
    assert!(generate(15, 15, 42).is_ok());
}

#[test]
fn urban_density_and_vegetation_anticorrelate() {
    let (table, _) = generate(40, 40, 42).unwrap();
    let urban = column(table.records(), "urban_density");
    let vegetation = column(table.records(), "vegetation");
    let r = pearson(&urban, &vegetation);
    assert!(
        r < -0.5,
        "Expected strong anti-correlation, got Pearson r = {r}"
    );
}

#[test]
fn metadata_day_of_year_stays_in_calendar() {
    for seed in 0..50 {
        let (_, meta) = generate(15, 15, seed).unwrap();
        assert!(
            (1..=365).contains(&meta.doy),
            "Day of year out of range for seed {seed}: {}",
            meta.doy
        );
    }
}

#[test]
fn changing_the_seed_moves_stochastic_columns_but_not_elevation() {
    let (table_a, _) = generate(20, 20, 1).unwrap();
    let (table_b, _) = generate(20, 20, 2).unwrap();

    assert_eq!(
        column(table_a.records(), "elevation"),
        column(table_b.records(), "elevation"),
        "Elevation is noise-free and must not depend on the seed"
    );

    let moved = ["urban_density", "vegetation", "BLUE", "LST"]
        .iter()
        .any(|name| column(table_a.records(), name) != column(table_b.records(), name));
    assert!(moved, "A different seed should change stochastic columns");
}

#[test]
fn coordinates_span_the_unit_square_inclusively() {
    let (table, _) = generate(15, 15, 3).unwrap();
    let xs = column(table.records(), "x");
    let ys = column(table.records(), "y");
    let max = |v: &[f64]| v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = |v: &[f64]| v.iter().copied().fold(f64::INFINITY, f64::min);
    assert_eq!(min(&xs), 0.0);
    assert_eq!(max(&xs), 1.0);
    assert_eq!(min(&ys), 0.0);
    assert_eq!(max(&ys), 1.0);
}
