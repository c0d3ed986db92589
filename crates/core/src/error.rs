//! Error types for dataset generation.

use thiserror::Error;

/// Result type alias using [`GenerationError`].
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Failures surfaced by one generation run.
///
/// Both variants are terminal for the invocation: the caller must retry
/// with corrected grid dimensions. A constant latent field during min-max
/// normalization is handled internally (the field normalizes to all zeros)
/// and never reaches the caller as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Rows or columns were zero. Rejected before any synthesis work runs.
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The grid cleared validation but is too small for downstream
    /// modelling use. Raised after generation completes.
    #[error("dataset too small: {n_samples} samples (need more than {minimum}); increase rows/cols")]
    InsufficientSamples { n_samples: usize, minimum: usize },
}
