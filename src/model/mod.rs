//! Classifier boundary.
//!
//! The model is opaque to the extraction pipeline: it consumes a 30-column
//! integer row and emits one code, where `-1` means legitimate and anything
//! else suspicious. The encoding and the column order were fixed at training
//! time. A shape disagreement between vector and model is a programming
//! contract violation and fails loudly, unlike network trouble, which never
//! does.

pub mod linear;

use thiserror::Error;

pub use linear::LinearModel;

/// Fatal classifier failures.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("feature vector has {got} columns, model expects {expected}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("failed to read model weights: {0}")]
    Load(#[from] std::io::Error),
    #[error("malformed model weights: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A pretrained binary classifier over integer-coded feature rows.
///
/// Implementations are read-only after construction and safe to share across
/// concurrent classifications.
pub trait Classifier: Send + Sync {
    /// Number of columns the model was trained on.
    fn n_features(&self) -> usize;

    /// Predict the output code for one row. `-1` is legitimate; any other
    /// code is suspicious.
    fn predict(&self, row: &[i8]) -> Result<i8, ModelError>;
}
