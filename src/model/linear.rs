//! Linear scorer: the default stand-in for an externally trained model.
//!
//! Weights live in a JSON file with the same column order as the feature
//! vector; a negative weighted sum maps to the legitimate code. The baseline
//! weights approximate the relative importance the reference model learned,
//! with the strong lexical signals weighted up.

use super::{Classifier, ModelError};
use crate::features::FEATURE_DIM;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-column baseline weights, training column order.
const BASELINE_WEIGHTS: [f64; FEATURE_DIM] = [
    1.6, // has_ip_literal
    0.8, // url_length
    1.4, // known_shortener
    1.2, // at_symbol
    0.9, // double_slash_path
    1.0, // domain_hyphen
    0.8, // subdomain_count
    1.3, // ssl_final_state
    0.7, // registration_length
    0.5, // favicon_reachable
    1.1, // nonstandard_port
    1.5, // https_token
    0.6, // path_depth
    0.0, // anchor_url (reserved)
    0.0, // links_in_tags (reserved)
    0.4, // server_form_handling
    1.2, // mailto_present
    1.0, // abnormal_url
    0.9, // redirect_token
    0.0, // on_mouseover (reserved)
    0.0, // right_click (reserved)
    0.0, // popup_window (reserved)
    0.0, // iframe (reserved)
    0.9, // domain_age
    1.0, // dns_record
    0.0, // web_traffic (reserved)
    0.0, // page_rank (reserved)
    0.0, // google_index (reserved)
    0.0, // links_pointing (reserved)
    1.3, // suspicious_tld
];

/// Weighted-sum classifier over integer-coded rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearModel {
    /// Built-in baseline weights.
    pub fn baseline() -> Self {
        Self {
            weights: BASELINE_WEIGHTS.to_vec(),
            bias: 0.0,
        }
    }

    /// Load weights from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let data = std::fs::read_to_string(path)?;
        let model: Self = serde_json::from_str(&data)?;
        Ok(model)
    }
}

impl Classifier for LinearModel {
    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, row: &[i8]) -> Result<i8, ModelError> {
        if row.len() != self.weights.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.weights.len(),
                got: row.len(),
            });
        }

        let score: f64 = self
            .weights
            .iter()
            .zip(row.iter())
            .map(|(w, &code)| w * f64::from(code))
            .sum::<f64>()
            + self.bias;

        Ok(if score < 0.0 { -1 } else { 1 })
    }
}
