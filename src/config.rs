//! Scanner configuration: probe timeouts, entropy threshold, TLD lists.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunable parameters for the pre-filter and the network-backed sub-rules.
///
/// The defaults match the values the classifier was calibrated against;
/// override them from a JSON file when experimenting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Entropy threshold above which the main domain label counts as gibberish.
    pub entropy_threshold: f64,
    /// Timeout for the HTTPS fallback probe, in milliseconds.
    pub https_probe_timeout_ms: u64,
    /// Per-request timeout for favicon probes, in milliseconds.
    pub favicon_timeout_ms: u64,
    /// Overall timeout for the registration (WHOIS) lookup, in milliseconds.
    pub whois_timeout_ms: u64,
    /// DNS resolution timeout, in milliseconds.
    pub dns_timeout_ms: u64,
    /// Public suffixes the pre-filter flags outright.
    pub flagged_suffixes: Vec<String>,
    /// Optional path to a JSON model weights file.
    pub model_path: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            entropy_threshold: 3.5,
            https_probe_timeout_ms: 5_000,
            favicon_timeout_ms: 3_000,
            whois_timeout_ms: 5_000,
            dns_timeout_ms: 5_000,
            flagged_suffixes: ["xyz", "zip", "buzz", "tk", "ml", "ga", "cf", "gq"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            model_path: None,
        }
    }
}

impl ScanConfig {
    /// Load configuration from an explicit path, the default location under
    /// the user's home directory, or built-in defaults, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            return serde_json::from_str(&data)
                .with_context(|| format!("malformed config: {}", path.display()));
        }

        let default_path = Self::default_path();
        if let Some(path) = default_path.filter(|p| p.exists()) {
            let data = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            return serde_json::from_str(&data)
                .with_context(|| format!("malformed config: {}", path.display()));
        }

        Ok(Self::default())
    }

    /// Default config location: `~/.phishscope/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".phishscope").join("config.json"))
    }
}
