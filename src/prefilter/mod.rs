//! Cheap heuristics that can short-circuit classification.
//!
//! Both checks are pure string computations over the derived domain; no
//! network I/O happens here. A flagged URL skips feature extraction and the
//! model entirely.

pub mod entropy;

use crate::config::ScanConfig;
use crate::domain::DomainInfo;
use serde::Serializer;
use std::fmt;

/// Why the pre-filter flagged a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagReason {
    /// The main domain label looks randomly generated.
    GibberishDomain,
    /// The public suffix is on the high-risk list.
    SuspiciousTld,
}

impl FlagReason {
    /// Human-readable reason string surfaced to the caller.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagReason::GibberishDomain => "gibberish domain name",
            FlagReason::SuspiciousTld => "suspicious TLD",
        }
    }
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for FlagReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Evaluate the pre-filter against a derived domain.
///
/// The gibberish check takes priority; only the first firing reason is
/// reported. Returns `None` when neither fires and full extraction should
/// proceed.
pub fn evaluate(info: &DomainInfo, config: &ScanConfig) -> Option<FlagReason> {
    if is_gibberish(info, config) {
        return Some(FlagReason::GibberishDomain);
    }
    if has_flagged_suffix(info, config) {
        return Some(FlagReason::SuspiciousTld);
    }
    None
}

/// Entropy of the first domain label exceeds the configured threshold.
fn is_gibberish(info: &DomainInfo, config: &ScanConfig) -> bool {
    entropy::shannon_entropy(info.main_label()) > config.entropy_threshold
}

/// Public suffix of the host is on the flagged list.
///
/// Uses the Public Suffix List, so multi-part suffixes like `co.uk` resolve
/// as one unit rather than by last-dot splitting.
fn has_flagged_suffix(info: &DomainInfo, config: &ScanConfig) -> bool {
    let Some(suffix) = psl::suffix_str(&info.host) else {
        return false;
    };
    config.flagged_suffixes.iter().any(|s| s == suffix)
}
