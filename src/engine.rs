//! Verdict assembly: pre-filter, extract, predict.

use crate::config::ScanConfig;
use crate::domain::DomainInfo;
use crate::features::{FeatureExtractor, FeatureVector};
use crate::model::{Classifier, ModelError};
use crate::net::{
    DnsResolver, HttpProber, NameResolver, NetError, Prober, RegistrationLookup, WhoisRegistry,
};
use crate::prefilter::{self, FlagReason};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Final label for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Legitimate,
    Suspicious,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Legitimate => f.write_str("legitimate"),
            Verdict::Suspicious => f.write_str("suspicious"),
        }
    }
}

/// Outcome of one classification.
///
/// A pre-filtered URL carries a reason and no features; a classified URL
/// carries the full vector for transparency and no reason.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FlagReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
}

/// One-stop scanner: owns the extractor and a handle to the classifier.
///
/// Constructed once at startup; everything inside is read-only afterwards,
/// so a single engine serves concurrent classifications.
pub struct ScanEngine {
    config: ScanConfig,
    extractor: FeatureExtractor,
    model: Arc<dyn Classifier>,
}

impl ScanEngine {
    /// Build an engine with the real network collaborators.
    pub fn new(config: ScanConfig, model: Arc<dyn Classifier>) -> Result<Self, NetError> {
        let prober = Arc::new(HttpProber::new(&config)?);
        let resolver = Arc::new(DnsResolver::new(&config));
        let registry = Arc::new(WhoisRegistry::new(&config));
        Ok(Self::with_collaborators(
            config, model, prober, resolver, registry,
        ))
    }

    /// Build an engine with explicit collaborators (used by tests).
    pub fn with_collaborators(
        config: ScanConfig,
        model: Arc<dyn Classifier>,
        prober: Arc<dyn Prober>,
        resolver: Arc<dyn NameResolver>,
        registry: Arc<dyn RegistrationLookup>,
    ) -> Self {
        Self {
            extractor: FeatureExtractor::new(prober, resolver, registry),
            config,
            model,
        }
    }

    /// Classify a URL.
    ///
    /// The pre-filter runs first and short-circuits both extraction and the
    /// model. The only error path is a classifier contract violation;
    /// malformed URLs and network trouble never fail a classification.
    pub async fn classify(&self, url: &str) -> Result<Classification, ModelError> {
        let info = DomainInfo::derive(url);

        if let Some(flag) = prefilter::evaluate(&info, &self.config) {
            debug!("pre-filter flagged {url}: {flag}");
            return Ok(Classification {
                verdict: Verdict::Suspicious,
                reason: Some(flag),
                features: None,
            });
        }

        let features = self.extractor.extract(&info).await;
        let code = self.model.predict(features.as_slice())?;
        let verdict = if code == -1 {
            Verdict::Legitimate
        } else {
            Verdict::Suspicious
        };

        Ok(Classification {
            verdict,
            reason: None,
            features: Some(features),
        })
    }
}
