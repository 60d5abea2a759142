//! End-to-end classification flow against stub collaborators.

use async_trait::async_trait;
use chrono::TimeZone;
use phishscope::features::{
    FEAT_ABNORMAL_URL, FEAT_DNS_RECORD, FEAT_DOMAIN_AGE, FEAT_FAVICON, FEAT_HAS_IP,
    FEAT_PATH_DEPTH, FEAT_REGISTRATION_LEN, FEAT_SHORTENER, FEAT_SSL_STATE, FEAT_SUBDOMAINS,
};
use phishscope::model::{Classifier, LinearModel, ModelError};
use phishscope::net::{NameResolver, NetError, Prober, RegistrationLookup, RegistrationRecord};
use phishscope::{ScanConfig, ScanEngine, Verdict, FEATURE_DIM};
use std::sync::Arc;
use std::time::Duration;

/// Everything reachable: probes succeed, DNS resolves, WHOIS has a
/// long-lived registration.
struct HealthyNetwork;

#[async_trait]
impl Prober for HealthyNetwork {
    async fn https_ok(&self, _host: &str) -> Result<bool, NetError> {
        Ok(true)
    }
    async fn favicon_ok(&self, _host: &str) -> Result<bool, NetError> {
        Ok(true)
    }
}

#[async_trait]
impl NameResolver for HealthyNetwork {
    async fn resolves(&self, _host: &str) -> bool {
        true
    }
}

#[async_trait]
impl RegistrationLookup for HealthyNetwork {
    async fn lookup(&self, _domain: &str) -> Option<RegistrationRecord> {
        Some(RegistrationRecord {
            created: Some(chrono::Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()),
            expires: Some(chrono::Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
        })
    }
}

/// Everything down: probes error, DNS never resolves, WHOIS is silent.
struct DeadNetwork;

#[async_trait]
impl Prober for DeadNetwork {
    async fn https_ok(&self, _host: &str) -> Result<bool, NetError> {
        Err(NetError::Timeout(Duration::from_secs(5)))
    }
    async fn favicon_ok(&self, _host: &str) -> Result<bool, NetError> {
        Err(NetError::Timeout(Duration::from_secs(3)))
    }
}

#[async_trait]
impl NameResolver for DeadNetwork {
    async fn resolves(&self, _host: &str) -> bool {
        false
    }
}

#[async_trait]
impl RegistrationLookup for DeadNetwork {
    async fn lookup(&self, _domain: &str) -> Option<RegistrationRecord> {
        None
    }
}

/// Panics on any use; proves the pre-filter never touches the network.
struct UntouchableNetwork;

#[async_trait]
impl Prober for UntouchableNetwork {
    async fn https_ok(&self, _host: &str) -> Result<bool, NetError> {
        panic!("prober must not be called for pre-filtered urls");
    }
    async fn favicon_ok(&self, _host: &str) -> Result<bool, NetError> {
        panic!("prober must not be called for pre-filtered urls");
    }
}

#[async_trait]
impl NameResolver for UntouchableNetwork {
    async fn resolves(&self, _host: &str) -> bool {
        panic!("resolver must not be called for pre-filtered urls");
    }
}

#[async_trait]
impl RegistrationLookup for UntouchableNetwork {
    async fn lookup(&self, _domain: &str) -> Option<RegistrationRecord> {
        panic!("whois must not be called for pre-filtered urls");
    }
}

fn engine_with<N>(net: N) -> ScanEngine
where
    N: Prober + NameResolver + RegistrationLookup + 'static,
{
    let net = Arc::new(net);
    ScanEngine::with_collaborators(
        ScanConfig::default(),
        Arc::new(LinearModel::baseline()),
        net.clone(),
        net.clone(),
        net,
    )
}

#[tokio::test]
async fn gibberish_domain_short_circuits_without_network() {
    let engine = engine_with(UntouchableNetwork);
    // 16 distinct characters in the main label: entropy 4.0 > 3.5.
    let result = engine
        .classify("http://a8f3k9x2mzq7w4tv.com/login")
        .await
        .unwrap();

    assert_eq!(result.verdict, Verdict::Suspicious);
    assert_eq!(result.reason.unwrap().as_str(), "gibberish domain name");
    assert!(result.features.is_none());
}

#[tokio::test]
async fn flagged_suffix_short_circuits() {
    let engine = engine_with(UntouchableNetwork);
    let result = engine.classify("http://example.zip/download").await.unwrap();

    assert_eq!(result.verdict, Verdict::Suspicious);
    assert_eq!(result.reason.unwrap().as_str(), "suspicious TLD");
    assert!(result.features.is_none());
}

#[tokio::test]
async fn shortener_url_feature_codes() {
    let engine = engine_with(HealthyNetwork);
    let result = engine.classify("http://bit.ly/abc123").await.unwrap();
    let features = result.features.expect("classified urls carry the vector");

    assert_eq!(features.as_slice().len(), FEATURE_DIM);
    assert_eq!(features.as_slice()[FEAT_SHORTENER], 1);
    // Two labels in bit.ly: no subdomains.
    assert_eq!(features.as_slice()[FEAT_SUBDOMAINS], -1);
    assert!(features.as_slice().iter().all(|c| (-1..=1).contains(c)));
}

#[tokio::test]
async fn deep_path_and_ip_literal_codes() {
    let engine = engine_with(HealthyNetwork);

    let result = engine
        .classify("https://example.com/a/b/c/d/e/f")
        .await
        .unwrap();
    let features = result.features.unwrap();
    assert_eq!(features.as_slice()[FEAT_PATH_DEPTH], 1);
    assert_eq!(features.as_slice()[FEAT_SSL_STATE], -1);

    let result = engine.classify("http://192.168.1.1/login").await.unwrap();
    let features = result.features.unwrap();
    assert_eq!(features.as_slice()[FEAT_HAS_IP], 1);
}

#[tokio::test]
async fn extraction_is_deterministic_under_fixed_network() {
    let engine = engine_with(HealthyNetwork);
    let url = "http://login.example-bank.com/signin?next=/account";

    let first = engine.classify(url).await.unwrap().features.unwrap();
    let second = engine.classify(url).await.unwrap().features.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn network_failures_degrade_to_documented_fallbacks() {
    let engine = engine_with(DeadNetwork);
    let result = engine.classify("http://example.com/login").await.unwrap();
    let features = result.features.unwrap();
    let codes = features.as_slice();

    // Probe-backed rules fall back to neutral.
    assert_eq!(codes[FEAT_SSL_STATE], 0);
    assert_eq!(codes[FEAT_FAVICON], 0);
    // Resolution failure is itself the suspicious signal.
    assert_eq!(codes[FEAT_ABNORMAL_URL], 1);
    assert_eq!(codes[FEAT_DNS_RECORD], 1);
    // Missing registration data is neutral.
    assert_eq!(codes[FEAT_REGISTRATION_LEN], 0);
    assert_eq!(codes[FEAT_DOMAIN_AGE], 0);
    // Lexical rules are unaffected.
    assert_eq!(codes[FEAT_HAS_IP], -1);
}

#[tokio::test]
async fn dimension_mismatch_is_fatal() {
    let net = Arc::new(HealthyNetwork);
    let narrow_model = Arc::new(LinearModel {
        weights: vec![1.0; 10],
        bias: 0.0,
    });
    let engine = ScanEngine::with_collaborators(
        ScanConfig::default(),
        narrow_model,
        net.clone(),
        net.clone(),
        net,
    );

    let err = engine.classify("http://example.com/").await.unwrap_err();
    assert!(matches!(
        err,
        ModelError::DimensionMismatch {
            expected: 10,
            got: 30
        }
    ));
}

#[tokio::test]
async fn verdict_mapping_follows_model_code() {
    // A model that always answers -1 yields Legitimate; anything else
    // yields Suspicious.
    struct Fixed(i8);
    impl Classifier for Fixed {
        fn n_features(&self) -> usize {
            FEATURE_DIM
        }
        fn predict(&self, _row: &[i8]) -> Result<i8, ModelError> {
            Ok(self.0)
        }
    }

    for (code, verdict) in [(-1, Verdict::Legitimate), (1, Verdict::Suspicious)] {
        let net = Arc::new(HealthyNetwork);
        let engine = ScanEngine::with_collaborators(
            ScanConfig::default(),
            Arc::new(Fixed(code)),
            net.clone(),
            net.clone(),
            net,
        );
        let result = engine.classify("http://example.com/").await.unwrap();
        assert_eq!(result.verdict, verdict);
        assert!(result.reason.is_none());
    }
}
