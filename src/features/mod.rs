//! Feature extraction: map a derived domain into the 30-column integer
//! vector the classifier was trained on.
//!
//! Column order is fixed by training and is not renegotiable. Every code is
//! in {-1, 0, 1}: -1 supports legitimate, 1 supports suspicious, 0 is
//! neutral/unknown. Network sub-rules degrade to their documented fallback on
//! any failure; extraction itself never fails.

pub mod lexical;
pub mod network;
pub mod registration;

use crate::domain::DomainInfo;
use crate::net::{NameResolver, Prober, RegistrationLookup};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Number of feature columns.
pub const FEATURE_DIM: usize = 30;

// Column indices. Positions 13-14, 19-22, and 25-28 are reserved signals
// (page-content and reputation checks) pinned to 0 at extraction time; the
// model was trained with those columns present.
pub const FEAT_HAS_IP: usize = 0;
pub const FEAT_URL_LENGTH: usize = 1;
pub const FEAT_SHORTENER: usize = 2;
pub const FEAT_AT_SYMBOL: usize = 3;
pub const FEAT_DOUBLE_SLASH: usize = 4;
pub const FEAT_DOMAIN_HYPHEN: usize = 5;
pub const FEAT_SUBDOMAINS: usize = 6;
pub const FEAT_SSL_STATE: usize = 7;
pub const FEAT_REGISTRATION_LEN: usize = 8;
pub const FEAT_FAVICON: usize = 9;
pub const FEAT_PORT: usize = 10;
pub const FEAT_HTTPS_TOKEN: usize = 11;
pub const FEAT_PATH_DEPTH: usize = 12;
pub const FEAT_SERVER_FORM: usize = 15;
pub const FEAT_MAILTO: usize = 16;
pub const FEAT_ABNORMAL_URL: usize = 17;
pub const FEAT_REDIRECT: usize = 18;
pub const FEAT_DOMAIN_AGE: usize = 23;
pub const FEAT_DNS_RECORD: usize = 24;
pub const FEAT_SUSPICIOUS_TLD: usize = 29;

/// Column names in training order, for transparency output.
pub const FEATURE_NAMES: [&str; FEATURE_DIM] = [
    "has_ip_literal",
    "url_length",
    "known_shortener",
    "at_symbol",
    "double_slash_path",
    "domain_hyphen",
    "subdomain_count",
    "ssl_final_state",
    "registration_length",
    "favicon_reachable",
    "nonstandard_port",
    "https_token",
    "path_depth",
    "anchor_url",
    "links_in_tags",
    "server_form_handling",
    "mailto_present",
    "abnormal_url",
    "redirect_token",
    "on_mouseover",
    "right_click",
    "popup_window",
    "iframe",
    "domain_age",
    "dns_record",
    "web_traffic",
    "page_rank",
    "google_index",
    "links_pointing",
    "suspicious_tld",
];

/// Ordered 30-column feature vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector(pub [i8; FEATURE_DIM]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[i8] {
        &self.0
    }

    /// Iterate (name, code) pairs in column order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, i8)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

/// Extracts feature vectors using pluggable network collaborators.
pub struct FeatureExtractor {
    prober: Arc<dyn Prober>,
    resolver: Arc<dyn NameResolver>,
    registry: Arc<dyn RegistrationLookup>,
}

impl FeatureExtractor {
    pub fn new(
        prober: Arc<dyn Prober>,
        resolver: Arc<dyn NameResolver>,
        registry: Arc<dyn RegistrationLookup>,
    ) -> Self {
        Self {
            prober,
            resolver,
            registry,
        }
    }

    /// Extract the 30-column vector for a derived domain.
    ///
    /// The registration record is fetched once and shared by the sub-rules
    /// that need it. Independent network sub-rules run concurrently so total
    /// latency is bounded by the slowest timeout, not their sum.
    pub async fn extract(&self, info: &DomainInfo) -> FeatureVector {
        let mut v = [0i8; FEATURE_DIM];

        v[FEAT_HAS_IP] = lexical::has_ip_literal(&info.url);
        v[FEAT_URL_LENGTH] = lexical::url_length(&info.url);
        v[FEAT_SHORTENER] = lexical::known_shortener(&info.url);
        v[FEAT_AT_SYMBOL] = lexical::at_symbol(&info.url);
        v[FEAT_DOUBLE_SLASH] = lexical::double_slash_path(info);
        v[FEAT_DOMAIN_HYPHEN] = lexical::domain_hyphen(info);
        v[FEAT_SUBDOMAINS] = lexical::subdomain_count(info);
        v[FEAT_PORT] = lexical::nonstandard_port(info);
        v[FEAT_HTTPS_TOKEN] = lexical::https_token(info);
        v[FEAT_PATH_DEPTH] = lexical::path_depth(info);
        v[FEAT_SERVER_FORM] = lexical::server_form_handling(info);
        v[FEAT_MAILTO] = lexical::mailto_present(&info.url);
        v[FEAT_REDIRECT] = lexical::redirect_token(&info.url);
        v[FEAT_SUSPICIOUS_TLD] = lexical::naive_suspicious_tld(info);

        // DNS is consulted at two call sites by design; the columns are
        // distinct in the trained model.
        let (record, ssl, favicon, abnormal_up, dns_up) = tokio::join!(
            self.registry.lookup(&info.host),
            network::ssl_final_state(info, self.prober.as_ref()),
            network::favicon_reachable(info, self.prober.as_ref()),
            self.resolver.resolves(&info.host),
            self.resolver.resolves(&info.host),
        );

        v[FEAT_SSL_STATE] = ssl.unwrap_or(0);
        v[FEAT_FAVICON] = favicon.unwrap_or(0);
        v[FEAT_ABNORMAL_URL] = network::abnormal_url(abnormal_up);
        v[FEAT_DNS_RECORD] = network::dns_record(dns_up);
        v[FEAT_REGISTRATION_LEN] = registration::registration_length(record.as_ref());
        v[FEAT_DOMAIN_AGE] = registration::domain_age(record.as_ref(), Utc::now());

        FeatureVector(v)
    }
}
