//! Network collaborators: DNS resolution, HTTP probes, and the registration
//! (WHOIS) lookup.
//!
//! Each collaborator sits behind a trait so the extractor can be exercised
//! with stubs. Real implementations bound every call with a timeout and never
//! retry.

pub mod dns;
pub mod probe;
pub mod whois;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub use dns::DnsResolver;
pub use probe::HttpProber;
pub use whois::{WhoisClient, WhoisRegistry};

/// A failed network operation. Sub-rules recover from these locally; they are
/// never surfaced to the caller of `classify`.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Probes a host over HTTP(S).
#[async_trait]
pub trait Prober: Send + Sync {
    /// GET `https://{host}/` following redirects. True when the final URL is
    /// https and the status is 200.
    async fn https_ok(&self, host: &str) -> Result<bool, NetError>;

    /// GET `{scheme}://{host}/favicon.ico` for https then http. True on any
    /// 200 response.
    async fn favicon_ok(&self, host: &str) -> Result<bool, NetError>;
}

/// Resolves hostnames to addresses.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Whether the host resolves to at least one address. Lookup failures of
    /// any kind count as not resolving.
    async fn resolves(&self, host: &str) -> bool;
}

/// Registrar creation/expiration dates for a domain.
///
/// Either date may be missing; dependent sub-rules degrade to neutral.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationRecord {
    pub created: Option<DateTime<Utc>>,
    pub expires: Option<DateTime<Utc>>,
}

impl RegistrationRecord {
    pub fn is_empty(&self) -> bool {
        self.created.is_none() && self.expires.is_none()
    }
}

/// Looks up domain registration data, best-effort.
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    /// Fetch the registration record for a domain. Failures are silent and
    /// yield `None`.
    async fn lookup(&self, domain: &str) -> Option<RegistrationRecord>;
}
