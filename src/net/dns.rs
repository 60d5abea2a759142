//! DNS resolution via hickory-resolver.

use super::NameResolver;
use crate::config::ScanConfig;
use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use std::time::Duration;
use tracing::debug;

/// System-independent resolver with a bounded timeout and no retries.
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    pub fn new(config: &ScanConfig) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_millis(config.dns_timeout_ms);
        opts.attempts = 1;

        Self {
            inner: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

#[async_trait]
impl NameResolver for DnsResolver {
    async fn resolves(&self, host: &str) -> bool {
        if host.is_empty() {
            return false;
        }

        match self.inner.lookup_ip(host).await {
            Ok(lookup) => lookup.iter().next().is_some(),
            Err(e) => {
                debug!("dns lookup for {host} failed: {e}");
                false
            }
        }
    }
}
