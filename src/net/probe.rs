//! HTTPS and favicon probes over reqwest.

use super::{NetError, Prober};
use crate::config::ScanConfig;
use async_trait::async_trait;
use reqwest::redirect;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Prober backed by a shared reqwest client.
///
/// The client timeout covers the HTTPS probe; favicon requests carry their
/// own shorter per-request timeout.
pub struct HttpProber {
    client: reqwest::Client,
    favicon_timeout: Duration,
}

impl HttpProber {
    pub fn new(config: &ScanConfig) -> Result<Self, NetError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.https_probe_timeout_ms))
            .redirect(redirect::Policy::limited(10))
            .user_agent(concat!("phishscope/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            favicon_timeout: Duration::from_millis(config.favicon_timeout_ms),
        })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn https_ok(&self, host: &str) -> Result<bool, NetError> {
        let resp = self.client.get(format!("https://{host}/")).send().await?;
        Ok(resp.url().scheme() == "https" && resp.status() == StatusCode::OK)
    }

    async fn favicon_ok(&self, host: &str) -> Result<bool, NetError> {
        let mut last_err = None;
        let mut completed = false;

        for scheme in ["https", "http"] {
            let url = format!("{scheme}://{host}/favicon.ico");
            match self
                .client
                .get(&url)
                .timeout(self.favicon_timeout)
                .send()
                .await
            {
                Ok(resp) if resp.status() == StatusCode::OK => return Ok(true),
                Ok(resp) => {
                    debug!("favicon probe {url}: status {}", resp.status());
                    completed = true;
                }
                Err(e) => {
                    debug!("favicon probe {url} failed: {e}");
                    last_err = Some(e);
                }
            }
        }

        // A completed non-200 response is a definitive "no favicon"; an error
        // is reported only when every attempt failed outright.
        match (completed, last_err) {
            (false, Some(e)) => Err(e.into()),
            _ => Ok(false),
        }
    }
}
