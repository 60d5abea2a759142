//! Minimal WHOIS client over TCP port 43.
//!
//! Queries IANA for the authoritative server of the domain's TLD, follows the
//! single `refer:` hop, and scans the response for registrar creation and
//! expiry dates. One shot, one overall timeout, no retries.

use super::{NetError, RegistrationLookup, RegistrationRecord};
use crate::config::ScanConfig;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const IANA_HOST: &str = "whois.iana.org";
const WHOIS_PORT: u16 = 43;

/// Keys that introduce a creation date, lower-cased.
const CREATION_KEYS: &[&str] = &["creation date", "created", "registered on", "registration time"];

/// Keys that introduce an expiration date, lower-cased.
const EXPIRY_KEYS: &[&str] = &[
    "registry expiry date",
    "registrar registration expiration date",
    "expiration date",
    "expiry date",
    "paid-till",
    "expires",
];

/// WHOIS protocol client.
pub struct WhoisClient {
    timeout: Duration,
}

impl WhoisClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Fetch the registration record for a domain.
    ///
    /// The whole referral chain shares one timeout budget.
    pub async fn fetch(&self, domain: &str) -> Result<RegistrationRecord, NetError> {
        tokio::time::timeout(self.timeout, self.fetch_inner(domain))
            .await
            .map_err(|_| NetError::Timeout(self.timeout))?
    }

    async fn fetch_inner(&self, domain: &str) -> Result<RegistrationRecord, NetError> {
        let iana_resp = query(IANA_HOST, domain).await?;
        let mut record = parse_record(&iana_resp);

        if record.is_empty() {
            if let Some(server) = parse_referral(&iana_resp) {
                let resp = query(&server, domain).await?;
                record = parse_record(&resp);
            }
        }

        Ok(record)
    }
}

/// Send one query to a WHOIS server and read the full response.
async fn query(server: &str, q: &str) -> Result<String, NetError> {
    let mut stream = TcpStream::connect((server, WHOIS_PORT)).await?;
    stream.write_all(q.as_bytes()).await?;
    stream.write_all(b"\r\n").await?;

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Extract the referred WHOIS server from an IANA response.
fn parse_referral(resp: &str) -> Option<String> {
    for line in resp.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        if key == "refer" || key == "whois" {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Scan a WHOIS response for creation and expiry dates.
///
/// Registrars disagree on key names and date formats; the first parseable
/// value per field wins. Unrecognized responses yield an empty record.
fn parse_record(resp: &str) -> RegistrationRecord {
    let mut record = RegistrationRecord::default();

    for line in resp.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();

        if record.created.is_none() && CREATION_KEYS.contains(&key.as_str()) {
            record.created = parse_date(value);
        }
        if record.expires.is_none() && EXPIRY_KEYS.contains(&key.as_str()) {
            record.expires = parse_date(value);
        }
    }

    record
}

/// Parse the date formats seen in the wild across registries.
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%d-%b-%Y", "%Y.%m.%d", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

/// Registration lookup backed by the WHOIS client. Failures are silent.
pub struct WhoisRegistry {
    client: WhoisClient,
}

impl WhoisRegistry {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            client: WhoisClient::new(Duration::from_millis(config.whois_timeout_ms)),
        }
    }
}

#[async_trait]
impl RegistrationLookup for WhoisRegistry {
    async fn lookup(&self, domain: &str) -> Option<RegistrationRecord> {
        if domain.is_empty() {
            return None;
        }

        match self.client.fetch(domain).await {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("whois lookup for {domain} failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_referral() {
        let resp = "\
% IANA WHOIS server
refer:        whois.verisign-grs.com

domain:       COM
";
        assert_eq!(
            parse_referral(resp),
            Some("whois.verisign-grs.com".to_string())
        );
    }

    #[test]
    fn test_parse_verisign_style_record() {
        let resp = "\
   Domain Name: EXAMPLE.COM
   Creation Date: 1995-08-14T04:00:00Z
   Registry Expiry Date: 2026-08-13T04:00:00Z
   Registrar: RESERVED-Internet Assigned Numbers Authority
";
        let record = parse_record(resp);
        assert_eq!(record.created.unwrap().year(), 1995);
        assert_eq!(record.expires.unwrap().year(), 2026);
    }

    #[test]
    fn test_parse_ru_style_record() {
        let resp = "\
domain:         EXAMPLE.RU
created:        2004-12-02T21:00:00Z
paid-till:      2025-12-02T21:00:00Z
";
        let record = parse_record(resp);
        assert_eq!(record.created.unwrap().year(), 2004);
        assert_eq!(record.expires.unwrap().year(), 2025);
    }

    #[test]
    fn test_parse_date_only_formats() {
        assert_eq!(parse_date("2015-03-20").unwrap().year(), 2015);
        assert_eq!(parse_date("20-Mar-2015").unwrap().year(), 2015);
        assert_eq!(parse_date("2015.03.20").unwrap().year(), 2015);
    }

    #[test]
    fn test_unrecognized_response_is_empty() {
        let record = parse_record("No match for domain \"NOPE.COM\".\n");
        assert!(record.is_empty());
        assert!(record.created.is_none());
    }

    #[test]
    fn test_first_parseable_value_wins() {
        let resp = "\
Creation Date: 2001-01-01T00:00:00Z
Creation Date: 2011-01-01T00:00:00Z
";
        let record = parse_record(resp);
        assert_eq!(record.created.unwrap().year(), 2001);
    }
}
