//! Network-backed sub-rules.
//!
//! Probe-backed rules return `Result<i8, NetError>` so the fallback to the
//! neutral code is explicit (`.unwrap_or(0)`) at the call site in the
//! extractor, and testable on its own.

use crate::domain::DomainInfo;
use crate::net::{NetError, Prober};

/// SSL final state (feature 8).
///
/// An https URL is safe outright. For anything else, probe
/// `https://{host}/` with redirects: safe only when the final response is 200
/// over https, neutral otherwise.
pub async fn ssl_final_state(info: &DomainInfo, prober: &dyn Prober) -> Result<i8, NetError> {
    if info.scheme == "https" {
        return Ok(-1);
    }

    let ok = prober.https_ok(&info.probe_host()).await?;
    Ok(if ok { -1 } else { 0 })
}

/// Favicon reachability (feature 10). A served favicon over either scheme is
/// a weak legitimacy signal; absence is neutral.
pub async fn favicon_reachable(info: &DomainInfo, prober: &dyn Prober) -> Result<i8, NetError> {
    let ok = prober.favicon_ok(&info.probe_host()).await?;
    Ok(if ok { -1 } else { 0 })
}

/// Abnormal URL (feature 18): a domain that resolves is safe.
pub fn abnormal_url(resolved: bool) -> i8 {
    if resolved {
        -1
    } else {
        1
    }
}

/// DNS record existence (feature 25). Same mapping as [`abnormal_url`]; the
/// two positions are distinct columns in the trained model and stay separate.
pub fn dns_record(resolved: bool) -> i8 {
    if resolved {
        -1
    } else {
        1
    }
}
