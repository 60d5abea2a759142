//! Pure string sub-rules: every feature that needs no network access.
//!
//! Each rule is independent and total; encodings follow the training
//! convention (-1 legitimate, 1 suspicious, 0 neutral).

use crate::domain::DomainInfo;
use once_cell::sync::Lazy;
use regex::Regex;

static DOTTED_QUAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,3}(\.\d{1,3}){3}").unwrap());

/// URL shortener hosts treated as suspicious.
const SHORTENERS: &[&str] = &[
    "bit.ly",
    "goo.gl",
    "tinyurl.com",
    "ow.ly",
    "is.gd",
    "buff.ly",
    "adf.ly",
];

/// High-risk TLDs for the naive last-label check (feature 30).
///
/// Deliberately a different list and a different extraction strategy than the
/// pre-filter's public-suffix check; the two rules are independent.
const NAIVE_SUSPICIOUS_TLDS: &[&str] = &["xyz", "tk", "ml", "ga", "cf", "gq", "top", "cn", "ru"];

/// A dotted-quad anywhere in the URL.
pub fn has_ip_literal(url: &str) -> i8 {
    if DOTTED_QUAD.is_match(url) {
        1
    } else {
        -1
    }
}

/// Short URLs are safe, long ones suspicious.
pub fn url_length(url: &str) -> i8 {
    match url.len() {
        0..=53 => -1,
        54..=75 => 0,
        _ => 1,
    }
}

/// Known link-shortener host appearing anywhere in the URL.
pub fn known_shortener(url: &str) -> i8 {
    if SHORTENERS.iter().any(|s| url.contains(s)) {
        1
    } else {
        -1
    }
}

/// `@` anywhere in the URL.
pub fn at_symbol(url: &str) -> i8 {
    if url.contains('@') {
        1
    } else {
        -1
    }
}

/// Double slash inside the path (beyond the scheme separator).
pub fn double_slash_path(info: &DomainInfo) -> i8 {
    if info.path.contains("//") {
        1
    } else {
        -1
    }
}

/// Hyphenated domains imitate brands.
pub fn domain_hyphen(info: &DomainInfo) -> i8 {
    if info.host.contains('-') {
        1
    } else {
        -1
    }
}

/// Dot-separated label count of the domain.
pub fn subdomain_count(info: &DomainInfo) -> i8 {
    match info.host.split('.').count() {
        0..=2 => -1,
        3 => 0,
        _ => 1,
    }
}

/// Explicit port outside {80, 443}.
pub fn nonstandard_port(info: &DomainInfo) -> i8 {
    match info.port {
        Some(80) | Some(443) | None => -1,
        Some(_) => 1,
    }
}

/// Literal "https" inside the domain text (not the scheme).
pub fn https_token(info: &DomainInfo) -> i8 {
    if info.host.contains("https") {
        1
    } else {
        -1
    }
}

/// More than five slashes in the path.
pub fn path_depth(info: &DomainInfo) -> i8 {
    if info.path.matches('/').count() > 5 {
        1
    } else {
        -1
    }
}

/// Empty or root path suggests a plain landing page.
pub fn server_form_handling(info: &DomainInfo) -> i8 {
    if info.path.is_empty() || info.path == "/" {
        -1
    } else {
        1
    }
}

/// "mailto:" anywhere in the URL, case-insensitive.
pub fn mailto_present(url: &str) -> i8 {
    if url.to_lowercase().contains("mailto:") {
        1
    } else {
        -1
    }
}

/// "redirect" anywhere in the URL, case-insensitive. Neutral when absent.
pub fn redirect_token(url: &str) -> i8 {
    if url.to_lowercase().contains("redirect") {
        1
    } else {
        0
    }
}

/// Last dot-separated label of the domain against the high-risk list.
pub fn naive_suspicious_tld(info: &DomainInfo) -> i8 {
    let tld = info.host.rsplit('.').next().unwrap_or("");
    if NAIVE_SUSPICIOUS_TLDS.contains(&tld) {
        1
    } else {
        -1
    }
}
