//! Derive normalized domain components from a raw URL string.
//!
//! The derivation runs once per classification and the result is shared by
//! the pre-filter and the feature extractor, so both always see the same
//! domain.

use url::Url;

/// Normalized, request-scoped view of a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainInfo {
    /// The normalized URL (scheme prefixed when the input had none).
    pub url: String,
    /// URL scheme, empty when the URL failed to parse.
    pub scheme: String,
    /// Lower-cased host with a leading `www.` stripped.
    pub host: String,
    /// Explicit port, if one appears in the URL.
    pub port: Option<u16>,
    /// URL path component.
    pub path: String,
}

impl DomainInfo {
    /// Derive domain components from a raw URL string.
    ///
    /// Inputs without a scheme are prefixed with `http://` before parsing.
    /// Malformed URLs never fail: unparseable input yields empty components.
    pub fn derive(raw: &str) -> Self {
        let trimmed = raw.trim();
        let url = if trimmed.starts_with("http") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };

        let Ok(parsed) = Url::parse(&url) else {
            return Self {
                url,
                ..Default::default()
            };
        };

        let mut host = parsed.host_str().unwrap_or("").to_lowercase();
        if let Some(stripped) = host.strip_prefix("www.") {
            host = stripped.to_string();
        }

        Self {
            scheme: parsed.scheme().to_string(),
            host,
            port: parsed.port(),
            path: parsed.path().to_string(),
            url,
        }
    }

    /// Host plus explicit port, suitable for building probe URLs.
    pub fn probe_host(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{port}", self.host),
            None => self.host.clone(),
        }
    }

    /// First dot-separated label of the host (the "main" part of the domain).
    pub fn main_label(&self) -> &str {
        self.host.split('.').next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_adds_scheme() {
        let info = DomainInfo::derive("example.com/login");
        assert_eq!(info.url, "http://example.com/login");
        assert_eq!(info.scheme, "http");
        assert_eq!(info.host, "example.com");
        assert_eq!(info.path, "/login");
    }

    #[test]
    fn test_derive_keeps_existing_scheme() {
        let info = DomainInfo::derive("https://Example.COM/a/b");
        assert_eq!(info.url, "https://Example.COM/a/b");
        assert_eq!(info.scheme, "https");
        assert_eq!(info.host, "example.com");
    }

    #[test]
    fn test_derive_strips_www() {
        let info = DomainInfo::derive("http://www.example.co.uk/");
        assert_eq!(info.host, "example.co.uk");
    }

    #[test]
    fn test_derive_explicit_port() {
        let info = DomainInfo::derive("http://example.com:8080/admin");
        assert_eq!(info.port, Some(8080));
        assert_eq!(info.probe_host(), "example.com:8080");

        // Default ports are elided by the parser.
        let info = DomainInfo::derive("http://example.com:80/");
        assert_eq!(info.port, None);
        assert_eq!(info.probe_host(), "example.com");
    }

    #[test]
    fn test_derive_unparseable_is_empty() {
        let info = DomainInfo::derive("http://");
        assert_eq!(info.host, "");
        assert_eq!(info.scheme, "");
        assert_eq!(info.path, "");
    }

    #[test]
    fn test_main_label() {
        assert_eq!(DomainInfo::derive("http://login.bank.com").main_label(), "login");
        assert_eq!(DomainInfo::derive("http://bit.ly/x").main_label(), "bit");
    }

    #[test]
    fn test_derive_ip_host() {
        let info = DomainInfo::derive("http://192.168.1.1/login");
        assert_eq!(info.host, "192.168.1.1");
        assert_eq!(info.path, "/login");
    }
}
