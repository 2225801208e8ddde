//! Client configuration
//!
//! Everything the client needs is passed in explicitly; nothing here reads the
//! environment.

use crate::error::IseError;
use reqwest::Url;
use std::fmt;
use std::time::Duration;

/// ERS API port on an ISE node
pub const ERS_PORT: u16 = 9060;

/// Largest page size ISE accepts for get-all listings
pub const MAX_PAGE_SIZE: u32 = 100;

/// How server-provided links (`nextPage`, resource `link.href`) are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    /// Only follow links on the same scheme, host and port as the base URL
    #[default]
    SameOrigin,
    /// Follow any link the server returns
    Trusted,
}

/// Connection settings and credentials for one ISE node
#[derive(Clone)]
pub struct IseConfig {
    base_url: Url,
    username: String,
    password: String,
    verify_tls: bool,
    page_size: u32,
    timeout: Duration,
    link_policy: LinkPolicy,
}

impl IseConfig {
    /// Create a configuration for `https://{host}:9060`
    ///
    /// # Arguments
    /// * `host` - IP or hostname of the ISE node, without scheme
    /// * `username` - ERS API user
    /// * `password` - ERS API password
    pub fn for_host(
        host: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, IseError> {
        Self::for_host_and_port(host, ERS_PORT, username, password)
    }

    /// Same as [`IseConfig::for_host`] with a non-default port
    pub fn for_host_and_port(
        host: &str,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, IseError> {
        let host = host.trim();
        if host.is_empty() || host.contains('/') {
            return Err(IseError::InvalidConfig(format!(
                "expected a bare hostname or IP address, got '{}'",
                host
            )));
        }
        // IPv6 literals need brackets in a URL authority
        let authority = if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, port)
        } else {
            format!("{}:{}", host, port)
        };
        Self::with_base_url(&format!("https://{}", authority), username, password)
    }

    /// Create a configuration for an explicit base URL (e.g. `https://ise.example.com:9060`)
    pub fn with_base_url(
        base_url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, IseError> {
        // ISE is picky about `//` in paths, so the base never keeps a trailing slash.
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| IseError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(IseError::InvalidUrl(format!("{} cannot be a base URL", base_url)));
        }

        let username = username.into();
        if username.is_empty() {
            return Err(IseError::InvalidConfig("username must not be empty".to_string()));
        }

        Ok(Self {
            base_url,
            username,
            password: password.into(),
            verify_tls: true,
            page_size: MAX_PAGE_SIZE,
            timeout: Duration::from_secs(30),
            link_policy: LinkPolicy::default(),
        })
    }

    /// Enable or disable TLS certificate verification
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set the listing page size, clamped to `1..=100`
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how server-provided links are followed
    pub fn link_policy(mut self, policy: LinkPolicy) -> Self {
        self.link_policy = policy;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    pub fn tls_verification(&self) -> bool {
        self.verify_tls
    }

    pub fn get_page_size(&self) -> u32 {
        self.page_size
    }

    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn get_link_policy(&self) -> LinkPolicy {
        self.link_policy
    }
}

impl fmt::Debug for IseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IseConfig")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .field("page_size", &self.page_size)
            .field("timeout", &self.timeout)
            .field("link_policy", &self.link_policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_host_uses_ers_port() {
        let config = IseConfig::for_host("ise.example.com", "admin", "secret").unwrap();
        assert_eq!(config.base_url().as_str(), "https://ise.example.com:9060/");
        assert!(config.tls_verification());
        assert_eq!(config.get_page_size(), 100);
        assert_eq!(config.get_link_policy(), LinkPolicy::SameOrigin);
    }

    #[test]
    fn test_for_host_brackets_ipv6() {
        let config = IseConfig::for_host("fd00::10", "admin", "secret").unwrap();
        assert_eq!(config.base_url().host_str(), Some("[fd00::10]"));
        assert_eq!(config.base_url().port(), Some(9060));
    }

    #[test]
    fn test_for_host_rejects_urls() {
        assert!(matches!(
            IseConfig::for_host("https://ise.example.com", "admin", "secret"),
            Err(IseError::InvalidConfig(_))
        ));
        assert!(matches!(
            IseConfig::for_host("  ", "admin", "secret"),
            Err(IseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_username_rejected() {
        assert!(matches!(
            IseConfig::for_host("10.1.1.1", "", "secret"),
            Err(IseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_page_size_is_clamped() {
        let config = IseConfig::for_host("10.1.1.1", "admin", "secret").unwrap();
        assert_eq!(config.clone().page_size(500).get_page_size(), 100);
        assert_eq!(config.clone().page_size(0).get_page_size(), 1);
        assert_eq!(config.page_size(25).get_page_size(), 25);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = IseConfig::for_host("10.1.1.1", "admin", "hunter2").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
