//! Link utilities for the ISE API
//!
//! Builds request URLs and resolves server-provided `href` values.

use crate::config::{IseConfig, LinkPolicy};
use crate::error::IseError;
use reqwest::Url;

/// Build a URL for an API path below the configured base
pub fn build_url(config: &IseConfig, path: &str, query: &[(&str, String)]) -> Result<Url, IseError> {
    let base = config.base_url().as_str().trim_end_matches('/');
    let mut url = Url::parse(&format!("{}{}", base, path))
        .map_err(|e| IseError::InvalidUrl(format!("{}{}: {}", base, path, e)))?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

/// Resolve an `href` returned by ISE and check it against the link policy
///
/// Absolute links are used verbatim; relative ones are joined onto the base URL.
pub fn resolve_link(config: &IseConfig, href: &str) -> Result<Url, IseError> {
    let url = config
        .base_url()
        .join(href)
        .map_err(|e| IseError::InvalidUrl(format!("{}: {}", href, e)))?;

    if config.get_link_policy() == LinkPolicy::SameOrigin
        && url.origin() != config.base_url().origin()
    {
        return Err(IseError::ForeignLink {
            href: href.to_string(),
            base: config.base_url().to_string(),
        });
    }

    Ok(url)
}
