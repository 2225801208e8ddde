//! ISE client errors

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when interacting with the ISE ERS API
#[derive(Debug, Error)]
pub enum IseError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// ISE returned a non-success status. The raw response is kept for diagnosis.
    #[error("ISE API error: {method} {url} returned {status} - {body}")]
    Api {
        /// Request method
        method: String,
        /// Requested URL
        url: String,
        /// Response status
        status: StatusCode,
        /// Response headers
        headers: HeaderMap,
        /// Response body as text
        body: String,
    },

    /// The response body did not match the expected JSON shape
    #[error("error decoding response from {url}: {source} - Response (first 500 chars): {body_preview}")]
    Decode {
        /// Requested URL
        url: String,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
        /// Leading part of the body
        body_preview: String,
    },

    /// A server-provided link points outside the configured ISE node
    #[error("refusing to follow link {href}: origin differs from {base}")]
    ForeignLink {
        /// The rejected link
        href: String,
        /// The configured base URL
        base: String,
    },

    /// A URL could not be parsed or resolved
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl IseError {
    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            IseError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
