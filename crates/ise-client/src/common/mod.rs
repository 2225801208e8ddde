//! Common utilities for the ISE API client
//!
//! Provides the authenticated HTTP session shared by all ERS operations.

pub mod links;

use crate::config::IseConfig;
use crate::error::IseError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Authenticated HTTP session against one ISE node
///
/// Every request carries basic auth plus `accept: application/json` and
/// `cache-control: no-cache`. A session is opened per logical operation and
/// its connections are released when it is dropped.
#[derive(Debug)]
pub struct Session {
    client: Client,
}

impl Session {
    /// Open a new session for the given configuration
    pub fn open(config: &IseConfig) -> Result<Self, IseError> {
        if !config.tls_verification() {
            warn!(
                "TLS certificate verification disabled for {}",
                config.base_url()
            );
        }

        let client = Client::builder()
            .default_headers(default_headers(config)?)
            .danger_accept_invalid_certs(!config.tls_verification())
            .timeout(config.get_timeout())
            .build()
            .map_err(IseError::Http)?;

        Ok(Self { client })
    }

    /// GET `url` and decode the JSON body into `T`
    ///
    /// Any non-200 response is turned into [`IseError::Api`] carrying the
    /// status, headers and body; nothing is retried.
    pub async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &Url) -> Result<T, IseError> {
        info!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(IseError::Http)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            debug!("{:?}", headers);
            debug!("{}", body);
            return Err(IseError::Api {
                method: "GET".to_string(),
                url: url.to_string(),
                status,
                headers,
                body,
            });
        }

        let response_text = response.text().await.map_err(IseError::Http)?;
        serde_json::from_str(&response_text).map_err(|e| IseError::Decode {
            url: url.to_string(),
            source: e,
            body_preview: response_text.chars().take(500).collect::<String>(),
        })
    }
}

fn default_headers(config: &IseConfig) -> Result<HeaderMap, IseError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    let credentials = STANDARD.encode(format!("{}:{}", config.username(), config.password()));
    let mut auth = HeaderValue::from_str(&format!("Basic {}", credentials)).map_err(|e| {
        IseError::InvalidConfig(format!("credentials are not a valid header value: {}", e))
    })?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    Ok(headers)
}
