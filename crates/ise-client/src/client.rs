//! ISE ERS API client
//!
//! Implements the network device export against the ERS API:
//! `/ers/config/networkdevice` (get-all, paginated) and each resource's
//! `link.href` (get-by-id).

use crate::common::Session;
use crate::common::links::{build_url, resolve_link};
use crate::config::IseConfig;
use crate::error::IseError;
use crate::ise_trait::IseClientTrait;
use crate::models::*;
use reqwest::Url;
use tracing::{debug, info};

const NETWORK_DEVICE_PATH: &str = "/ers/config/networkdevice";

/// ISE ERS API client
#[derive(Debug, Clone)]
pub struct IseClient {
    config: IseConfig,
}

impl IseClient {
    /// Create a new ISE client
    ///
    /// No connection is made until an operation is called.
    pub fn new(config: IseConfig) -> Self {
        Self { config }
    }

    /// Get the client configuration
    pub fn config(&self) -> &IseConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url().as_str()
    }

    /// Fetch a single listing page
    async fn fetch_page(&self, session: &Session, url: &Url) -> Result<SearchResultPage, IseError> {
        let envelope: SearchResultEnvelope = session.get_json(url).await?;
        Ok(envelope.search_result)
    }

    /// Fetch all network device summaries, following `nextPage` links
    ///
    /// Summaries are returned in page order, then within-page order. A failure
    /// on any page discards everything fetched so far.
    ///
    /// # Returns
    /// * `Ok(Vec<NetworkDeviceSummary>)` - Every summary across all pages
    /// * `Err(IseError)` - If any page request fails or cannot be decoded
    pub async fn list_network_devices(&self) -> Result<Vec<NetworkDeviceSummary>, IseError> {
        let session = Session::open(&self.config)?;
        self.list_with(&session).await
    }

    async fn list_with(&self, session: &Session) -> Result<Vec<NetworkDeviceSummary>, IseError> {
        let mut url = build_url(
            &self.config,
            NETWORK_DEVICE_PATH,
            &[("size", self.config.get_page_size().to_string())],
        )?;
        let mut summaries = Vec::new();
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(session, &url).await?;
            pages += 1;
            debug!(
                "Page {} returned {} network devices (total reported: {:?})",
                pages,
                page.resources.len(),
                page.total
            );
            summaries.extend(page.resources);

            match page.next_page {
                Some(next) => url = resolve_link(&self.config, &next.href)?,
                None => break,
            }
        }

        info!("Listed {} network devices across {} pages", summaries.len(), pages);
        Ok(summaries)
    }

    /// Get the full record for one network device
    ///
    /// # Arguments
    /// * `summary` - Listing entry whose `link.href` is dereferenced
    pub async fn get_network_device(&self, summary: &NetworkDeviceSummary) -> Result<NetworkDevice, IseError> {
        let session = Session::open(&self.config)?;
        self.get_with(&session, summary).await
    }

    async fn get_with(&self, session: &Session, summary: &NetworkDeviceSummary) -> Result<NetworkDevice, IseError> {
        let url = resolve_link(&self.config, &summary.link.href)?;
        let envelope: NetworkDeviceEnvelope = session.get_json(&url).await?;
        Ok(envelope.network_device)
    }

    /// Export the full record of every network device
    ///
    /// This method:
    /// 1. Lists all summaries on one session
    /// 2. Dereferences each summary, in order, on a second session
    ///
    /// The first failing request aborts the export; no partial list is returned.
    pub async fn export_network_devices(&self) -> Result<Vec<NetworkDevice>, IseError> {
        let summaries = self.list_network_devices().await?;

        let session = Session::open(&self.config)?;
        let mut devices = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            debug!("Fetching network device {} ({})", summary.name, summary.id);
            devices.push(self.get_with(&session, summary).await?);
        }

        info!("Exported {} network devices", devices.len());
        Ok(devices)
    }
}

#[async_trait::async_trait]
impl IseClientTrait for IseClient {
    fn base_url(&self) -> &str {
        IseClient::base_url(self)
    }

    async fn list_network_devices(&self) -> Result<Vec<NetworkDeviceSummary>, IseError> {
        IseClient::list_network_devices(self).await
    }

    async fn get_network_device(&self, summary: &NetworkDeviceSummary) -> Result<NetworkDevice, IseError> {
        IseClient::get_network_device(self, summary).await
    }

    async fn export_network_devices(&self) -> Result<Vec<NetworkDevice>, IseError> {
        IseClient::export_network_devices(self).await
    }
}
