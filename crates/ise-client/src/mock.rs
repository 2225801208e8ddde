//! Mock IseClient for unit testing
//!
//! This module provides a mock implementation of IseClientTrait that can be used
//! in unit tests without requiring a running ISE node.

use crate::error::IseError;
use crate::ise_trait::IseClientTrait;
use crate::models::*;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock IseClient for testing
///
/// Stores network devices in memory, keyed by their `link.href`.
#[derive(Debug, Clone)]
pub struct MockIseClient {
    base_url: String,
    summaries: Arc<Mutex<Vec<NetworkDeviceSummary>>>,
    devices: Arc<Mutex<HashMap<String, NetworkDevice>>>,
    fail_with: Arc<Mutex<Option<StatusCode>>>,
    detail_requests: Arc<Mutex<usize>>,
}

impl MockIseClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            summaries: Arc::new(Mutex::new(Vec::new())),
            devices: Arc::new(Mutex::new(HashMap::new())),
            fail_with: Arc::new(Mutex::new(None)),
            detail_requests: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a device with the given id, name and `(ipaddress, mask)` pairs
    pub fn add_device(&self, id: &str, name: &str, ips: &[(&str, u8)]) {
        let href = format!("{}/ers/config/networkdevice/{}", self.base_url, id);
        let summary = NetworkDeviceSummary {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            link: Link {
                rel: Some("self".to_string()),
                href: href.clone(),
                link_type: Some("application/json".to_string()),
            },
        };
        let device = NetworkDevice {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            description: None,
            profile_name: Some("Cisco".to_string()),
            coa_port: Some(1700),
            ip_list: ips
                .iter()
                .map(|(ip, mask)| IpMask {
                    ipaddress: (*ip).to_string(),
                    mask: *mask,
                })
                .collect(),
            group_list: Vec::new(),
            link: Some(summary.link.clone()),
        };

        self.summaries.lock().unwrap().push(summary);
        self.devices.lock().unwrap().insert(href, device);
    }

    /// Make every subsequent call fail with an API error carrying `status`
    pub fn fail_with(&self, status: StatusCode) {
        *self.fail_with.lock().unwrap() = Some(status);
    }

    /// Number of detail dereferences served so far
    pub fn detail_requests(&self) -> usize {
        *self.detail_requests.lock().unwrap()
    }

    fn check_failure(&self, url: &str) -> Result<(), IseError> {
        match *self.fail_with.lock().unwrap() {
            Some(status) => Err(IseError::Api {
                method: "GET".to_string(),
                url: url.to_string(),
                status,
                headers: HeaderMap::new(),
                body: String::new(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl IseClientTrait for MockIseClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_network_devices(&self) -> Result<Vec<NetworkDeviceSummary>, IseError> {
        self.check_failure(&format!("{}/ers/config/networkdevice", self.base_url))?;
        Ok(self.summaries.lock().unwrap().clone())
    }

    async fn get_network_device(&self, summary: &NetworkDeviceSummary) -> Result<NetworkDevice, IseError> {
        self.check_failure(&summary.link.href)?;
        *self.detail_requests.lock().unwrap() += 1;
        self.devices
            .lock()
            .unwrap()
            .get(&summary.link.href)
            .cloned()
            .ok_or_else(|| IseError::Api {
                method: "GET".to_string(),
                url: summary.link.href.clone(),
                status: StatusCode::NOT_FOUND,
                headers: HeaderMap::new(),
                body: String::new(),
            })
    }

    async fn export_network_devices(&self) -> Result<Vec<NetworkDevice>, IseError> {
        let summaries = self.list_network_devices().await?;
        let mut devices = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            devices.push(self.get_network_device(summary).await?);
        }
        Ok(devices)
    }
}
