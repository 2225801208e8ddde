//! ISE ERS API models
//!
//! These models match the JSON representations of the ERS network device resource.
//! See: https://developer.cisco.com/docs/identity-services-engine/ (network-device get-all / get-by-id)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Link object attached to ERS resources and pagination markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    pub href: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

/// Network device reference as returned by the get-all listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDeviceSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub link: Link,
}

/// One page of a get-all listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    pub resources: Vec<NetworkDeviceSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<Link>,
}

/// ERS response wrapper for listings (`{"SearchResult": {...}}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultEnvelope {
    #[serde(rename = "SearchResult")]
    pub search_result: SearchResultPage,
}

/// IP address and mask length assigned to a network device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpMask {
    pub ipaddress: String,
    pub mask: u8,
}

impl fmt::Display for IpMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ipaddress, self.mask)
    }
}

/// Full network device record as returned by get-by-id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDevice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "profileName", default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(rename = "coaPort", default, skip_serializing_if = "Option::is_none")]
    pub coa_port: Option<u32>,
    #[serde(rename = "NetworkDeviceIPList")]
    pub ip_list: Vec<IpMask>,
    #[serde(rename = "NetworkDeviceGroupList", default, skip_serializing_if = "Vec::is_empty")]
    pub group_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl NetworkDevice {
    /// `ip/mask` strings for every IP association, in record order
    pub fn ip_masks(&self) -> impl Iterator<Item = String> + '_ {
        self.ip_list.iter().map(ToString::to_string)
    }
}

/// ERS response wrapper for get-by-id (`{"NetworkDevice": {...}}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDeviceEnvelope {
    #[serde(rename = "NetworkDevice")]
    pub network_device: NetworkDevice,
}
