//! IseClient trait for mocking
//!
//! This trait abstracts the IseClient to enable mocking in unit tests.
//! The concrete IseClient implements this trait, and tests can use mock implementations.

use crate::error::IseError;
use crate::models::*;

/// Trait for ISE ERS network device operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait IseClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// All network device summaries across every page, in server order
    async fn list_network_devices(&self) -> Result<Vec<NetworkDeviceSummary>, IseError>;

    /// Dereference one summary to its full record
    async fn get_network_device(&self, summary: &NetworkDeviceSummary) -> Result<NetworkDevice, IseError>;

    /// Full records for every network device, in listing order
    async fn export_network_devices(&self) -> Result<Vec<NetworkDevice>, IseError>;
}
