//! Cisco ISE ERS API Client
//!
//! A Rust client library for exporting network devices from the ISE External
//! RESTful Services (ERS) API.
//!
//! # Example
//!
//! ```no_run
//! use ise_client::{IseClient, IseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IseConfig::for_host("ise.example.com", "ersadmin", "password")?
//!     .verify_tls(false);
//! let client = IseClient::new(config);
//!
//! // Every device, with its IP/mask associations
//! for device in client.export_network_devices().await? {
//!     for line in device.ip_masks() {
//!         println!("{}", line);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Pagination**: follows `nextPage` links until the listing is exhausted
//! - **Strict decoding**: responses that miss required fields fail fast
//! - **Link checks**: server links must stay on the configured node unless trusted

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod ise_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::IseClient;
pub use common::Session;
pub use config::{ERS_PORT, IseConfig, LinkPolicy, MAX_PAGE_SIZE};
pub use error::IseError;
pub use models::*;
pub use ise_trait::IseClientTrait;
pub use reqwest::StatusCode;
#[cfg(feature = "test-util")]
pub use mock::MockIseClient;
