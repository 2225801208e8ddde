//! Command-line arguments
//!
//! Credentials come from `ISE_USER` / `ISE_PASSWORD`; clap reports a usage
//! error when either is missing.

use clap::{Parser, ValueEnum};
use ise_client::{ERS_PORT, IseConfig, IseError, LinkPolicy, MAX_PAGE_SIZE};
use std::time::Duration;

/// Output rendering for exported devices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `ip/mask` line per IP association
    Lines,
    /// Pretty-printed JSON array of device records
    Json,
}

/// Export the IP/mask pairs of every network device defined on an ISE node
#[derive(Debug, Parser)]
#[command(name = "ise-export", version, about)]
pub struct Args {
    /// IP or hostname of the ISE node (without https://)
    #[arg(value_name = "ISE_HOSTNAME_OR_IP")]
    pub host: String,

    /// ERS API user
    #[arg(long = "user", env = "ISE_USER", hide_env_values = true)]
    pub user: String,

    /// ERS API password
    #[arg(long = "password", env = "ISE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// ERS API port
    #[arg(long, default_value_t = ERS_PORT)]
    pub port: u16,

    /// Verify the node's TLS certificate
    #[arg(long)]
    pub verify_tls: bool,

    /// Devices requested per listing page (ISE caps this at 100)
    #[arg(long, default_value_t = MAX_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE_SIZE)))]
    pub page_size: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Follow pagination and device links even when they point at another host
    #[arg(long)]
    pub trust_server_links: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Use this base URL instead of https://HOST:PORT
    #[arg(long, hide = true)]
    pub base_url: Option<String>,
}

impl Args {
    /// Build the client configuration from the parsed arguments
    pub fn to_config(&self) -> Result<IseConfig, IseError> {
        let config = match &self.base_url {
            Some(url) => IseConfig::with_base_url(url, &self.user, &self.password)?,
            None => IseConfig::for_host_and_port(&self.host, self.port, &self.user, &self.password)?,
        };

        let link_policy = if self.trust_server_links {
            LinkPolicy::Trusted
        } else {
            LinkPolicy::SameOrigin
        };

        Ok(config
            .verify_tls(self.verify_tls)
            .page_size(self.page_size)
            .timeout(Duration::from_secs(self.timeout_secs))
            .link_policy(link_policy))
    }
}
