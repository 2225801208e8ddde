//! ISE Network Device Export
//!
//! Lists every network device defined on a Cisco ISE node through the ERS API,
//! dereferences each one and prints its IP/mask associations.
//!
//! Usage: `ISE_USER=... ISE_PASSWORD=... ise-export ISE_HOSTNAME_OR_IP`

mod cli;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use ise_client::IseClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the export.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config()?;

    info!("Exporting network devices from {}", config.base_url());

    let client = IseClient::new(config);
    let mut stdout = std::io::stdout().lock();
    let count = output::export(&client, args.format, &mut stdout).await?;

    info!("Done: {} network devices", count);
    Ok(())
}
