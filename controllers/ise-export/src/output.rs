//! Rendering of exported devices

use crate::cli::OutputFormat;
use ise_client::{IseClientTrait, NetworkDevice};
use std::io::Write;

/// Export every device through `client` and write it to `out`
pub async fn export(
    client: &dyn IseClientTrait,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<usize> {
    let devices = client.export_network_devices().await?;
    render(&devices, format, out)?;
    Ok(devices.len())
}

/// Write `devices` to `out` in the requested format
pub fn render(devices: &[NetworkDevice], format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Lines => {
            for line in devices.iter().flat_map(|d| d.ip_masks()) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, devices)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
