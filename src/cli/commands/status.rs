//! Show backend status
//!
//! Probes the health and tracker endpoints of the configured backend.

use anyhow::{Result, bail};
use clap::Args;

use crate::backend::BackendClient;
use crate::cli::Output;
use crate::config::YourOrbitConfig;

#[derive(Args, Default)]
pub struct StatusArgs {
    /// Backend base URL (overrides backend.base_url)
    #[arg(long)]
    pub url: Option<String>,
}

pub async fn execute(args: StatusArgs, config: &YourOrbitConfig, output: &Output) -> Result<()> {
    let mut backend = config.backend()?;
    if let Some(url) = args.url {
        backend.base_url = url;
    }
    let client = BackendClient::new(&backend)?;

    output.header("yourOrbit Status");
    output.key_value("Backend:", client.base_url(), false);
    output.key_value("Submit mode:", &format!("{:?}", config.submit()?.mode).to_lowercase(), false);

    let mut healthy = true;
    match client.health().await {
        Ok(health) => output.status_indicator("HEALTH", &format!("{} ({})", health.status, health.time), true),
        Err(e) => {
            healthy = false;
            output.status_indicator("HEALTH", &format!("{e:#}"), false);
        }
    }
    match client.tracker().await {
        Ok(tracker) => output.status_indicator("TRACKER", &tracker.message, true),
        Err(e) => {
            healthy = false;
            output.status_indicator("TRACKER", &format!("{e:#}"), false);
        }
    }

    if !healthy {
        bail!("Backend at {} is not reachable", client.base_url());
    }
    Ok(())
}
