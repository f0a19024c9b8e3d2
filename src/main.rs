//! # Scriptorium Main Entry Point
//!
//! Command line access to the Bible API.

use anyhow::{Context, Result};
use scriptorium::cmd_args::CommandLineArgs;
use scriptorium::logging::init_tracing_subscriber;
use scriptorium::{cmd, BibleApiClient, ClientConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing_subscriber(args.verbose());

    // Resolve the API base from --api-base, API_BASE, the profile file or
    // the loopback default, in that order
    let config = ClientConfig::load(args.profile(), args.api_base())
        .context("Failed to load configuration")?;

    let client = BibleApiClient::from_config(&config)?;

    let out = cmd::execute(&client, args.command())
        .await
        .with_context(|| format!("Request to {} failed", client.base_url()))?;

    print!("{out}");
    Ok(())
}
