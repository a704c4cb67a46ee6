//! KAAL Daemon - HTTP front end for the command responder.

use anyhow::Result;
use kaal_common::{Dispatcher, WikipediaClient};
use kaald::config::Config;
use kaald::server::{self, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("KAAL Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    let wikipedia = WikipediaClient::new(
        config.wikipedia.endpoint(),
        config.wikipedia.timeout(),
        &config.wikipedia.user_agent,
    )?;
    info!("  Wikipedia endpoint: {}", wikipedia.api_url());

    let sites = config.site_map();
    info!("  {} sites known", sites.len());

    let dispatcher = Dispatcher::new(sites, Arc::new(wikipedia));

    info!("KAAL Daemon ready");
    server::run(&config.server, AppState::new(dispatcher)).await
}
