//! Command implementations for kaalctl

use crate::client::KaalClient;
use crate::output;
use anyhow::{bail, Result};
use kaal_common::{Dispatcher, SiteMap, WikipediaClient, EMPTY_COMMAND_REPLY};
use std::sync::Arc;
use std::time::Duration;

/// Ask the daemon
pub async fn ask(server: &str, text: &str, json: bool) -> Result<()> {
    let text = non_empty(text)?;
    let client = KaalClient::new(server)?;
    let reply = client.command(text).await?;
    output::print_reply(&reply, json)
}

/// Answer in-process with the built-in sites and jokes
pub async fn local(text: &str, language: &str, json: bool) -> Result<()> {
    let text = non_empty(text)?;
    let user_agent = format!("kaalctl/{}", env!("CARGO_PKG_VERSION"));
    let wikipedia = WikipediaClient::for_language(language, Duration::from_secs(10), &user_agent)?;
    let dispatcher = Dispatcher::new(SiteMap::builtin(), Arc::new(wikipedia));

    let reply = dispatcher.handle_command(text).await;
    output::print_reply(&reply, json)
}

/// Show daemon health
pub async fn health(server: &str, json: bool) -> Result<()> {
    let client = KaalClient::new(server)?;
    let health = client.health().await?;
    output::print_health(&health, json)
}

fn non_empty(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        bail!(EMPTY_COMMAND_REPLY);
    }
    Ok(text)
}
