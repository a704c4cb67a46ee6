//! Terminal output for replies and health

use crate::client::HealthStatus;
use kaal_common::{Reply, ReplyAction};
use owo_colors::OwoColorize;

/// Reply as plain lines: the text, then the URL for open_url replies
pub fn format_reply(reply: &Reply) -> String {
    match (&reply.action, &reply.url) {
        (Some(ReplyAction::OpenUrl), Some(url)) => format!("{}\n  -> {}", reply.reply, url),
        _ => reply.reply.clone(),
    }
}

pub fn print_reply(reply: &Reply, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reply)?);
        return Ok(());
    }

    println!("{} {}", "KAAL:".cyan().bold(), format_reply(reply));
    Ok(())
}

pub fn print_health(health: &HealthStatus, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(health)?);
        return Ok(());
    }

    println!("{} {}", "Status:".bold(), health.status.green());
    println!("{} {}", "Version:".bold(), health.version);
    println!("{} {}s", "Uptime:".bold(), health.uptime_seconds);
    println!("{} {}", "Sites:".bold(), health.sites);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_reply() {
        assert_eq!(format_reply(&Reply::text("Hello!")), "Hello!");
    }

    #[test]
    fn test_format_open_url_reply() {
        assert_eq!(
            format_reply(&Reply::open_url("https://github.com")),
            "Opening https://github.com\n  -> https://github.com"
        );
    }
}
