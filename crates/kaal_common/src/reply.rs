//! Reply model and canned responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const GREETING_REPLY: &str = "Hello! I am KAAL. How can I assist you?";

pub const UNKNOWN_SITE_REPLY: &str =
    "I couldn't identify that site. Try: open YouTube, open GitHub, open Google.";

pub const JOKE_UNAVAILABLE_REPLY: &str = "I couldn't come up with a joke right now.";

pub const FALLBACK_REPLY: &str = "I didn't get that. Try:\n\
                                  • What is the time?\n\
                                  • Tell me a joke\n\
                                  • Who is Ada Lovelace\n\
                                  • Open YouTube";

/// Client-side action attached to a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyAction {
    OpenUrl,
}

/// Response to a single command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ReplyAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Reply {
    /// Plain text reply
    pub fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            action: None,
            url: None,
        }
    }

    /// "Opening <url>" with an open_url action
    pub fn open_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            reply: format!("Opening {}", url),
            action: Some(ReplyAction::OpenUrl),
            url: Some(url),
        }
    }
}

/// "It's 03:07 PM."
pub fn time_reply(now: NaiveDateTime) -> String {
    format!("It's {}.", now.format("%I:%M %p"))
}

/// "Today is Sunday, 31 August 2025"
pub fn date_reply(now: NaiveDateTime) -> String {
    format!("Today is {}", now.format("%A, %-d %B %Y"))
}
