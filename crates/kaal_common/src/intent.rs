//! Intent classification - ordered substring and pattern rules.
//!
//! Rules are evaluated over normalized text in a fixed priority order and the
//! first match wins: greeting, time, date, joke, open-site, encyclopedia
//! question, fallback. Several rules can match the same text ("hi there, tell
//! me a joke"), so the order is part of the contract.

use regex::Regex;
use std::sync::LazyLock;

/// Substrings that mark a greeting. The trailing spaces on "hi " and "hey "
/// are deliberate: plain substring match, not a word boundary.
pub const GREETING_KEYWORDS: [&str; 5] = ["hello", "hi ", "hey ", "namaste", "kaal"];

static OPEN_SITE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(open|launch)\s+(.+)").unwrap());

/// Encyclopedia question patterns, in priority order
static ENCYCLOPEDIA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"who is (.+)",
        r"what is (.+)",
        r"tell me about (.+)",
        r"search wikipedia for (.+)",
        r"wikipedia (.+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Classified purpose of an utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Time,
    Date,
    Joke,
    /// Text starts with "open"/"launch". `site` is None when nothing follows.
    OpenSite { site: Option<String> },
    Encyclopedia { query: String },
    Fallback,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::Time => "time",
            Self::Date => "date",
            Self::Joke => "joke",
            Self::OpenSite { .. } => "open_site",
            Self::Encyclopedia { .. } => "encyclopedia",
            Self::Fallback => "fallback",
        };
        write!(f, "{}", s)
    }
}

/// Classify normalized text into an intent
pub fn classify(text: &str) -> Intent {
    if GREETING_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return Intent::Greeting;
    }

    if text.contains("time") {
        return Intent::Time;
    }

    if text.contains("date") || text.contains("day") {
        return Intent::Date;
    }

    if text.contains("joke") {
        return Intent::Joke;
    }

    if text.starts_with("open") || text.starts_with("launch") {
        return Intent::OpenSite {
            site: extract_site_name(text),
        };
    }

    if let Some(query) = extract_encyclopedia_query(text) {
        return Intent::Encyclopedia { query };
    }

    Intent::Fallback
}

/// Pull the site name out of "open X" / "launch X"
fn extract_site_name(text: &str) -> Option<String> {
    OPEN_SITE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_lowercase())
}

/// First encyclopedia pattern that matches anywhere in the text
fn extract_encyclopedia_query(text: &str) -> Option<String> {
    ENCYCLOPEDIA_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}
