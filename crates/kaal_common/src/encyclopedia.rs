//! Encyclopedia lookup with tiered fallback.
//!
//! A summary lookup can fail in three distinct ways (ambiguous title, no such
//! page, service trouble). `summarize` walks the fallback chain and always
//! ends in a user-facing string; nothing here propagates an error.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Sentences requested for every summary
pub const SUMMARY_SENTENCES: u32 = 2;

/// Reply when the service itself is unreachable or misbehaving
pub const WIKIPEDIA_UNREACHABLE: &str = "I'm having trouble reaching Wikipedia right now.";

/// Lookup failures reported by an encyclopedia service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("\"{title}\" may refer to: {}", .options.join(", "))]
    Disambiguation { title: String, options: Vec<String> },

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Service error: {0}")]
    Service(String),
}

/// External encyclopedia service
#[async_trait]
pub trait Encyclopedia: Send + Sync {
    /// Plain-text summary of a page, limited to `sentences` sentences.
    /// With `auto_suggest`, the title is first corrected via search.
    async fn summary(
        &self,
        title: &str,
        sentences: u32,
        auto_suggest: bool,
    ) -> Result<String, LookupError>;

    /// Page titles matching a free-text query, best first
    async fn search(&self, query: &str) -> Result<Vec<String>, LookupError>;
}

pub fn multiple_results_message(query: &str) -> String {
    format!("I found multiple results for {}. Please be more specific.", query)
}

pub fn no_summary_message(title: &str) -> String {
    format!("I couldn't fetch a summary for {}.", title)
}

pub fn not_found_message(query: &str) -> String {
    format!("I couldn't find anything for {}.", query)
}

/// Look up a short summary for `query`, degrading to a message on failure.
///
/// Chain: direct summary -> first disambiguation option -> first search hit.
pub async fn summarize(service: &dyn Encyclopedia, query: &str) -> String {
    match service.summary(query, SUMMARY_SENTENCES, true).await {
        Ok(summary) => summary,
        Err(LookupError::Disambiguation { options, .. }) => {
            debug!("Ambiguous title {:?}, {} options", query, options.len());
            if let Some(first) = options.first() {
                match service.summary(first, SUMMARY_SENTENCES, true).await {
                    Ok(summary) => return summary,
                    Err(e) => debug!("Retry with {:?} failed: {}", first, e),
                }
            }
            multiple_results_message(query)
        }
        Err(LookupError::PageNotFound(_)) => summarize_first_search_hit(service, query).await,
        Err(LookupError::Service(e)) => {
            warn!("Encyclopedia lookup failed for {:?}: {}", query, e);
            WIKIPEDIA_UNREACHABLE.to_string()
        }
    }
}

async fn summarize_first_search_hit(service: &dyn Encyclopedia, query: &str) -> String {
    let results = match service.search(query).await {
        Ok(results) => results,
        Err(e) => {
            warn!("Encyclopedia search failed for {:?}: {}", query, e);
            return WIKIPEDIA_UNREACHABLE.to_string();
        }
    };

    let Some(first) = results.first() else {
        return not_found_message(query);
    };

    match service.summary(first, SUMMARY_SENTENCES, true).await {
        Ok(summary) => summary,
        Err(e) => {
            debug!("Summary for search hit {:?} failed: {}", first, e);
            no_summary_message(first)
        }
    }
}

// ============================================================================
// Fake Encyclopedia (Testing)
// ============================================================================

/// Scripted encyclopedia for tests.
///
/// Unscripted titles report `PageNotFound`; unscripted searches return no
/// results. Every call is recorded as `summary:<title>` or `search:<query>`.
#[derive(Default)]
pub struct FakeEncyclopedia {
    summaries: HashMap<String, Result<String, LookupError>>,
    searches: HashMap<String, Result<Vec<String>, LookupError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeEncyclopedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, title: &str, summary: &str) -> Self {
        self.summaries
            .insert(title.to_string(), Ok(summary.to_string()));
        self
    }

    pub fn with_summary_error(mut self, title: &str, error: LookupError) -> Self {
        self.summaries.insert(title.to_string(), Err(error));
        self
    }

    pub fn with_search(mut self, query: &str, results: &[&str]) -> Self {
        self.searches.insert(
            query.to_string(),
            Ok(results.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    pub fn with_search_error(mut self, query: &str, error: LookupError) -> Self {
        self.searches.insert(query.to_string(), Err(error));
        self
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl Encyclopedia for FakeEncyclopedia {
    async fn summary(
        &self,
        title: &str,
        _sentences: u32,
        _auto_suggest: bool,
    ) -> Result<String, LookupError> {
        self.record(format!("summary:{}", title));
        self.summaries
            .get(title)
            .cloned()
            .unwrap_or_else(|| Err(LookupError::PageNotFound(title.to_string())))
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, LookupError> {
        self.record(format!("search:{}", query));
        self.searches.get(query).cloned().unwrap_or_else(|| Ok(vec![]))
    }
}
