//! Wikipedia client - MediaWiki action API backend for `Encyclopedia`.
//!
//! Summaries come from the TextExtracts `extracts` prop. Disambiguation pages
//! are detected through the `disambiguation` page prop; their options are the
//! list entries of the rendered page, in page order.

use crate::encyclopedia::{Encyclopedia, LookupError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use scraper::{Html, Selector};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Results requested by a plain search
const SEARCH_LIMIT: u32 = 10;

/// API endpoint for a Wikipedia language edition
pub fn api_url_for_language(language: &str) -> String {
    format!("https://{}.wikipedia.org/w/api.php", language)
}

/// Wikipedia client
pub struct WikipediaClient {
    api_url: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<Q> {
    query: Option<Q>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
    #[serde(default)]
    searchinfo: Option<SearchInfo>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SearchInfo {
    #[serde(default)]
    suggestion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Default, Deserialize)]
struct Page {
    #[serde(default)]
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    pageprops: HashMap<String, serde_json::Value>,
}

/// What a fetched page turned out to be
#[derive(Debug, PartialEq)]
enum PageOutcome {
    Extract(String),
    Disambiguation(String),
    Missing,
}

impl WikipediaClient {
    /// Create a client for the given API endpoint
    pub fn new(api_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_url: api_url.into(),
            http,
        })
    }

    /// Create a client for a language edition ("en", "de", ...)
    pub fn for_language(language: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        Self::new(api_url_for_language(language), timeout, user_agent)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// GET one API action and return the raw body
    async fn api_get(&self, action: &str, params: &[(&str, String)]) -> Result<String, LookupError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("action", action), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| LookupError::Service(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Service(format!("HTTP {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|e| LookupError::Service(e.to_string()))
    }

    /// Run an API query and decode its `query` object
    async fn query<Q>(&self, params: &[(&str, String)]) -> Result<Q, LookupError>
    where
        Q: DeserializeOwned + Default,
    {
        let body = self.api_get("query", params).await?;
        decode_query(&body)
    }

    /// Search titles, optionally asking for a spelling suggestion
    async fn search_titles(
        &self,
        query: &str,
        limit: u32,
        with_suggestion: bool,
    ) -> Result<(Vec<String>, Option<String>), LookupError> {
        let mut params = vec![
            ("list", "search".to_string()),
            ("srsearch", query.to_string()),
            ("srlimit", limit.to_string()),
            ("srprop", String::new()),
        ];
        if with_suggestion {
            params.push(("srinfo", "suggestion".to_string()));
        }

        let result: SearchQuery = self.query(&params).await?;
        let titles = result.search.into_iter().map(|hit| hit.title).collect();
        let suggestion = result.searchinfo.and_then(|info| info.suggestion);
        Ok((titles, suggestion))
    }

    /// Best title for a loosely-typed request: suggestion, else first hit
    async fn suggest_title(&self, title: &str) -> Result<String, LookupError> {
        let (results, suggestion) = self.search_titles(title, 1, true).await?;
        suggestion
            .or_else(|| results.into_iter().next())
            .ok_or_else(|| LookupError::PageNotFound(title.to_string()))
    }

    async fn fetch_page(&self, title: &str, sentences: u32) -> Result<Page, LookupError> {
        let params = [
            ("prop", "extracts|pageprops".to_string()),
            ("ppprop", "disambiguation".to_string()),
            ("explaintext", "1".to_string()),
            ("exsentences", sentences.to_string()),
            ("redirects", "1".to_string()),
            ("titles", title.to_string()),
        ];
        let result: PagesQuery = self.query(&params).await?;
        Ok(result.pages.into_iter().next().unwrap_or_default())
    }

    /// Options listed on a disambiguation page, in page order
    async fn fetch_options(&self, title: &str) -> Result<Vec<String>, LookupError> {
        let params = [
            ("prop", "text".to_string()),
            ("redirects", "1".to_string()),
            ("page", title.to_string()),
        ];
        let body = self.api_get("parse", &params).await?;
        disambiguation_options(&decode_parse(&body)?)
    }
}

#[async_trait]
impl Encyclopedia for WikipediaClient {
    async fn summary(
        &self,
        title: &str,
        sentences: u32,
        auto_suggest: bool,
    ) -> Result<String, LookupError> {
        let title = if auto_suggest {
            self.suggest_title(title).await?
        } else {
            title.to_string()
        };

        debug!("Fetching Wikipedia summary for {:?}", title);
        let page = self.fetch_page(&title, sentences).await?;

        match page_outcome(page) {
            PageOutcome::Extract(text) => Ok(text),
            PageOutcome::Missing => Err(LookupError::PageNotFound(title)),
            PageOutcome::Disambiguation(page_title) => {
                let options = self.fetch_options(&page_title).await?;
                Err(LookupError::Disambiguation {
                    title: page_title,
                    options,
                })
            }
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, LookupError> {
        let (titles, _) = self.search_titles(query, SEARCH_LIMIT, false).await?;
        Ok(titles)
    }
}

/// Decode an API body, surfacing API-level errors as service failures
fn decode_query<Q>(body: &str) -> Result<Q, LookupError>
where
    Q: DeserializeOwned + Default,
{
    let response: ApiResponse<Q> = serde_json::from_str(body)
        .map_err(|e| LookupError::Service(format!("Malformed API response: {}", e)))?;

    if let Some(error) = response.error {
        return Err(LookupError::Service(format!("{}: {}", error.code, error.info)));
    }

    Ok(response.query.unwrap_or_default())
}

/// Rendered HTML of an `action=parse` response
fn decode_parse(body: &str) -> Result<String, LookupError> {
    let response: ParseResponse = serde_json::from_str(body)
        .map_err(|e| LookupError::Service(format!("Malformed API response: {}", e)))?;

    if let Some(error) = response.error {
        return Err(LookupError::Service(format!("{}: {}", error.code, error.info)));
    }

    response
        .parse
        .map(|page| page.text)
        .ok_or_else(|| LookupError::Service("Parse response without page".to_string()))
}

/// Link text of the first link in every list item, skipping the table of
/// contents
fn disambiguation_options(html: &str) -> Result<Vec<String>, LookupError> {
    let items = Selector::parse("li").map_err(|e| LookupError::Service(e.to_string()))?;
    let links = Selector::parse("a").map_err(|e| LookupError::Service(e.to_string()))?;

    let document = Html::parse_fragment(html);
    Ok(document
        .select(&items)
        .filter(|li| !li.value().classes().any(|c| c.contains("tocsection")))
        .filter_map(|li| li.select(&links).next())
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect())
}

fn page_outcome(page: Page) -> PageOutcome {
    if page.missing || page.invalid {
        return PageOutcome::Missing;
    }

    if page.pageprops.contains_key("disambiguation") {
        return PageOutcome::Disambiguation(page.title);
    }

    match page.extract.map(|e| e.trim().to_string()) {
        Some(text) if !text.is_empty() => PageOutcome::Extract(text),
        _ => PageOutcome::Missing,
    }
}
