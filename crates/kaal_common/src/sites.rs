//! Site resolver - maps a spoken site name to a URL.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Bare domain like "example.com" or "docs.rs" (no scheme)
static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9\-.]+\.[a-z]{2,}$").unwrap());

/// A named site entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub name: String,
    pub url: String,
}

/// Ordered table of known sites.
///
/// Order matters for partial matches: the first name contained in the
/// requested text wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMap {
    entries: Vec<SiteEntry>,
}

impl SiteMap {
    /// Empty table
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Built-in sites
    pub fn builtin() -> Self {
        let mut map = Self::empty();
        for (name, url) in [
            ("youtube", "https://www.youtube.com"),
            ("google", "https://www.google.com"),
            ("github", "https://github.com"),
            ("wikipedia", "https://www.wikipedia.org"),
            ("stack overflow", "https://stackoverflow.com"),
            ("linkedin", "https://www.linkedin.com"),
        ] {
            map.insert(name, url);
        }
        map
    }

    /// Built-in sites plus extra entries (e.g. from config)
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SiteEntry>,
    {
        let mut map = Self::builtin();
        for entry in entries {
            map.insert(&entry.name, &entry.url);
        }
        map
    }

    /// Add a site, or replace the URL of an existing name in place
    pub fn insert(&mut self, name: &str, url: &str) {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.url = url.to_string(),
            None => self.entries.push(SiteEntry {
                name,
                url: url.to_string(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.url.as_str())
    }

    pub fn entries(&self) -> &[SiteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a site name to a URL.
    ///
    /// Lookup order: exact name -> bare domain (gets an https:// prefix) ->
    /// first known name contained in the text.
    pub fn resolve(&self, site: &str) -> Option<String> {
        if let Some(url) = self.get(site) {
            return Some(url.to_string());
        }

        if DOMAIN_PATTERN.is_match(site) {
            return Some(format!("https://{}", site));
        }

        self.entries
            .iter()
            .find(|e| site.contains(e.name.as_str()))
            .map(|e| e.url.clone())
    }
}

impl Default for SiteMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let sites = SiteMap::builtin();
        assert_eq!(
            sites.resolve("youtube").as_deref(),
            Some("https://www.youtube.com")
        );
        assert_eq!(
            sites.resolve("stack overflow").as_deref(),
            Some("https://stackoverflow.com")
        );
    }

    #[test]
    fn test_domain_pattern() {
        let sites = SiteMap::builtin();
        assert_eq!(
            sites.resolve("example.com").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            sites.resolve("docs.rust-lang.org").as_deref(),
            Some("https://docs.rust-lang.org")
        );
        // single-letter suffix is not a domain
        assert_eq!(sites.resolve("foo.x"), None);
    }

    #[test]
    fn test_domain_beats_partial() {
        // "github.io" contains "github" but looks like a domain first
        let sites = SiteMap::builtin();
        assert_eq!(
            sites.resolve("user.github.io").as_deref(),
            Some("https://user.github.io")
        );
    }

    #[test]
    fn test_partial_match() {
        let sites = SiteMap::builtin();
        assert_eq!(
            sites.resolve("youtube music").as_deref(),
            Some("https://www.youtube.com")
        );
        assert_eq!(
            sites.resolve("my linkedin profile").as_deref(),
            Some("https://www.linkedin.com")
        );
    }

    #[test]
    fn test_partial_match_uses_table_order() {
        // both "google" and "github" appear; google comes first in the table
        let sites = SiteMap::builtin();
        assert_eq!(
            sites.resolve("github or google").as_deref(),
            Some("https://www.google.com")
        );
    }

    #[test]
    fn test_no_match() {
        let sites = SiteMap::builtin();
        assert_eq!(sites.resolve("flibbertigibbet"), None);
        assert_eq!(sites.resolve(""), None);
    }

    #[test]
    fn test_with_entries_appends_and_replaces() {
        let sites = SiteMap::with_entries(vec![
            SiteEntry {
                name: "Reddit".to_string(),
                url: "https://www.reddit.com".to_string(),
            },
            SiteEntry {
                name: "github".to_string(),
                url: "https://github.example.org".to_string(),
            },
        ]);

        assert_eq!(sites.len(), 7);
        assert_eq!(sites.get("reddit"), Some("https://www.reddit.com"));
        assert_eq!(sites.get("github"), Some("https://github.example.org"));
        // replaced in place, so github is still third
        assert_eq!(sites.entries()[2].name, "github");
    }

    #[test]
    fn test_insert_ignores_blank_names() {
        let mut sites = SiteMap::empty();
        sites.insert("   ", "https://nowhere.test");
        assert!(sites.is_empty());
    }
}
