//! Command dispatcher - normalize, classify, respond.

use crate::clock::{Clock, LocalClock};
use crate::encyclopedia::{summarize, Encyclopedia};
use crate::intent::{classify, Intent};
use crate::jokes::{BuiltinJokes, JokeProvider};
use crate::normalize::normalize;
use crate::reply::{
    date_reply, time_reply, Reply, FALLBACK_REPLY, GREETING_REPLY, JOKE_UNAVAILABLE_REPLY,
    UNKNOWN_SITE_REPLY,
};
use crate::sites::SiteMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns free text into a reply.
///
/// Holds no per-request state; share one instance across requests.
pub struct Dispatcher {
    sites: SiteMap,
    encyclopedia: Arc<dyn Encyclopedia>,
    jokes: Arc<dyn JokeProvider>,
    clock: Arc<dyn Clock>,
}

impl Dispatcher {
    /// Dispatcher with built-in jokes and the local clock
    pub fn new(sites: SiteMap, encyclopedia: Arc<dyn Encyclopedia>) -> Self {
        Self {
            sites,
            encyclopedia,
            jokes: Arc::new(BuiltinJokes::new()),
            clock: Arc::new(LocalClock),
        }
    }

    pub fn with_jokes(mut self, jokes: Arc<dyn JokeProvider>) -> Self {
        self.jokes = jokes;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn sites(&self) -> &SiteMap {
        &self.sites
    }

    /// Handle one raw command
    pub async fn handle_command(&self, raw_text: &str) -> Reply {
        let text = normalize(raw_text);
        let intent = classify(&text);
        debug!("Classified {:?} as {}", text, intent);
        self.respond(intent).await
    }

    async fn respond(&self, intent: Intent) -> Reply {
        match intent {
            Intent::Greeting => Reply::text(GREETING_REPLY),
            Intent::Time => Reply::text(time_reply(self.clock.now())),
            Intent::Date => Reply::text(date_reply(self.clock.now())),
            Intent::Joke => match self.jokes.joke() {
                Ok(joke) => Reply::text(joke),
                Err(e) => {
                    warn!("Joke provider failed: {}", e);
                    Reply::text(JOKE_UNAVAILABLE_REPLY)
                }
            },
            Intent::OpenSite { site } => match site.and_then(|s| self.sites.resolve(&s)) {
                Some(url) => Reply::open_url(url),
                None => Reply::text(UNKNOWN_SITE_REPLY),
            },
            Intent::Encyclopedia { query } => {
                Reply::text(summarize(self.encyclopedia.as_ref(), &query).await)
            }
            Intent::Fallback => Reply::text(FALLBACK_REPLY),
        }
    }
}
