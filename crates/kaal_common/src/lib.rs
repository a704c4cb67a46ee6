//! KAAL common library - the intent-matching responder core.
//!
//! Free text is normalized, classified into one intent by ordered rules, and
//! answered with a canned reply, a site URL, a joke, or an encyclopedia
//! summary.

pub mod clock;
pub mod dispatcher;
pub mod encyclopedia;
pub mod intent;
pub mod jokes;
pub mod normalize;
pub mod reply;
pub mod sites;
pub mod wiki_client;

pub use clock::{Clock, FixedClock, LocalClock};
pub use dispatcher::Dispatcher;
pub use encyclopedia::{summarize, Encyclopedia, FakeEncyclopedia, LookupError};
pub use intent::{classify, Intent};
pub use jokes::{BuiltinJokes, FixedJokes, JokeError, JokeProvider};
pub use normalize::normalize;
pub use reply::{Reply, ReplyAction};
pub use sites::{SiteEntry, SiteMap};
pub use wiki_client::WikipediaClient;

/// Reply for an empty command at the HTTP/CLI boundary
pub const EMPTY_COMMAND_REPLY: &str = "Please say something for me to process.";
