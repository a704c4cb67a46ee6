//! Joke providers.

use rand::seq::SliceRandom;

/// Joke provider errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JokeError {
    #[error("No jokes available")]
    Empty,

    #[error("Joke provider error: {0}")]
    Provider(String),
}

/// Source of one joke per call
pub trait JokeProvider: Send + Sync {
    fn joke(&self) -> Result<String, JokeError>;
}

const BUILTIN_JOKES: &[&str] = &[
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "A SQL query walks into a bar, walks up to two tables and asks: may I join you?",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I would tell you a UDP joke, but you might not get it.",
    "Debugging is like being the detective in a crime movie where you are also the murderer.",
    "A programmer's partner says: buy a loaf of bread, and if they have eggs, buy a dozen. The programmer comes home with twelve loaves.",
    "Why did the developer go broke? Because they used up all their cache.",
    "It works on my machine. Then we'll ship your machine.",
    "There are only two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "Knock knock. Race condition. Who's there?",
    "The best thing about a boolean is that even if you are wrong, you are only off by a bit.",
    "I've got a really good TCP joke. I'll keep telling it until you get it.",
    "Why was the function sad after the party? It didn't get a callback.",
];

/// Offline joke list, one picked at random per call
pub struct BuiltinJokes {
    jokes: Vec<String>,
}

impl BuiltinJokes {
    pub fn new() -> Self {
        Self::from_jokes(BUILTIN_JOKES.iter().map(|j| j.to_string()))
    }

    pub fn from_jokes<I>(jokes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            jokes: jokes.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }
}

impl Default for BuiltinJokes {
    fn default() -> Self {
        Self::new()
    }
}

impl JokeProvider for BuiltinJokes {
    fn joke(&self) -> Result<String, JokeError> {
        self.jokes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(JokeError::Empty)
    }
}

/// Deterministic provider for tests
pub struct FixedJokes {
    result: Result<String, JokeError>,
}

impl FixedJokes {
    pub fn new(joke: &str) -> Self {
        Self {
            result: Ok(joke.to_string()),
        }
    }

    pub fn failing(error: JokeError) -> Self {
        Self { result: Err(error) }
    }
}

impl JokeProvider for FixedJokes {
    fn joke(&self) -> Result<String, JokeError> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_returns_known_joke() {
        let jokes = BuiltinJokes::new();
        assert!(!jokes.is_empty());

        for _ in 0..20 {
            let joke = jokes.joke().unwrap();
            assert!(BUILTIN_JOKES.contains(&joke.as_str()));
        }
    }

    #[test]
    fn test_empty_list_errors() {
        let jokes = BuiltinJokes::from_jokes(Vec::new());
        assert_eq!(jokes.joke(), Err(JokeError::Empty));
    }

    #[test]
    fn test_fixed_jokes() {
        assert_eq!(FixedJokes::new("ha").joke().as_deref(), Ok("ha"));
        assert_eq!(
            FixedJokes::failing(JokeError::Provider("down".to_string())).joke(),
            Err(JokeError::Provider("down".to_string()))
        );
    }
}
