//! Joke command handler.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, response_structs::JokeResponse},
    commands::Handler,
};

/// Answers `.joke` with a random joke, setup and punchline on two lines.
pub struct JokeHandler {
    client: Client,
    url: String,
}

impl JokeHandler {
    /// Create a new [JokeHandler] requesting `url` (the `/random_joke` endpoint).
    pub fn new(client: Client, url: &str) -> Self {
        JokeHandler {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for JokeHandler {
    fn arguments(&self) -> &'static str {
        ""
    }

    fn description(&self) -> &'static str {
        "Get a random joke"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch a joke. Please try again."
    }

    async fn fetch(&self, _args: &[String]) -> Result<String, FetchError> {
        let joke: JokeResponse = request_json(self.client.get(&self.url)).await?;
        Ok(format!("{}\n{}", joke.setup, joke.punchline))
    }
}
