//! Quote command handler.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, response_structs::QuoteResponse},
    commands::Handler,
};

/// Answers `.quote` with a random quote from Quotable.
pub struct QuoteHandler {
    client: Client,
    url: String,
}

impl QuoteHandler {
    /// Create a new [QuoteHandler] requesting `url` (the `/random` endpoint).
    pub fn new(client: Client, url: &str) -> Self {
        QuoteHandler {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for QuoteHandler {
    fn arguments(&self) -> &'static str {
        ""
    }

    fn description(&self) -> &'static str {
        "Get a random quote"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch a quote. Please try again."
    }

    async fn fetch(&self, _args: &[String]) -> Result<String, FetchError> {
        let quote: QuoteResponse = request_json(self.client.get(&self.url)).await?;
        Ok(format!("\"{}\" - {}", quote.content, quote.author))
    }
}
