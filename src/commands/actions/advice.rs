//! Advice command handler.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, response_structs::AdviceResponse},
    commands::Handler,
};

/// Answers `.advice` with a random Advice Slip.
pub struct AdviceHandler {
    client: Client,
    url: String,
}

impl AdviceHandler {
    /// Create a new [AdviceHandler] requesting `url` (the `/advice` endpoint).
    pub fn new(client: Client, url: &str) -> Self {
        AdviceHandler {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for AdviceHandler {
    fn arguments(&self) -> &'static str {
        ""
    }

    fn description(&self) -> &'static str {
        "Get random advice"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch advice. Please try again."
    }

    async fn fetch(&self, _args: &[String]) -> Result<String, FetchError> {
        let response: AdviceResponse = request_json(self.client.get(&self.url)).await?;
        Ok(response.slip.advice)
    }
}
