//! NASA command handler.
//!
//! Astronomy Picture of the Day: title, explanation and image URL.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, response_structs::ApodResponse},
    commands::Handler,
};

/// Answers `.nasa`.
pub struct NasaHandler {
    client: Client,
    url: String,
    api_key: String,
}

impl NasaHandler {
    /// Create a new [NasaHandler].
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `url` - URL of the `/planetary/apod` endpoint
    /// * `api_key` - NASA key, `DEMO_KEY` works with a low rate limit
    pub fn new(client: Client, url: &str, api_key: &str) -> Self {
        NasaHandler {
            client,
            url: url.to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for NasaHandler {
    fn arguments(&self) -> &'static str {
        ""
    }

    fn description(&self) -> &'static str {
        "Get NASA's astronomy picture of the day"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch NASA picture of the day. Please try again."
    }

    async fn fetch(&self, _args: &[String]) -> Result<String, FetchError> {
        let apod: ApodResponse = request_json(
            self.client
                .get(&self.url)
                .query(&[("api_key", self.api_key.as_str())]),
        )
        .await?;

        Ok(format!(
            "NASA Astronomy Picture of the Day:\nTitle: {}\nExplanation: {}\nImage: {}",
            apod.title, apod.explanation, apod.url
        ))
    }
}
