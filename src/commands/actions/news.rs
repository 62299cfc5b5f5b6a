//! News command handler.
//!
//! Top US headlines from NewsAPI, optionally filtered by category.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, response_structs::NewsResponse},
    commands::Handler,
};

/// Category used when `.news` is called without argument.
const DEFAULT_CATEGORY: &str = "general";

/// Number of headlines answered.
const HEADLINES_COUNT: usize = 3;

/// Answers `.news [category]`.
///
/// NewsAPI categories are `business`, `entertainment`, `general`, `health`,
/// `science`, `sports` and `technology`. Other values are sent as-is and the API
/// rejects them.
pub struct NewsHandler {
    client: Client,
    url: String,
    api_key: String,
}

impl NewsHandler {
    /// Create a new [NewsHandler].
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `url` - URL of the `/v2/top-headlines` endpoint
    /// * `api_key` - NewsAPI key
    pub fn new(client: Client, url: &str, api_key: &str) -> Self {
        NewsHandler {
            client,
            url: url.to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for NewsHandler {
    fn arguments(&self) -> &'static str {
        "[category]"
    }

    fn description(&self) -> &'static str {
        "Get top news (categories: business, entertainment, general, health, science, sports, technology)"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch news. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let category = args.first().map_or(DEFAULT_CATEGORY, String::as_str);

        let response: NewsResponse = request_json(self.client.get(&self.url).query(&[
            ("country", "us"),
            ("category", category),
            ("apiKey", self.api_key.as_str()),
        ]))
        .await?;

        if response.articles.is_empty() {
            return Err(FetchError::MissingField("articles"));
        }

        Ok(response
            .articles
            .iter()
            .take(HEADLINES_COUNT)
            .map(|article| format!("{}\n{}", article.title, article.url))
            .collect::<Vec<String>>()
            .join("\n\n"))
    }
}
