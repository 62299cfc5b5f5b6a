//! Translate command handler.
//!
//! Translates a word with Google Cloud Translation v2. The source language is
//! detected by the API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::{
    apis::{FetchError, request_json, required_arg, response_structs::TranslateResponse},
    commands::Handler,
};

/// Answers `.translate <text> <language>`, `language` being a code like `fr`.
pub struct TranslateHandler {
    client: Client,
    url: String,
    api_key: String,
}

impl TranslateHandler {
    /// Create a new [TranslateHandler].
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `url` - URL of the `/language/translate/v2` endpoint
    /// * `api_key` - Google Cloud key
    pub fn new(client: Client, url: &str, api_key: &str) -> Self {
        TranslateHandler {
            client,
            url: url.to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for TranslateHandler {
    fn arguments(&self) -> &'static str {
        "[text] [language]"
    }

    fn description(&self) -> &'static str {
        "Translate text to a language"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't perform translation. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let text = required_arg(args, 0, "text")?;
        let target = required_arg(args, 1, "language")?;

        let response: TranslateResponse = request_json(
            self.client
                .post(&self.url)
                .query(&[("key", self.api_key.as_str())])
                .json(&json!({ "q": text, "target": target })),
        )
        .await?;

        let translation = response
            .data
            .translations
            .first()
            .ok_or(FetchError::MissingField("translations"))?;

        Ok(format!("Translation: {}", translation.translated_text))
    }
}
