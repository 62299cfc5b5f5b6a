//! Dictionary command handler.
//!
//! First definition of an English word from the Free Dictionary API.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, required_arg, response_structs::DictionaryEntry},
    commands::Handler,
};

/// Answers `.dict <word>`.
pub struct DictHandler {
    client: Client,
    url: String,
}

impl DictHandler {
    /// Create a new [DictHandler].
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `url` - URL of the `/api/v2/entries/en` endpoint, the word is appended to it
    pub fn new(client: Client, url: &str) -> Self {
        DictHandler {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for DictHandler {
    fn arguments(&self) -> &'static str {
        "[word]"
    }

    fn description(&self) -> &'static str {
        "Get the definition of a word"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't find the definition. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let word = required_arg(args, 0, "word")?;

        let entries: Vec<DictionaryEntry> =
            request_json(self.client.get(format!("{}/{}", self.url, word))).await?;

        let definition = entries
            .first()
            .and_then(|entry| entry.meanings.first())
            .and_then(|meaning| meaning.definitions.first())
            .ok_or(FetchError::MissingField("definition"))?;

        Ok(format!("Definition of {}: {}", word, definition.definition))
    }
}
