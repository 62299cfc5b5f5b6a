//! Trivia command handler.
//!
//! One multiple choice question from the Open Trivia Database. Only the question
//! and its correct answer are shown.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, response_structs::TriviaResponse},
    commands::Handler,
};

/// Answers `.trivia`.
pub struct TriviaHandler {
    client: Client,
    url: String,
}

impl TriviaHandler {
    /// Create a new [TriviaHandler] requesting `url` (the `/api.php` endpoint).
    pub fn new(client: Client, url: &str) -> Self {
        TriviaHandler {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for TriviaHandler {
    fn arguments(&self) -> &'static str {
        ""
    }

    fn description(&self) -> &'static str {
        "Get a trivia question"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch trivia. Please try again."
    }

    async fn fetch(&self, _args: &[String]) -> Result<String, FetchError> {
        let response: TriviaResponse = request_json(
            self.client
                .get(&self.url)
                .query(&[("amount", "1"), ("type", "multiple")]),
        )
        .await?;

        let trivia = response
            .results
            .first()
            .ok_or(FetchError::MissingField("trivia results"))?;

        Ok(format!(
            "Question: {}\nAnswer: {}",
            trivia.question, trivia.correct_answer
        ))
    }
}
