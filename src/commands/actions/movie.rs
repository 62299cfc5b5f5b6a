//! Movie command handler.
//!
//! Title, year, director and plot of a movie from OMDb.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, required_arg, response_structs::MovieResponse},
    commands::Handler,
};

/// Answers `.movie <title>`.
pub struct MovieHandler {
    client: Client,
    url: String,
    api_key: String,
}

impl MovieHandler {
    /// Create a new [MovieHandler].
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `url` - URL of the OMDb API root
    /// * `api_key` - OMDb key
    pub fn new(client: Client, url: &str, api_key: &str) -> Self {
        MovieHandler {
            client,
            url: url.to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for MovieHandler {
    fn arguments(&self) -> &'static str {
        "[title]"
    }

    fn description(&self) -> &'static str {
        "Get movie information"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch movie information. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let title = required_arg(args, 0, "title")?;

        let movie: MovieResponse = request_json(
            self.client
                .get(&self.url)
                .query(&[("t", title), ("apikey", self.api_key.as_str())]),
        )
        .await?;

        // OMDb answers 200 with an error object for unknown titles
        let MovieResponse {
            title: Some(title),
            year: Some(year),
            director: Some(director),
            plot: Some(plot),
        } = movie
        else {
            return Err(FetchError::MissingField("movie"));
        };

        Ok(format!(
            "{} ({})\nDirected by: {}\nPlot: {}",
            title, year, director, plot
        ))
    }
}
