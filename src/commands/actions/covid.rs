//! COVID-19 command handler.
//!
//! Cumulated cases, deaths and recoveries of a country from disease.sh.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, required_arg, response_structs::CovidResponse},
    commands::Handler,
};

/// Answers `.covid <country>`. The country is a name or an ISO code.
pub struct CovidHandler {
    client: Client,
    url: String,
}

impl CovidHandler {
    /// Create a new [CovidHandler].
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `url` - URL of the `/v3/covid-19/countries` endpoint, the country is appended to it
    pub fn new(client: Client, url: &str) -> Self {
        CovidHandler {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for CovidHandler {
    fn arguments(&self) -> &'static str {
        "[country]"
    }

    fn description(&self) -> &'static str {
        "Get COVID-19 statistics of a country"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch COVID-19 data. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let country = required_arg(args, 0, "country")?;

        let stats: CovidResponse =
            request_json(self.client.get(format!("{}/{}", self.url, country))).await?;

        Ok(format!(
            "COVID-19 stats for {}: Cases: {}, Deaths: {}, Recovered: {}",
            country, stats.cases, stats.deaths, stats.recovered
        ))
    }
}
