//! Calories command handler.
//!
//! Calories of a food item from the Nutritionix natural language endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::{
    apis::{FetchError, request_json, required_arg, response_structs::NutrientsResponse},
    commands::Handler,
};

/// Answers `.calories <food>`.
pub struct CaloriesHandler {
    client: Client,
    url: String,
    app_id: String,
    api_key: String,
}

impl CaloriesHandler {
    /// Create a new [CaloriesHandler].
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `url` - URL of the `/v2/natural/nutrients` endpoint
    /// * `app_id` - Nutritionix application id, sent as `x-app-id`
    /// * `api_key` - Nutritionix key, sent as `x-app-key`
    pub fn new(client: Client, url: &str, app_id: &str, api_key: &str) -> Self {
        CaloriesHandler {
            client,
            url: url.to_owned(),
            app_id: app_id.to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for CaloriesHandler {
    fn arguments(&self) -> &'static str {
        "[food]"
    }

    fn description(&self) -> &'static str {
        "Get calorie information for a food item"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch calorie information. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let food = required_arg(args, 0, "food")?;

        let response: NutrientsResponse = request_json(
            self.client
                .post(&self.url)
                .header("x-app-id", &self.app_id)
                .header("x-app-key", &self.api_key)
                .json(&json!({ "query": food })),
        )
        .await?;

        let food_detail = response
            .foods
            .first()
            .ok_or(FetchError::MissingField("foods"))?;

        Ok(format!("Calories in {}: {}", food, food_detail.nf_calories))
    }
}
