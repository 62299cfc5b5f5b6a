//! Recipe command handler.
//!
//! First meal of TheMealDB using a main ingredient.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, required_arg, response_structs::MealsResponse},
    commands::Handler,
};

/// Answers `.recipe <ingredient>`.
pub struct RecipeHandler {
    client: Client,
    url: String,
}

impl RecipeHandler {
    /// Create a new [RecipeHandler] requesting `url` (the `/filter.php` endpoint).
    pub fn new(client: Client, url: &str) -> Self {
        RecipeHandler {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for RecipeHandler {
    fn arguments(&self) -> &'static str {
        "[ingredient]"
    }

    fn description(&self) -> &'static str {
        "Get a recipe suggestion"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't find a recipe. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let ingredient = required_arg(args, 0, "ingredient")?;

        let response: MealsResponse =
            request_json(self.client.get(&self.url).query(&[("i", ingredient)])).await?;

        let meal = response
            .meals
            .as_deref()
            .and_then(<[_]>::first)
            .ok_or(FetchError::MissingField("meals"))?;

        Ok(format!(
            "Recipe suggestion with {}: {}",
            ingredient, meal.str_meal
        ))
    }
}
