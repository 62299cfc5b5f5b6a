//! Command action handlers.
//!
//! One [`Handler`](crate::commands::Handler) per third-party API. Each handler
//! holds the shared HTTP client, its endpoint URL and its credentials.
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Pick their positional arguments, failing on a missing required one
//! 2. Make exactly one API call
//! 3. Format the answer as plain text
//!
//! Every failure of these steps is a [`FetchError`](crate::apis::FetchError),
//! answered to the user with the handler's fallback message.
//!
//! # Available Handlers
//!
//! | Token | Handler |
//! |-------|---------|
//! | `.weather` | [`WeatherHandler`] |
//! | `.news` | [`NewsHandler`] |
//! | `.calories` | [`CaloriesHandler`] |
//! | `.joke` | [`JokeHandler`] |
//! | `.quote` | [`QuoteHandler`] |
//! | `.trivia` | [`TriviaHandler`] |
//! | `.currency` | [`CurrencyHandler`] |
//! | `.dict` | [`DictHandler`] |
//! | `.advice` | [`AdviceHandler`] |
//! | `.recipe` | [`RecipeHandler`] |
//! | `.translate` | [`TranslateHandler`] |
//! | `.covid` | [`CovidHandler`] |
//! | `.movie` | [`MovieHandler`] |
//! | `.nasa` | [`NasaHandler`] |
//! | `.crypto` | [`CryptoHandler`] |

use std::sync::Arc;

use log::info;
use reqwest::Client;

use crate::{
    commands::CommandTable,
    config::{Credentials, Endpoints},
};

mod advice;
mod calories;
mod covid;
mod crypto;
mod currency;
mod dict;
mod joke;
mod movie;
mod nasa;
mod news;
mod quote;
mod recipe;
mod translate;
mod trivia;
mod weather;

pub use crate::commands::actions::{
    advice::AdviceHandler, calories::CaloriesHandler, covid::CovidHandler, crypto::CryptoHandler,
    currency::CurrencyHandler, dict::DictHandler, joke::JokeHandler, movie::MovieHandler,
    nasa::NasaHandler, news::NewsHandler, quote::QuoteHandler, recipe::RecipeHandler,
    translate::TranslateHandler, trivia::TriviaHandler, weather::WeatherHandler,
};

/// Registers every API command in `table`.
///
/// This is the only place the table is filled. It runs once, before the webhook
/// server accepts requests.
///
/// # Arguments
///
/// * `table` - Table to fill, already holding `.help`
/// * `client` - HTTP client shared by all the handlers
/// * `credentials` - API keys
/// * `endpoints` - API URLs
pub fn register_actions(
    table: &mut CommandTable,
    client: &Client,
    credentials: &Credentials,
    endpoints: &Endpoints,
) {
    table.register(
        ".weather",
        Arc::new(WeatherHandler::new(
            client.clone(),
            &endpoints.weather,
            &credentials.openweather_api_key,
        )),
    );
    table.register(
        ".news",
        Arc::new(NewsHandler::new(
            client.clone(),
            &endpoints.news,
            &credentials.news_api_key,
        )),
    );
    table.register(
        ".calories",
        Arc::new(CaloriesHandler::new(
            client.clone(),
            &endpoints.calories,
            &credentials.nutritionix_app_id,
            &credentials.nutritionix_api_key,
        )),
    );
    table.register(
        ".joke",
        Arc::new(JokeHandler::new(client.clone(), &endpoints.joke)),
    );
    table.register(
        ".quote",
        Arc::new(QuoteHandler::new(client.clone(), &endpoints.quote)),
    );
    table.register(
        ".trivia",
        Arc::new(TriviaHandler::new(client.clone(), &endpoints.trivia)),
    );
    table.register(
        ".currency",
        Arc::new(CurrencyHandler::new(client.clone(), &endpoints.currency)),
    );
    table.register(
        ".dict",
        Arc::new(DictHandler::new(client.clone(), &endpoints.dict)),
    );
    table.register(
        ".advice",
        Arc::new(AdviceHandler::new(client.clone(), &endpoints.advice)),
    );
    table.register(
        ".recipe",
        Arc::new(RecipeHandler::new(client.clone(), &endpoints.recipe)),
    );
    table.register(
        ".translate",
        Arc::new(TranslateHandler::new(
            client.clone(),
            &endpoints.translate,
            &credentials.translate_api_key,
        )),
    );
    table.register(
        ".covid",
        Arc::new(CovidHandler::new(client.clone(), &endpoints.covid)),
    );
    table.register(
        ".movie",
        Arc::new(MovieHandler::new(
            client.clone(),
            &endpoints.movie,
            &credentials.movie_api_key,
        )),
    );
    table.register(
        ".nasa",
        Arc::new(NasaHandler::new(
            client.clone(),
            &endpoints.nasa,
            &credentials.nasa_api_key,
        )),
    );
    table.register(
        ".crypto",
        Arc::new(CryptoHandler::new(client.clone(), &endpoints.crypto)),
    );

    info!("registered {} commands", table.tokens().count());
}
