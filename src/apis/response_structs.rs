//! Response structures for the third-party APIs.
//!
//! Only the fields the commands display are declared; serde ignores the rest.
//! Fields some APIs omit on "not found" answers are `Option`s so that case is
//! reported as [`FetchError::MissingField`](crate::apis::FetchError::MissingField)
//! rather than a decoding error.

use std::collections::HashMap;

use serde::Deserialize;

/// OpenWeatherMap `/data/2.5/weather`.
#[derive(Deserialize, Debug)]
pub struct WeatherResponse {
    pub main: WeatherMain,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Deserialize, Debug)]
pub struct WeatherMain {
    /// Temperature in °C (`units=metric`)
    pub temp: f64,
}

#[derive(Deserialize, Debug)]
pub struct WeatherCondition {
    pub description: String,
}

/// NewsAPI `/v2/top-headlines`.
#[derive(Deserialize, Debug)]
pub struct NewsResponse {
    pub articles: Vec<Article>,
}

#[derive(Deserialize, Debug)]
pub struct Article {
    pub title: String,
    pub url: String,
}

/// Nutritionix `/v2/natural/nutrients`.
#[derive(Deserialize, Debug)]
pub struct NutrientsResponse {
    pub foods: Vec<Food>,
}

#[derive(Deserialize, Debug)]
pub struct Food {
    pub nf_calories: f64,
}

/// Official joke API `/random_joke`.
#[derive(Deserialize, Debug)]
pub struct JokeResponse {
    pub setup: String,
    pub punchline: String,
}

/// Quotable `/random`.
#[derive(Deserialize, Debug)]
pub struct QuoteResponse {
    pub content: String,
    pub author: String,
}

/// Open Trivia Database `/api.php`.
#[derive(Deserialize, Debug)]
pub struct TriviaResponse {
    pub results: Vec<TriviaQuestion>,
}

#[derive(Deserialize, Debug)]
pub struct TriviaQuestion {
    pub question: String,
    pub correct_answer: String,
}

/// ExchangeRate-API `/v4/latest/{currency}`.
#[derive(Deserialize, Debug)]
pub struct RatesResponse {
    /// Rates indexed by currency code
    pub rates: HashMap<String, f64>,
}

/// Free Dictionary API `/api/v2/entries/en/{word}`, one entry of the returned array.
#[derive(Deserialize, Debug)]
pub struct DictionaryEntry {
    pub meanings: Vec<Meaning>,
}

#[derive(Deserialize, Debug)]
pub struct Meaning {
    pub definitions: Vec<Definition>,
}

#[derive(Deserialize, Debug)]
pub struct Definition {
    pub definition: String,
}

/// Advice Slip `/advice`.
#[derive(Deserialize, Debug)]
pub struct AdviceResponse {
    pub slip: Slip,
}

#[derive(Deserialize, Debug)]
pub struct Slip {
    pub advice: String,
}

/// TheMealDB `/filter.php`. `meals` is `null` when nothing matches.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MealsResponse {
    pub meals: Option<Vec<Meal>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub str_meal: String,
}

/// Google Cloud Translation `/language/translate/v2`.
#[derive(Deserialize, Debug)]
pub struct TranslateResponse {
    pub data: TranslateData,
}

#[derive(Deserialize, Debug)]
pub struct TranslateData {
    pub translations: Vec<Translation>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
}

/// disease.sh `/v3/covid-19/countries/{country}`.
#[derive(Deserialize, Debug)]
pub struct CovidResponse {
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
}

/// OMDb `/?t={title}`.
///
/// OMDb answers `200` with `{"Response": "False", "Error": "..."}` for unknown
/// titles, hence the optional fields.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct MovieResponse {
    pub title: Option<String>,
    pub year: Option<String>,
    pub director: Option<String>,
    pub plot: Option<String>,
}

/// NASA Astronomy Picture of the Day `/planetary/apod`.
#[derive(Deserialize, Debug)]
pub struct ApodResponse {
    pub title: String,
    pub explanation: String,
    pub url: String,
}

/// CoinGecko `/api/v3/simple/price`, indexed by coin id.
pub type PriceResponse = HashMap<String, CoinPrice>;

#[derive(Deserialize, Debug)]
pub struct CoinPrice {
    pub usd: f64,
}
