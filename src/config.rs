//! Configuration file structures for the dotbot server.
//!
//! This module defines the configuration file format using YAML. The configuration
//! is split into four sections: the webhook server, the outbound HTTP client, the
//! API credentials and the API endpoints. Every section has defaults, so an empty
//! file is a valid configuration (commands needing a key will answer with their
//! fallback message).
//!
//! # Configuration File Format
//!
//! ```yaml
//! server:
//!   host: "0.0.0.0"
//!   port: 3000
//!
//! http:
//!   # Timeout in seconds applied to every outbound API call
//!   timeout: 10
//!
//! credentials:
//!   openweather_api_key: "..."
//!   news_api_key: "..."
//!   nutritionix_app_id: "..."
//!   nutritionix_api_key: "..."
//!   translate_api_key: "..."
//!   movie_api_key: "..."
//!   nasa_api_key: "DEMO_KEY"
//!
//! # Only needed to point a command at another server
//! endpoints:
//!   weather: "http://api.openweathermap.org/data/2.5/weather"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Any value can be overridden with a `DOTBOT_` prefixed variable, nested keys
//! being separated by a double underscore:
//!
//! ```bash
//! export DOTBOT_SERVER__PORT=8080
//! export DOTBOT_CREDENTIALS__NEWS_API_KEY="secret-from-env"
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Prefix of the environment variables overriding the configuration file.
const ENV_PREFIX: &str = "DOTBOT_";

/// Root configuration structure for the dotbot server.
#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// Webhook server configuration
    #[serde(default)]
    pub server: Server,
    /// Outbound HTTP client configuration
    #[serde(default)]
    pub http: Http,
    /// Credentials of the third-party APIs
    #[serde(default)]
    pub credentials: Credentials,
    /// URLs of the third-party APIs
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Config {
    /// Loads the configuration from a YAML file merged with `DOTBOT_` environment variables.
    ///
    /// Environment variables take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not valid YAML or a value has the wrong type.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// let config = Config::load("config.yaml")?;
    /// println!("listening on port {}", config.server.port);
    /// ```
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}

/// Webhook server configuration.
///
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 3000
/// ```
#[derive(Deserialize, Debug)]
pub struct Server {
    /// Address the webhook server binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the webhook server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Outbound HTTP client configuration.
#[derive(Deserialize, Debug)]
pub struct Http {
    /// Timeout in seconds of every outbound API call.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Http {
    fn default() -> Self {
        Http {
            timeout: default_timeout(),
        }
    }
}

/// Credentials of the third-party APIs.
///
/// These are opaque strings, passed as-is to the APIs. Missing keys default to an
/// empty string and the matching commands answer with their fallback message.
#[derive(Deserialize, Debug)]
pub struct Credentials {
    /// OpenWeatherMap key, used by `.weather`
    #[serde(default)]
    pub openweather_api_key: String,
    /// NewsAPI key, used by `.news`
    #[serde(default)]
    pub news_api_key: String,
    /// Nutritionix application id, used by `.calories`
    #[serde(default)]
    pub nutritionix_app_id: String,
    /// Nutritionix key, used by `.calories`
    #[serde(default)]
    pub nutritionix_api_key: String,
    /// Google Cloud Translation key, used by `.translate`
    #[serde(default)]
    pub translate_api_key: String,
    /// OMDb key, used by `.movie`
    #[serde(default)]
    pub movie_api_key: String,
    /// NASA key, used by `.nasa`. NASA accepts `DEMO_KEY` with a low rate limit.
    #[serde(default = "default_nasa_api_key")]
    pub nasa_api_key: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials {
            openweather_api_key: String::new(),
            news_api_key: String::new(),
            nutritionix_app_id: String::new(),
            nutritionix_api_key: String::new(),
            translate_api_key: String::new(),
            movie_api_key: String::new(),
            nasa_api_key: default_nasa_api_key(),
        }
    }
}

/// URLs of the third-party APIs, one per command.
///
/// Path parameters (currency, word, country) are appended to the URL after a `/`.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Endpoints {
    /// OpenWeatherMap current weather, used by `.weather`
    pub weather: String,
    /// NewsAPI top headlines, used by `.news`
    pub news: String,
    /// Nutritionix natural language nutrients, used by `.calories`
    pub calories: String,
    /// Official Joke API random joke, used by `.joke`
    pub joke: String,
    /// Quotable random quote, used by `.quote`
    pub quote: String,
    /// Open Trivia DB, used by `.trivia`
    pub trivia: String,
    /// ExchangeRate-API latest rates, the source currency is appended
    pub currency: String,
    /// Free Dictionary API entries, the word is appended
    pub dict: String,
    /// Advice Slip, used by `.advice`
    pub advice: String,
    /// TheMealDB filter by ingredient, used by `.recipe`
    pub recipe: String,
    /// Google Cloud Translation v2, used by `.translate`
    pub translate: String,
    /// disease.sh countries, the country is appended
    pub covid: String,
    /// OMDb, used by `.movie`
    pub movie: String,
    /// NASA astronomy picture of the day, used by `.nasa`
    pub nasa: String,
    /// CoinGecko simple price, used by `.crypto`
    pub crypto: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            weather: "http://api.openweathermap.org/data/2.5/weather".to_owned(),
            news: "https://newsapi.org/v2/top-headlines".to_owned(),
            calories: "https://trackapi.nutritionix.com/v2/natural/nutrients".to_owned(),
            joke: "https://official-joke-api.appspot.com/random_joke".to_owned(),
            quote: "https://api.quotable.io/random".to_owned(),
            trivia: "https://opentdb.com/api.php".to_owned(),
            currency: "https://api.exchangerate-api.com/v4/latest".to_owned(),
            dict: "https://api.dictionaryapi.dev/api/v2/entries/en".to_owned(),
            advice: "https://api.adviceslip.com/advice".to_owned(),
            recipe: "https://www.themealdb.com/api/json/v1/1/filter.php".to_owned(),
            translate: "https://translation.googleapis.com/language/translate/v2".to_owned(),
            covid: "https://disease.sh/v3/covid-19/countries".to_owned(),
            movie: "http://www.omdbapi.com/".to_owned(),
            nasa: "https://api.nasa.gov/planetary/apod".to_owned(),
            crypto: "https://api.coingecko.com/api/v3/simple/price".to_owned(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout() -> u64 {
    10
}

fn default_nasa_api_key() -> String {
    "DEMO_KEY".to_owned()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_full_config() {
        let file = write_config(
            r#"
server:
  host: "127.0.0.1"
  port: 8080
http:
  timeout: 3
credentials:
  openweather_api_key: "weather-key"
  news_api_key: "news-key"
  nasa_api_key: "nasa-key"
endpoints:
  weather: "http://localhost:1234/weather"
"#,
        );

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.http.timeout, 3);
        assert_eq!(config.credentials.openweather_api_key, "weather-key");
        assert_eq!(config.credentials.news_api_key, "news-key");
        assert_eq!(config.credentials.nasa_api_key, "nasa-key");
        assert_eq!(config.endpoints.weather, "http://localhost:1234/weather");
        // Untouched endpoints keep their default
        assert_eq!(config.endpoints.covid, "https://disease.sh/v3/covid-19/countries");
    }

    #[test]
    #[serial]
    fn test_load_empty_config_uses_defaults() {
        let file = write_config("{}");

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.http.timeout, 10);
        assert_eq!(config.credentials.movie_api_key, "");
        assert_eq!(config.credentials.nasa_api_key, "DEMO_KEY");
        assert_eq!(config.endpoints.crypto, "https://api.coingecko.com/api/v3/simple/price");
    }

    #[test]
    #[serial]
    fn test_load_env_overrides_file() {
        let file = write_config(
            r#"
server:
  port: 8080
credentials:
  news_api_key: "from-file"
"#,
        );

        unsafe {
            std::env::set_var("DOTBOT_SERVER__PORT", "9090");
            std::env::set_var("DOTBOT_CREDENTIALS__NEWS_API_KEY", "from-env");
        }
        let config = Config::load(file.path().to_str().unwrap());
        unsafe {
            std::env::remove_var("DOTBOT_SERVER__PORT");
            std::env::remove_var("DOTBOT_CREDENTIALS__NEWS_API_KEY");
        }

        let config = config.unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.credentials.news_api_key, "from-env");
    }

    #[test]
    #[serial]
    fn test_load_invalid_type() {
        let file = write_config(
            r#"
server:
  port: "not a port"
"#,
        );

        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }
}
