//! Weather command handler.
//!
//! Current weather of a location from OpenWeatherMap, in metric units.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, required_arg, response_structs::WeatherResponse},
    commands::Handler,
};

/// Answers `.weather <location>`.
pub struct WeatherHandler {
    client: Client,
    url: String,
    api_key: String,
}

impl WeatherHandler {
    /// Create a new [WeatherHandler].
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `url` - URL of the `/data/2.5/weather` endpoint
    /// * `api_key` - OpenWeatherMap key
    pub fn new(client: Client, url: &str, api_key: &str) -> Self {
        WeatherHandler {
            client,
            url: url.to_owned(),
            api_key: api_key.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for WeatherHandler {
    fn arguments(&self) -> &'static str {
        "[location]"
    }

    fn description(&self) -> &'static str {
        "Get weather information"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch weather data. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let location = required_arg(args, 0, "location")?;

        let response: WeatherResponse = request_json(self.client.get(&self.url).query(&[
            ("q", location),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
        ]))
        .await?;

        let condition = response
            .weather
            .first()
            .ok_or(FetchError::MissingField("weather condition"))?;

        Ok(format!(
            "Weather in {}: {}, Temperature: {}°C",
            location, condition.description, response.main.temp
        ))
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    fn weather_mock(server: &mut mockito::Server, body: &str) -> mockito::Mock {
        server
            .mock("GET", "/data/2.5/weather")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".to_owned(), "Paris".to_owned()),
                Matcher::UrlEncoded("appid".to_owned(), "key".to_owned()),
                Matcher::UrlEncoded("units".to_owned(), "metric".to_owned()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
    }

    fn create_handler(server: &mockito::Server) -> WeatherHandler {
        WeatherHandler::new(
            Client::new(),
            &format!("{}/data/2.5/weather", server.url()),
            "key",
        )
    }

    #[tokio::test]
    async fn test_weather() {
        let mut server = mockito::Server::new_async().await;
        weather_mock(
            &mut server,
            r#"{"weather": [{"description": "light rain"}], "main": {"temp": 12.5}}"#,
        )
        .create_async()
        .await;

        let handler = create_handler(&server);
        assert_eq!(
            handler.handle(&["Paris".to_owned()]).await,
            "Weather in Paris: light rain, Temperature: 12.5°C"
        );
    }

    #[tokio::test]
    async fn test_weather_integer_temperature() {
        let mut server = mockito::Server::new_async().await;
        weather_mock(
            &mut server,
            r#"{"weather": [{"description": "clear sky"}], "main": {"temp": 20}}"#,
        )
        .create_async()
        .await;

        let handler = create_handler(&server);
        assert_eq!(
            handler.handle(&["Paris".to_owned()]).await,
            "Weather in Paris: clear sky, Temperature: 20°C"
        );
    }

    #[tokio::test]
    async fn test_weather_api_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/data/2.5/weather")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"cod": 401, "message": "Invalid API key"}"#)
            .create_async()
            .await;

        let handler = create_handler(&server);
        assert_eq!(
            handler.handle(&["Paris".to_owned()]).await,
            "Couldn't fetch weather data. Please try again."
        );
    }

    #[tokio::test]
    async fn test_weather_no_condition() {
        let mut server = mockito::Server::new_async().await;
        weather_mock(&mut server, r#"{"weather": [], "main": {"temp": 20}}"#)
            .create_async()
            .await;

        let handler = create_handler(&server);
        assert!(matches!(
            handler.fetch(&["Paris".to_owned()]).await,
            Err(FetchError::MissingField(_))
        ));
    }

    #[tokio::test]
    async fn test_weather_missing_location() {
        let handler = WeatherHandler::new(Client::new(), "http://127.0.0.1:1", "key");
        assert!(matches!(
            handler.fetch(&[]).await,
            Err(FetchError::MissingArgument("location"))
        ));
        assert_eq!(
            handler.handle(&[]).await,
            "Couldn't fetch weather data. Please try again."
        );
    }
}
