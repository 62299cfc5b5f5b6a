//! Crypto command handler.
//!
//! US dollar price of a cryptocurrency from CoinGecko.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, required_arg, response_structs::PriceResponse},
    commands::Handler,
};

/// Answers `.crypto <coin>`. The coin is a CoinGecko id like `bitcoin`.
pub struct CryptoHandler {
    client: Client,
    url: String,
}

impl CryptoHandler {
    /// Create a new [CryptoHandler] requesting `url` (the `/simple/price` endpoint).
    pub fn new(client: Client, url: &str) -> Self {
        CryptoHandler {
            client,
            url: url.to_owned(),
        }
    }
}

#[async_trait]
impl Handler for CryptoHandler {
    fn arguments(&self) -> &'static str {
        "[coin]"
    }

    fn description(&self) -> &'static str {
        "Get the current price of a cryptocurrency"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't fetch cryptocurrency price. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let coin = required_arg(args, 0, "coin")?;

        let prices: PriceResponse = request_json(
            self.client
                .get(&self.url)
                .query(&[("ids", coin), ("vs_currencies", "usd")]),
        )
        .await?;

        // CoinGecko answers `{}` for unknown ids
        let price = prices
            .get(coin)
            .ok_or(FetchError::MissingField("coin price"))?;

        Ok(format!("Current price of {}: ${}", coin, price.usd))
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    async fn price_mock(server: &mut mockito::Server, coin: &str, body: &str) {
        server
            .mock("GET", "/simple/price")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ids".to_owned(), coin.to_owned()),
                Matcher::UrlEncoded("vs_currencies".to_owned(), "usd".to_owned()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
    }

    fn create_handler(server: &mockito::Server) -> CryptoHandler {
        CryptoHandler::new(Client::new(), &format!("{}/simple/price", server.url()))
    }

    #[tokio::test]
    async fn test_crypto() {
        let mut server = mockito::Server::new_async().await;
        price_mock(&mut server, "bitcoin", r#"{"bitcoin": {"usd": 43250.12}}"#).await;

        let handler = create_handler(&server);
        assert_eq!(
            handler.handle(&["bitcoin".to_owned()]).await,
            "Current price of bitcoin: $43250.12"
        );
    }

    #[tokio::test]
    async fn test_crypto_unknown_coin() {
        let mut server = mockito::Server::new_async().await;
        price_mock(&mut server, "notacoin", "{}").await;

        let handler = create_handler(&server);
        assert_eq!(
            handler.handle(&["notacoin".to_owned()]).await,
            "Couldn't fetch cryptocurrency price. Please try again."
        );
    }
}
