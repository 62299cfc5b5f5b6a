//! Currency command handler.
//!
//! Converts an amount between two currencies with the ExchangeRate-API latest rates.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    apis::{FetchError, request_json, required_arg, response_structs::RatesResponse},
    commands::{Handler, text_response::format_money},
};

/// Answers `.currency <amount> <from> <to>`, e.g. `10 USD = 9.21 EUR`.
pub struct CurrencyHandler {
    client: Client,
    url: String,
}

impl CurrencyHandler {
    /// Create a new [CurrencyHandler].
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `url` - URL of the `/v4/latest` endpoint, the source currency is appended to it
    pub fn new(client: Client, url: &str) -> Self {
        CurrencyHandler {
            client,
            url: url.to_owned(),
        }
    }
}

/// Parses a finite amount. `NaN` and `inf` parse as `f64` but are not amounts.
fn parse_amount(amount: &str) -> Result<f64, FetchError> {
    amount
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FetchError::InvalidAmount(amount.to_owned()))
}

#[async_trait]
impl Handler for CurrencyHandler {
    fn arguments(&self) -> &'static str {
        "[amount] [from] [to]"
    }

    fn description(&self) -> &'static str {
        "Convert currency"
    }

    fn fallback(&self) -> &'static str {
        "Couldn't perform currency conversion. Please try again."
    }

    async fn fetch(&self, args: &[String]) -> Result<String, FetchError> {
        let amount = required_arg(args, 0, "amount")?;
        let from = required_arg(args, 1, "from")?;
        let to = required_arg(args, 2, "to")?;
        let value = parse_amount(amount)?;

        let response: RatesResponse =
            request_json(self.client.get(format!("{}/{}", self.url, from))).await?;

        let rate = response
            .rates
            .get(to)
            .ok_or(FetchError::MissingField("rate"))?;

        Ok(format!(
            "{} {} = {} {}",
            amount,
            from,
            format_money(value * rate),
            to
        ))
    }
}
