//! Third-party REST API plumbing shared by the command handlers.
//!
//! Every command calls exactly one public API. This module holds what those calls
//! have in common:
//!
//! - [`build_client`] - the shared HTTP client, with a bounded timeout on every call
//! - [`request_json`] - sends a request and decodes a JSON body
//! - [`FetchError`] - why a call did not produce a usable answer
//! - `response_structs` - the JSON shapes of the API responses
//!
//! # Examples
//!
//! ```ignore
//! use crate::apis::{build_client, request_json};
//!
//! let client = build_client(10)?;
//! let joke: JokeResponse = request_json(client.get("https://official-joke-api.appspot.com/random_joke")).await?;
//! ```

use std::{fmt::Debug, time::Duration};

use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod response_structs;

/// Errors that can occur while fetching an answer from a third-party API.
///
/// Users never see these: a handler turns every variant into its fallback message.
/// They are kept distinct so the logs tell a network failure from an empty result.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport error, timeout, non-2xx status or undecodable body.
    ///
    /// Holds no url: api keys travel in query strings.
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    /// A required positional argument was not given
    #[error("missing argument `{0}`")]
    MissingArgument(&'static str),
    /// The amount is not a finite number
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
    /// The response decoded but lacks the expected data (empty array, unknown key...)
    #[error("response has no {0}")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Request(error.without_url())
    }
}

/// Creates the HTTP client shared by all the handlers.
///
/// # Arguments
///
/// * `timeout` - Timeout in seconds of a whole request, connection included.
pub fn build_client(timeout: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()
}

/// Sends `request` and decodes its JSON body.
///
/// Non-2xx statuses are errors, like transport and decoding failures.
pub async fn request_json<T: DeserializeOwned + Debug>(
    request: RequestBuilder,
) -> Result<T, FetchError> {
    let (client, request) = request.build_split();
    let request = request?;
    let url = request.url().clone();
    // The url may contain an api key, keep it out of default logs
    debug!("request {} {}", request.method(), url);

    let response: T = client
        .execute(request)
        .await?
        .error_for_status()?
        .json()
        .await?;

    debug!("response from {} -> {:?}", url, response);

    Ok(response)
}

/// Returns the positional argument at `index`, or [`FetchError::MissingArgument`].
pub fn required_arg<'a>(
    args: &'a [String],
    index: usize,
    name: &'static str,
) -> Result<&'a str, FetchError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(FetchError::MissingArgument(name))
}
