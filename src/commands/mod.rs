//! Bot command parsing, dispatch and response formatting.
//!
//! This module turns an inbound chat message into the text answered to its sender.
//!
//! # Overview
//!
//! 1. **Parsing** - The message is split on whitespace into a [`command::Command`]:
//!    the first word is the command token (e.g. `.weather`), the rest are raw
//!    string arguments
//! 2. **Lookup** - The token is looked up in the [`CommandTable`]
//! 3. **Execution** - The matching [`Handler`] calls its API and formats the answer
//! 4. **Isolation** - Whatever happens, a string comes out
//!
//! # Architecture
//!
//! ```text
//! ".currency 10 USD EUR"
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: dispatch()
//! └─────────────┘
//!      │ Command::parse()
//!      ▼
//! ┌──────────────────┐      ┌──────────────────────┐
//! │  CommandTable    │ ───▶ │ Action::Help         │ → describe()
//! │  token → Action  │      │ Action::Handler(h)   │ → h.handle(args)
//! └──────────────────┘      └──────────────────────┘
//!                                      │
//!                                      ▼
//!                             "10 USD = 5.00 EUR"
//! ```
//!
//! # Error Handling
//!
//! Failures never reach the user with detail. There are four outcomes:
//!
//! | Outcome | Text |
//! |---------|------|
//! | Success | formatted API answer |
//! | Handler failure | the handler's fallback, e.g. `Couldn't fetch a joke. Please try again.` |
//! | Unknown token | [`NOT_RECOGNIZED`] |
//! | Handler panic | `An error occurred. Please try again.` |
//!
//! # Module Organization
//!
//! - [`commander`] - Dispatcher isolating handler failures
//! - [`command`] - Message tokenization
//! - [`table`] - Token to action mapping and help listing
//! - [`actions`] - One handler per third-party API
//! - [`text_response`] - Fixed response strings and formatting helpers

use async_trait::async_trait;
use log::warn;

use crate::apis::FetchError;

pub mod actions;
mod command;
mod commander;
mod table;
mod text_response;

pub use crate::commands::commander::Commander;
pub use crate::commands::table::{Action, CommandTable};
pub use crate::commands::text_response::NOT_RECOGNIZED;

/// A command answered by one call to a third-party API.
///
/// Implementors only write [`Handler::fetch`], which may fail. The provided
/// [`Handler::handle`] is what the dispatcher calls: it turns any [`FetchError`]
/// into the handler's [`Handler::fallback`] message, so a handler always answers
/// with a string.
///
/// Arguments are the raw whitespace separated words following the command token.
/// Handlers pick the positions they need, default the optional ones and ignore
/// extra words.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Arguments shown by help, e.g. `[amount] [from] [to]`. Empty if none.
    fn arguments(&self) -> &'static str;

    /// One-line description shown by help.
    fn description(&self) -> &'static str;

    /// Message answered when [`Handler::fetch`] fails.
    fn fallback(&self) -> &'static str;

    /// Calls the API and formats its answer.
    async fn fetch(&self, args: &[String]) -> Result<String, FetchError>;

    /// Answers the command, replacing any failure with the fallback message.
    async fn handle(&self, args: &[String]) -> String {
        match self.fetch(args).await {
            Ok(response) => response,
            Err(e) => {
                warn!("command failed with args {:?}: {}", args, e);
                self.fallback().to_owned()
            }
        }
    }
}
