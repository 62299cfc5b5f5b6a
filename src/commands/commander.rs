//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, the entry point turning an
//! inbound message into the text answered to its sender.
//!
//! # Flow
//!
//! ```text
//! message → Command::parse() → CommandTable::get() → Action → String
//! ```
//!
//! # Examples
//!
//! ```no_run
//! let commander = Commander::new(table);
//! let response = commander.dispatch(".currency 10 USD EUR").await;
//! println!("{}", response);
//! ```

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use log::{error, info};

use crate::commands::{
    Action, CommandTable,
    command::Command,
    text_response::{DISPATCH_ERROR, NOT_RECOGNIZED},
};

/// Command dispatcher.
///
/// The Commander is responsible for:
/// - Splitting a message into a command token and its arguments
/// - Looking the token up in its [`CommandTable`]
/// - Invoking the matching action and returning its text
/// - Answering a fixed message for unknown tokens and escaped failures
///
/// It holds no mutable state and is shared across concurrent requests.
pub struct Commander {
    /// Registered commands, read-only once the commander is built
    table: CommandTable,
}

impl Commander {
    /// Creates a new Commander dispatching to the commands of `table`.
    pub fn new(table: CommandTable) -> Self {
        Commander { table }
    }

    /// Returns the table of registered commands.
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Answers an inbound message.
    ///
    /// Never fails: every path ends with a string.
    ///
    /// # Returns
    ///
    /// * The handler answer, or its fallback message if the API call failed
    /// * The help listing for `.help`
    /// * [`NOT_RECOGNIZED`] if the message is empty or its first word is not a command
    /// * [`DISPATCH_ERROR`] if the handler panicked
    ///
    /// # Examples
    ///
    /// ```no_run
    /// let commander = Commander::new(CommandTable::new());
    /// assert_eq!(commander.dispatch(".unknown").await, NOT_RECOGNIZED);
    /// ```
    pub async fn dispatch(&self, body: &str) -> String {
        let Some(command) = Command::parse(body) else {
            return NOT_RECOGNIZED.to_owned();
        };

        let Some(action) = self.table.get(&command.token) else {
            info!("unknown command {}", command.token);
            return NOT_RECOGNIZED.to_owned();
        };

        info!("handling {} command", command.token);

        match action {
            Action::Help => self.table.describe(),
            Action::Handler(handler) => {
                // Handlers convert their failures into a fallback message,
                // only a panic can get out of them
                match AssertUnwindSafe(handler.handle(&command.args))
                    .catch_unwind()
                    .await
                {
                    Ok(response) => response,
                    Err(_) => {
                        error!("{} command panicked", command.token);
                        DISPATCH_ERROR.to_owned()
                    }
                }
            }
        }
    }
}
