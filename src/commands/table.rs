//! Command table.
//!
//! The [`CommandTable`] maps command tokens to [`Action`]s. It is filled once at
//! startup by a registration step and only read afterwards.

use std::{collections::BTreeMap, sync::Arc};

use crate::commands::{
    Handler,
    text_response::{HELP_HEADER, format_help_line},
};

/// Token of the built-in help command.
pub const HELP_TOKEN: &str = ".help";

/// What a command token triggers.
#[derive(Clone)]
pub enum Action {
    /// List the registered commands, computed from the table when invoked
    Help,
    /// Call a third-party API
    Handler(Arc<dyn Handler>),
}

/// Mapping from command token to [`Action`].
///
/// The table always contains [`HELP_TOKEN`]. Tokens are kept sorted so the help
/// listing is stable.
///
/// # Examples
///
/// ```no_run
/// let mut table = CommandTable::new();
/// table.register(".joke", Arc::new(JokeHandler::new(client, url)));
///
/// assert!(table.get(".joke").is_some());
/// assert!(table.get(".unknown").is_none());
/// ```
#[derive(Clone)]
pub struct CommandTable {
    actions: BTreeMap<String, Action>,
}

impl CommandTable {
    /// Creates a table holding only the help command.
    pub fn new() -> Self {
        let mut actions = BTreeMap::new();
        actions.insert(HELP_TOKEN.to_owned(), Action::Help);
        CommandTable { actions }
    }

    /// Registers `handler` under `token`, replacing any previous entry.
    pub fn register(&mut self, token: &str, handler: Arc<dyn Handler>) {
        self.actions
            .insert(token.to_owned(), Action::Handler(handler));
    }

    /// Returns the action of `token`, `None` if the token is not registered.
    pub fn get(&self, token: &str) -> Option<&Action> {
        self.actions.get(token)
    }

    /// Iterates over the registered tokens in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Lists every registered command, one per line, with its arguments and description.
    pub fn describe(&self) -> String {
        let lines = self
            .actions
            .iter()
            .map(|(token, action)| match action {
                Action::Help => format_help_line(token, "", "Show this list of commands"),
                Action::Handler(handler) => {
                    format_help_line(token, handler.arguments(), handler.description())
                }
            })
            .collect::<Vec<String>>()
            .join("\n");

        format!("{}\n{}", HELP_HEADER, lines)
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
