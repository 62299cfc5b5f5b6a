//! Command parsing.
//!
//! This module converts an inbound message into a [`Command`]: a command token and
//! its positional arguments. Parsing is a plain whitespace split, arguments are not
//! typed nor validated here. Each handler interprets its own arguments.

use log::debug;

/// A parsed inbound message.
#[derive(Debug, PartialEq, Eq)]
pub struct Command {
    /// First word of the message, marker included (e.g. `.weather`)
    pub token: String,
    /// Remaining words, in order
    pub args: Vec<String>,
}

impl Command {
    /// Parses a message into a [`Command`].
    ///
    /// # Returns
    ///
    /// * `Some(Command)` - The message has at least one word
    /// * `None` - The message is empty or only whitespace
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let command = Command::parse(".currency 10 USD EUR").unwrap();
    /// assert_eq!(command.token, ".currency");
    /// assert_eq!(command.args, vec!["10", "USD", "EUR"]);
    /// ```
    pub fn parse(body: &str) -> Option<Self> {
        let mut words = body.split_whitespace();
        let token = words.next()?.to_owned();
        let args: Vec<String> = words.map(str::to_owned).collect();

        debug!("parsed command {} with args {:?}", token, args);

        Some(Command { token, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_without_args() {
        let command = Command::parse(".joke").unwrap();
        assert_eq!(command.token, ".joke");
        assert!(command.args.is_empty());
    }

    #[test]
    fn test_parse_command_with_args() {
        let command = Command::parse(".currency 10 USD EUR").unwrap();
        assert_eq!(command.token, ".currency");
        assert_eq!(command.args, vec!["10", "USD", "EUR"]);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let command = Command::parse("  .translate \t hello   fr \n").unwrap();
        assert_eq!(command.token, ".translate");
        assert_eq!(command.args, vec!["hello", "fr"]);
    }

    #[test]
    fn test_parse_keeps_args_raw() {
        let command = Command::parse(".currency -5 usd EUR").unwrap();
        assert_eq!(command.args, vec!["-5", "usd", "EUR"]);
    }

    #[test]
    fn test_parse_plain_text() {
        let command = Command::parse("hello there").unwrap();
        assert_eq!(command.token, "hello");
        assert_eq!(command.args, vec!["there"]);
    }

    #[test]
    fn test_parse_empty_message() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }
}
