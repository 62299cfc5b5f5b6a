//! Plain text responses of the bot.
//!
//! Fixed messages shared by the dispatcher and helpers formatting API values the
//! way users expect to read them.

/// Answer to a message whose first word is not a registered command.
pub const NOT_RECOGNIZED: &str = "Command not recognized. Type .help for a list of commands.";

/// Answer when a handler fails without producing its own fallback message.
pub const DISPATCH_ERROR: &str = "An error occurred. Please try again.";

/// Header of the help listing.
pub const HELP_HEADER: &str = "Available commands:";

/// Formats one help line: `<token> [<arguments>] - <description>`.
///
/// # Examples
///
/// ```ignore
/// let line = format_help_line(".currency", "[amount] [from] [to]", "Convert currency");
/// assert_eq!(line, ".currency [amount] [from] [to] - Convert currency");
/// ```
pub fn format_help_line(token: &str, arguments: &str, description: &str) -> String {
    if arguments.is_empty() {
        format!("{} - {}", token, description)
    } else {
        format!("{} {} - {}", token, arguments, description)
    }
}

/// Formats an amount of money with two decimals.
///
/// Ties round away from zero and a negative zero prints as `0.00`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_money(5.0), "5.00");
/// assert_eq!(format_money(0.125), "0.13");
/// ```
pub fn format_money(amount: f64) -> String {
    // `{:.2}` alone rounds ties to even
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round();
    format!("{}{:.2}", sign, cents / 100.0)
}
