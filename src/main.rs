//! Dotbot - A webhook chat bot answering dot commands with public REST APIs.
//!
//! The messaging platform posts every chat message to the bot's webhook. When a
//! message starts with a known command, the bot calls the matching API and
//! answers the sender with plain text.
//!
//! # Bot Commands
//!
//! - `.weather <location>` - Current weather
//! - `.news [category]` - Top headlines (default category: `general`)
//! - `.calories <food>` - Calories of a food item
//! - `.joke` - A random joke
//! - `.quote` - A random quote
//! - `.trivia` - A trivia question and its answer
//! - `.currency <amount> <from> <to>` - Currency conversion
//! - `.dict <word>` - Definition of a word
//! - `.advice` - Random advice
//! - `.recipe <ingredient>` - A recipe suggestion
//! - `.translate <text> <language>` - Translation
//! - `.covid <country>` - COVID-19 statistics
//! - `.movie <title>` - Movie information
//! - `.nasa` - Astronomy picture of the day
//! - `.crypto <coin>` - Cryptocurrency price in USD
//! - `.help` - List of commands
//!
//! When an API call fails, the command answers a fixed message such as
//! `Couldn't fetch a joke. Please try again.`. Unknown commands answer
//! `Command not recognized. Type .help for a list of commands.`.
//!
//! # Usage
//!
//! ```bash
//! dotbot --config config.yaml
//! ```
//!
//! See [`config`] for the file format and the `DOTBOT_` environment overrides.
//!
//! # Architecture
//!
//! - [`apis`] - Shared HTTP client, JSON requests and API response structures
//! - [`bot`] - Startup wiring and webhook server lifecycle
//! - [`commands`] - Command parsing, table, dispatcher and handlers
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`delivery`] - Messaging platform boundary
//! - [`webhook`] - `POST /webhook` endpoint
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod apis;
mod bot;
mod commands;
mod config;
mod delivery;
mod webhook;

/// Command-line arguments of the bot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Values can be overridden with `DOTBOT_` environment variables, e.g.
    /// `DOTBOT_CREDENTIALS__OPENWEATHER_API_KEY`.
    #[arg(short, long)]
    config: String,
}

/// Main entry point of the bot.
///
/// 1. **Logging Setup**: `info` level by default, overridden by `RUST_LOG`
/// 2. **Argument Parsing**: Parses command-line arguments using `clap`
/// 3. **Configuration Loading**: Reads the YAML file merged with the environment
/// 4. **Bot Initialization**: Creates the HTTP client and registers the commands
/// 5. **Bot Execution**: Serves the webhook until the process is terminated
///
/// Startup errors are logged and end the process. Once serving, no request
/// failure stops the server.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting dotbot {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    let bot = match Bot::new(config) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };

    if let Err(e) = bot.start().await {
        error!("Webhook server stopped: {}", e);
    }
}
