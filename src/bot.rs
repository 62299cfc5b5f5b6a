//! Bot module wiring the webhook server to the command dispatcher.
//!
//! This module provides the [`Bot`] struct, built once from the [`Config`] at
//! startup:
//!
//! 1. The shared HTTP client is created with the configured timeout
//! 2. The command table is filled with every API command
//! 3. The webhook server is bound to the configured address
//!
//! # Request Flow
//!
//! ```text
//! POST /webhook → Commander::dispatch() → Deliverer::deliver() → 200 OK
//! ```
//!
//! Each request runs as its own task. The command table is read-only once the
//! bot is built, so requests share nothing mutable.

use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

use crate::{
    apis::build_client,
    commands::{CommandTable, Commander, actions::register_actions},
    config::Config,
    delivery::{Deliverer, LogDeliverer},
    webhook::{WebhookState, router},
};

/// Webhook bot answering dot commands.
///
/// # Examples
///
/// ```no_run
/// let config = Config::load("config.yaml")?;
/// let bot = Bot::new(config)?;
/// bot.start().await?; // Serves until the process is terminated
/// ```
pub struct Bot {
    /// Command dispatcher, shared by all requests
    commander: Arc<Commander>,
    /// Messaging platform boundary
    deliverer: Arc<dyn Deliverer>,
    /// Address the webhook server binds to
    host: String,
    /// Port the webhook server listens on
    port: u16,
}

impl Bot {
    /// Creates a new Bot from the configuration, answering through a [`LogDeliverer`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created (e.g. no TLS backend).
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        Self::with_deliverer(config, Arc::new(LogDeliverer))
    }

    /// Creates a new Bot from the configuration, answering through `deliverer`.
    pub fn with_deliverer(
        config: Config,
        deliverer: Arc<dyn Deliverer>,
    ) -> Result<Self, anyhow::Error> {
        let client = build_client(config.http.timeout)?;

        let mut table = CommandTable::new();
        register_actions(&mut table, &client, &config.credentials, &config.endpoints);

        Ok(Bot {
            commander: Arc::new(Commander::new(table)),
            deliverer,
            host: config.server.host,
            port: config.server.port,
        })
    }

    /// Returns the command dispatcher.
    pub fn commander(&self) -> &Commander {
        &self.commander
    }

    /// Binds the webhook server and serves requests.
    ///
    /// Runs until the process is terminated.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server stops.
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let listener = TcpListener::bind((self.host.as_str(), self.port)).await?;
        info!(
            "webhook server listening on {} with {} commands",
            listener.local_addr()?,
            self.commander().table().tokens().count()
        );

        let app = router(WebhookState {
            commander: self.commander,
            deliverer: self.deliverer,
        });
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockall::predicate::eq;

    use super::*;
    use crate::{config::Server, delivery::MockDeliverer};

    #[test]
    fn test_new_registers_commands() {
        let bot = Bot::new(Config::default()).unwrap();
        assert_eq!(bot.commander().table().tokens().count(), 16);
        assert!(bot.commander().table().get(".crypto").is_some());
    }

    #[tokio::test]
    async fn test_start_serves_webhook() {
        // Find a free port
        let port = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let mut deliverer = MockDeliverer::new();
        deliverer
            .expect_deliver()
            .with(eq("erin"), eq(crate::commands::NOT_RECOGNIZED))
            .times(1)
            .returning(|_, _| Ok(()));

        let config = Config {
            server: Server {
                host: "127.0.0.1".to_owned(),
                port,
            },
            ..Config::default()
        };
        let bot = Bot::with_deliverer(config, Arc::new(deliverer)).unwrap();
        let server = tokio::spawn(bot.start());

        let client = reqwest::Client::new();
        let url = format!("http://127.0.0.1:{}/webhook", port);
        let mut response = None;
        // The server may not be listening yet
        for _ in 0..50 {
            if let Ok(r) = client
                .post(&url)
                .json(&serde_json::json!({"message": "nope", "sender": "erin"}))
                .send()
                .await
            {
                response = Some(r);
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        let response = response.expect("webhook server did not start");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert!(response.text().await.unwrap().is_empty());

        server.abort();
    }
}
