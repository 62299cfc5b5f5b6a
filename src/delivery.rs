//! Delivery of the bot answers to the messaging platform.
//!
//! The [`Deliverer`] trait is the boundary with the messaging platform. The only
//! implementation, [`LogDeliverer`], writes the answer to the log instead of
//! sending it; a platform integration implements the trait and is plugged into
//! the [`Bot`](crate::bot::Bot).

use async_trait::async_trait;
use log::info;
use mockall::automock;

/// Sends a text to a recipient of the messaging platform.
///
/// This trait abstracts the platform for easier testing with mocks.
#[automock]
#[async_trait]
pub trait Deliverer: Send + Sync {
    /// Sends `text` to `recipient`.
    async fn deliver(&self, recipient: &str, text: &str) -> Result<(), anyhow::Error>;
}

/// Deliverer writing answers to the log.
#[derive(Default)]
pub struct LogDeliverer;

#[async_trait]
impl Deliverer for LogDeliverer {
    async fn deliver(&self, recipient: &str, text: &str) -> Result<(), anyhow::Error> {
        info!("Sending to {}: {}", recipient, text);
        Ok(())
    }
}
